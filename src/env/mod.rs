//! 空间环境模块
//!
//! 此模块包含空间仿真环境的核心组件，如节点、位置、属性和范围查询。

// 子模块声明
mod attrs;
mod environment;
mod id;
mod node;
mod plane;
mod position;

// 重新导出公共接口
pub use attrs::{AttributeMap, AttributeValue};
pub use environment::{Environment, EnvironmentError};
pub use id::NodeId;
pub use node::Node;
pub use plane::PlaneEnvironment;
pub use position::Position;

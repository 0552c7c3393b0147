//! 连接规则模块
//!
//! 此模块包含邻域连接策略的核心组件：邻域集合、规则 trait 与具体规则实现。

// 子模块声明
mod error;
mod neighborhood;
mod rule;
mod virtual_range;
mod within_distance;

// 重新导出公共接口
pub use error::{ConfigError, LinkError};
pub use neighborhood::Neighborhood;
pub use rule::LinkingRule;
pub use virtual_range::VirtualRangeRule;
pub use within_distance::ConnectWithinDistance;

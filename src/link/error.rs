//! 连接规则错误类型
//!
//! 构造期配置错误与单次邻域计算的失败原因。

use crate::env::{EnvironmentError, NodeId};
use thiserror::Error;

/// 规则构造期配置错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// 半径必须是非负有限值
    #[error("{which} must be a non-negative finite value, got {value}")]
    InvalidRadius { which: &'static str, value: f64 },
}

/// 邻域计算错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinkError {
    /// 节点缺少规则所需的属性（场景配置错误，不做静默降级）
    #[error("node {node:?} has no attribute `{key}`")]
    MissingAttribute { node: NodeId, key: String },

    /// 属性存在但不是布尔类型
    #[error("attribute `{key}` on node {node:?} is {found}, expected bool")]
    AttributeType {
        node: NodeId,
        key: String,
        found: &'static str,
    },

    /// 环境查询失败，原样向上传播
    #[error(transparent)]
    Environment(#[from] EnvironmentError),
}

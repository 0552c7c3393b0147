//! 环境 trait
//!
//! 定义连接规则所消费的空间查询接口：范围查询与属性读取。

use super::attrs::AttributeValue;
use super::id::NodeId;
use std::collections::HashSet;
use thiserror::Error;

/// 环境查询错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvironmentError {
    /// 查询的节点不在环境中（内核层不一致，此处不做恢复）
    #[error("node {0:?} is not present in the environment")]
    UnknownNode(NodeId),
}

/// 空间环境：持有全部节点及其位置，由仿真内核实现。
///
/// 两个查询都只读；并发读取安全性由实现方保证。
pub trait Environment {
    /// 返回与 `center` 距离不超过 `range` 的所有节点（不含 `center` 本身）。
    fn nodes_within_range(
        &self,
        center: NodeId,
        range: f64,
    ) -> Result<HashSet<NodeId>, EnvironmentError>;

    /// 读取节点属性；键不存在时返回 `Ok(None)`。
    fn attribute(
        &self,
        node: NodeId,
        key: &str,
    ) -> Result<Option<&AttributeValue>, EnvironmentError>;
}

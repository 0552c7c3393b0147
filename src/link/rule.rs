//! 连接规则 trait
//!
//! 定义邻域计算策略接口，由仿真内核在每个节点、每次刷新时调用。

use super::error::LinkError;
use super::neighborhood::Neighborhood;
use crate::env::{Environment, NodeId};

/// 连接规则：从位置与角色计算邻域。
///
/// 规则自身无状态；对不同中心节点的调用可并发执行，
/// 前提是环境的查询操作支持并发只读访问。
pub trait LinkingRule: Send + Sync {
    /// 计算 `center` 在 `env` 中的邻域。
    ///
    /// 不修改环境与任何节点；除两次只读范围查询外无副作用。
    fn compute_neighborhood(
        &self,
        center: NodeId,
        env: &dyn Environment,
    ) -> Result<Neighborhood, LinkError>;

    /// 规则是否局部一致：某节点的邻域只依赖其自身位置/角色
    /// 及半径内候选节点的位置/角色，与全局状态和计算顺序无关。
    /// 内核据此决定能否并行或缓存同一步内的邻域计算。
    fn is_locally_consistent(&self) -> bool;
}

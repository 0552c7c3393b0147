//! 平面环境
//!
//! `Environment` 的内存实现：节点注册、位置更新与线性扫描范围查询。

use super::attrs::AttributeValue;
use super::environment::{Environment, EnvironmentError};
use super::id::NodeId;
use super::node::Node;
use super::position::Position;
use std::collections::HashSet;
use tracing::{debug, trace};

/// 平面环境：按添加顺序分配节点标识。
#[derive(Debug, Default)]
pub struct PlaneEnvironment {
    nodes: Vec<Node>,
    positions: Vec<Position>,
}

impl PlaneEnvironment {
    /// 添加节点并返回其标识符
    pub fn add_node(&mut self, name: impl Into<String>, pos: Position) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(id, name));
        self.positions.push(pos);
        debug!(id = ?id, x = pos.x, y = pos.y, "加入节点");
        id
    }

    /// 移动节点到新位置
    pub fn move_node(&mut self, id: NodeId, pos: Position) -> Result<(), EnvironmentError> {
        let slot = self
            .positions
            .get_mut(id.0)
            .ok_or(EnvironmentError::UnknownNode(id))?;
        trace!(id = ?id, x = pos.x, y = pos.y, "移动节点");
        *slot = pos;
        Ok(())
    }

    /// 写入节点属性
    pub fn set_attribute(
        &mut self,
        id: NodeId,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Result<(), EnvironmentError> {
        let node = self
            .nodes
            .get_mut(id.0)
            .ok_or(EnvironmentError::UnknownNode(id))?;
        node.set_attribute(key, value);
        Ok(())
    }

    /// 获取节点
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// 获取节点位置
    pub fn position(&self, id: NodeId) -> Option<Position> {
        self.positions.get(id.0).copied()
    }

    /// 所有节点标识符（按添加顺序）
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// 节点数量
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// 环境是否为空
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Environment for PlaneEnvironment {
    #[tracing::instrument(skip(self))]
    fn nodes_within_range(
        &self,
        center: NodeId,
        range: f64,
    ) -> Result<HashSet<NodeId>, EnvironmentError> {
        let origin = self
            .positions
            .get(center.0)
            .ok_or(EnvironmentError::UnknownNode(center))?;

        // 线性扫描；边界按 Alchemist 的 within-distance 语义取闭区间。
        let found: HashSet<NodeId> = self
            .positions
            .iter()
            .enumerate()
            .filter(|&(i, pos)| i != center.0 && origin.distance_to(pos) <= range)
            .map(|(i, _)| NodeId(i))
            .collect();

        trace!(found = found.len(), "范围查询完成");
        Ok(found)
    }

    fn attribute(
        &self,
        node: NodeId,
        key: &str,
    ) -> Result<Option<&AttributeValue>, EnvironmentError> {
        let node = self
            .nodes
            .get(node.0)
            .ok_or(EnvironmentError::UnknownNode(node))?;
        Ok(node.attribute(key))
    }
}

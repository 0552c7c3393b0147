//! 双层半径连接规则
//!
//! 非对称的两层连通策略：被标记为“虚拟”的节点（基础设施/中继）
//! 以扩展半径连接一切；普通（物理）节点只在短半径内互连，
//! 但可额外连到扩展半径内的虚拟节点。由此得到的邻接关系是
//! 有意非对称的：两个仅落在彼此扩展半径内的物理节点互不为邻。

use super::error::{ConfigError, LinkError};
use super::neighborhood::Neighborhood;
use super::rule::LinkingRule;
use crate::env::{Environment, NodeId};
use std::collections::HashSet;
use tracing::{debug, trace};

/// 双层半径连接规则
///
/// 三个构造参数在规则生命周期内不可变；规则自身不持有
/// 跨调用状态，每次邻域都从头重算。
#[derive(Debug, Clone)]
pub struct VirtualRangeRule {
    radius: f64,
    virtual_radius: f64,
    virtual_key: String,
}

impl VirtualRangeRule {
    /// 创建新规则。
    ///
    /// `radius` 为物理连通半径，`virtual_radius` 为虚拟节点的扩展半径，
    /// `virtual_key` 为标记虚拟角色的布尔属性名。两个半径必须非负且有限；
    /// 不要求 `virtual_radius >= radius`，任意次序下公式照常适用。
    pub fn new(
        radius: f64,
        virtual_radius: f64,
        virtual_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(ConfigError::InvalidRadius {
                which: "radius",
                value: radius,
            });
        }
        if !virtual_radius.is_finite() || virtual_radius < 0.0 {
            return Err(ConfigError::InvalidRadius {
                which: "virtual_radius",
                value: virtual_radius,
            });
        }
        Ok(Self {
            radius,
            virtual_radius,
            virtual_key: virtual_key.into(),
        })
    }

    /// 物理连通半径
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// 虚拟节点的扩展半径
    pub fn virtual_radius(&self) -> f64 {
        self.virtual_radius
    }

    /// 虚拟角色属性名
    pub fn virtual_key(&self) -> &str {
        &self.virtual_key
    }

    /// 读取节点的虚拟角色标记。
    ///
    /// 属性缺失或非布尔都视为场景配置错误，立即失败，不做静默降级。
    fn is_virtual(&self, node: NodeId, env: &dyn Environment) -> Result<bool, LinkError> {
        match env.attribute(node, &self.virtual_key)? {
            None => Err(LinkError::MissingAttribute {
                node,
                key: self.virtual_key.clone(),
            }),
            Some(value) => value.as_bool().ok_or_else(|| LinkError::AttributeType {
                node,
                key: self.virtual_key.clone(),
                found: value.type_name(),
            }),
        }
    }
}

impl LinkingRule for VirtualRangeRule {
    #[tracing::instrument(skip(self, env), fields(radius = self.radius, virtual_radius = self.virtual_radius))]
    fn compute_neighborhood(
        &self,
        center: NodeId,
        env: &dyn Environment,
    ) -> Result<Neighborhood, LinkError> {
        let near = env.nodes_within_range(center, self.radius)?;
        let far = env.nodes_within_range(center, self.virtual_radius)?;
        trace!(near = near.len(), far = far.len(), "两次范围查询完成");

        if self.is_virtual(center, env)? {
            // 虚拟中心只看扩展半径，不区分候选角色。
            debug!(members = far.len(), "🛰️  虚拟中心：使用扩展半径集合");
            return Ok(Neighborhood::new(center, far));
        }

        // 物理中心：短半径内的一切，加上扩展半径内的虚拟节点。
        let mut members: HashSet<NodeId> = near;
        for candidate in far {
            if self.is_virtual(candidate, env)? {
                members.insert(candidate);
            }
        }
        debug!(members = members.len(), "📡 物理中心：近集并上远处虚拟节点");
        Ok(Neighborhood::new(center, members))
    }

    fn is_locally_consistent(&self) -> bool {
        true
    }
}

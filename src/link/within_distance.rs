//! 固定半径连接规则
//!
//! 最基础的对称策略：凡在同一半径内的节点即互为邻居。

use super::error::{ConfigError, LinkError};
use super::neighborhood::Neighborhood;
use super::rule::LinkingRule;
use crate::env::{Environment, NodeId};
use tracing::trace;

/// 固定半径连接规则
#[derive(Debug, Clone, Copy)]
pub struct ConnectWithinDistance {
    radius: f64,
}

impl ConnectWithinDistance {
    /// 创建新规则；半径必须非负且有限。
    pub fn new(radius: f64) -> Result<Self, ConfigError> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(ConfigError::InvalidRadius {
                which: "radius",
                value: radius,
            });
        }
        Ok(Self { radius })
    }

    /// 连接半径
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl LinkingRule for ConnectWithinDistance {
    fn compute_neighborhood(
        &self,
        center: NodeId,
        env: &dyn Environment,
    ) -> Result<Neighborhood, LinkError> {
        let members = env.nodes_within_range(center, self.radius)?;
        trace!(center = ?center, members = members.len(), "固定半径邻域");
        Ok(Neighborhood::new(center, members))
    }

    fn is_locally_consistent(&self) -> bool {
        true
    }
}

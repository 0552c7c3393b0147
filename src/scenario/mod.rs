//! 场景描述模块
//!
//! 声明式场景文件（JSON）：选择连接规则并铺设节点。

use crate::env::{AttributeMap, NodeId, PlaneEnvironment, Position};
use crate::link::{ConfigError, ConnectWithinDistance, LinkingRule, VirtualRangeRule};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

fn default_virtual_key() -> String {
    "virtual".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub schema_version: u32,
    #[serde(default)]
    pub meta: Option<ScenarioMeta>,
    pub rule: RuleSpec,
    pub nodes: Vec<NodeSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioMeta {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// 连接规则选择：按 `kind` 区分的变体。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleSpec {
    WithinDistance {
        radius: f64,
    },
    VirtualRange {
        radius: f64,
        virtual_radius: f64,
        #[serde(default = "default_virtual_key")]
        virtual_key: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSpec {
    pub id: usize,
    #[serde(default)]
    pub name: Option<String>,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub attributes: AttributeMap,
}

/// 场景构建错误
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("invalid rule configuration: {0}")]
    Rule(#[from] ConfigError),

    #[error("duplicate node id {0}")]
    DuplicateNode(usize),

    #[error("node ids must be dense from 0, missing id {0}")]
    SparseNode(usize),
}

impl RuleSpec {
    /// 构建所选规则
    pub fn build(&self) -> Result<Box<dyn LinkingRule>, ConfigError> {
        match self {
            RuleSpec::WithinDistance { radius } => {
                Ok(Box::new(ConnectWithinDistance::new(*radius)?))
            }
            RuleSpec::VirtualRange {
                radius,
                virtual_radius,
                virtual_key,
            } => Ok(Box::new(VirtualRangeRule::new(
                *radius,
                *virtual_radius,
                virtual_key.clone(),
            )?)),
        }
    }
}

impl ScenarioSpec {
    /// 构建规则与环境。
    ///
    /// 节点标识由环境按添加顺序分配，场景中的 `id` 必须从 0 起连续，
    /// 以保证文件中的 id 与环境分配的 `NodeId` 一致。
    pub fn build(&self) -> Result<(Box<dyn LinkingRule>, PlaneEnvironment), ScenarioError> {
        let rule = self.rule.build()?;

        let mut sorted: Vec<&NodeSpec> = self.nodes.iter().collect();
        sorted.sort_by_key(|n| n.id);
        for pair in sorted.windows(2) {
            if pair[0].id == pair[1].id {
                return Err(ScenarioError::DuplicateNode(pair[0].id));
            }
        }
        for (expect, spec) in sorted.iter().enumerate() {
            if spec.id != expect {
                return Err(ScenarioError::SparseNode(expect));
            }
        }

        let mut env = PlaneEnvironment::default();
        for spec in sorted {
            let name = spec
                .name
                .clone()
                .unwrap_or_else(|| format!("n{}", spec.id));
            let id = env.add_node(name, Position::new(spec.x, spec.y));
            debug_assert_eq!(id, NodeId(spec.id));
            for (key, value) in &spec.attributes {
                env.set_attribute(id, key.clone(), value.clone())
                    .expect("node was just added");
            }
        }

        info!(nodes = env.len(), "场景构建完成");
        Ok((rule, env))
    }
}

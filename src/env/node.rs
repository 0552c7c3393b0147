//! 节点类型
//!
//! 定义仿真实体节点：标识、名称与属性存储。位置由环境持有。

use super::attrs::{AttributeMap, AttributeValue};
use super::id::NodeId;

/// 仿真节点
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    name: String,
    attributes: AttributeMap,
}

impl Node {
    /// 创建新节点
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            attributes: AttributeMap::new(),
        }
    }

    /// 获取节点标识符
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// 获取节点名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 读取属性（键不存在时返回 `None`）
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// 写入属性（仅环境层调用，连接规则只读）
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        self.attributes.insert(key.into(), value.into());
    }
}

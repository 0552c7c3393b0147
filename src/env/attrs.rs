//! 节点属性
//!
//! 定义节点上按名字访问的属性值。场景 JSON 中直接写字面量。

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 属性名到属性值的映射
pub type AttributeMap = HashMap<String, AttributeValue>;

/// 属性值（封闭的小类型集合）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Int(i64),
    Real(f64),
    Text(String),
}

impl AttributeValue {
    /// 布尔类型访问器：非布尔值返回 `None`。
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// 值的类型名（用于错误报告）
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::Bool(_) => "bool",
            AttributeValue::Int(_) => "int",
            AttributeValue::Real(_) => "real",
            AttributeValue::Text(_) => "text",
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> AttributeValue {
        AttributeValue::Bool(b)
    }
}

impl From<i64> for AttributeValue {
    fn from(i: i64) -> AttributeValue {
        AttributeValue::Int(i)
    }
}

impl From<f64> for AttributeValue {
    fn from(r: f64) -> AttributeValue {
        AttributeValue::Real(r)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> AttributeValue {
        AttributeValue::Text(s.to_string())
    }
}

//! 演示和示例代码
//!
//! 包含内置示例场景的构建函数和共享类型。

use crate::env::{PlaneEnvironment, Position};
use crate::link::VirtualRangeRule;

/// 直线场景配置选项
#[derive(Debug, Clone)]
pub struct LineScenarioOpts {
    pub radius: f64,
    pub virtual_radius: f64,
    pub virtual_key: String,
}

impl Default for LineScenarioOpts {
    fn default() -> Self {
        Self {
            radius: 1.5,
            virtual_radius: 3.0,
            virtual_key: "virtual".to_string(),
        }
    }
}

/// 构建直线场景
///
/// 三个节点排在 x 轴上：物理节点在 0，虚拟中继在 1，物理节点在 3。
/// 返回：(规则, 环境)
pub fn build_line_scenario(opts: &LineScenarioOpts) -> (VirtualRangeRule, PlaneEnvironment) {
    let rule = VirtualRangeRule::new(opts.radius, opts.virtual_radius, opts.virtual_key.clone())
        .expect("line scenario radii are valid");

    let mut env = PlaneEnvironment::default();
    let a = env.add_node("a", Position::new(0.0, 0.0));
    let relay = env.add_node("relay", Position::new(1.0, 0.0));
    let b = env.add_node("b", Position::new(3.0, 0.0));

    env.set_attribute(a, opts.virtual_key.clone(), false)
        .expect("node exists");
    env.set_attribute(relay, opts.virtual_key.clone(), true)
        .expect("node exists");
    env.set_attribute(b, opts.virtual_key.clone(), false)
        .expect("node exists");

    (rule, env)
}

//! 邻域连接演示
//!
//! 加载场景文件（或使用内置直线场景），为每个节点计算邻域并打印。

use clap::Parser;
use linksim_rs::demo::{LineScenarioOpts, build_line_scenario};
use linksim_rs::env::{NodeId, PlaneEnvironment};
use linksim_rs::link::LinkingRule;
use linksim_rs::scenario::ScenarioSpec;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "link-demo",
    about = "Compute per-node neighborhoods for a scenario file"
)]
struct Args {
    /// Path to scenario.json; defaults to the built-in line scenario
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Built-in scenario: physical connectivity radius
    #[arg(long, default_value_t = 1.5)]
    radius: f64,

    /// Built-in scenario: extended radius for virtual nodes
    #[arg(long, default_value_t = 3.0)]
    virtual_radius: f64,
}

fn main() {
    // 初始化 tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();

    let (rule, env): (Box<dyn LinkingRule>, PlaneEnvironment) = match &args.scenario {
        Some(path) => {
            let raw = fs::read_to_string(path).expect("read scenario file");
            let spec: ScenarioSpec = serde_json::from_str(&raw).expect("parse scenario json");
            let (rule, env) = spec.build().expect("build scenario");
            (rule, env)
        }
        None => {
            let opts = LineScenarioOpts {
                radius: args.radius,
                virtual_radius: args.virtual_radius,
                ..LineScenarioOpts::default()
            };
            let (rule, env) = build_line_scenario(&opts);
            (Box::new(rule), env)
        }
    };

    println!("locally_consistent {}", rule.is_locally_consistent());

    for center in env.node_ids() {
        let nbh = rule
            .compute_neighborhood(center, &env)
            .expect("compute neighborhood");
        let mut members: Vec<NodeId> = nbh.iter().collect();
        members.sort();
        let rendered: Vec<String> = members.iter().map(|id| id.0.to_string()).collect();
        let name = env.node(center).map(|n| n.name().to_string());
        println!(
            "neighborhood node={} name={} members=[{}]",
            center.0,
            name.unwrap_or_default(),
            rendered.join(",")
        );
    }
}

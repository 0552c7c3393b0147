use crate::env::{PlaneEnvironment, Position};
use crate::link::{ConfigError, ConnectWithinDistance, LinkingRule};

#[test]
fn rejects_invalid_radius() {
    assert!(matches!(
        ConnectWithinDistance::new(-1.0),
        Err(ConfigError::InvalidRadius {
            which: "radius",
            ..
        })
    ));
    assert!(ConnectWithinDistance::new(f64::NAN).is_err());
    assert!(ConnectWithinDistance::new(f64::INFINITY).is_err());
    assert!(ConnectWithinDistance::new(0.0).is_ok());
}

#[test]
fn links_everything_within_the_radius() {
    let mut env = PlaneEnvironment::default();
    let a = env.add_node("a", Position::new(0.0, 0.0));
    let b = env.add_node("b", Position::new(1.0, 0.0));
    let c = env.add_node("c", Position::new(5.0, 0.0));

    let rule = ConnectWithinDistance::new(2.0).expect("valid radius");
    assert!(rule.is_locally_consistent());

    let nbh = rule.compute_neighborhood(a, &env).expect("compute");
    assert!(nbh.contains(b));
    assert!(!nbh.contains(c));
    assert!(!nbh.contains(a));
    assert_eq!(nbh.len(), 1);
}

#[test]
fn single_radius_rule_is_symmetric() {
    let mut env = PlaneEnvironment::default();
    let a = env.add_node("a", Position::new(0.0, 0.0));
    let b = env.add_node("b", Position::new(1.0, 1.0));

    let rule = ConnectWithinDistance::new(2.0).expect("valid radius");
    let of_a = rule.compute_neighborhood(a, &env).expect("compute");
    let of_b = rule.compute_neighborhood(b, &env).expect("compute");
    assert_eq!(of_a.contains(b), of_b.contains(a));
}

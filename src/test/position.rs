use crate::env::Position;

#[test]
fn distance_along_axis() {
    let a = Position::new(0.0, 0.0);
    let b = Position::new(3.0, 0.0);
    assert_eq!(a.distance_to(&b), 3.0);
    assert_eq!(b.distance_to(&a), 3.0);
}

#[test]
fn distance_is_euclidean() {
    let a = Position::new(1.0, 1.0);
    let b = Position::new(4.0, 5.0);
    assert_eq!(a.distance_to(&b), 5.0);
}

#[test]
fn distance_to_self_is_zero() {
    let p = Position::new(-2.5, 7.0);
    assert_eq!(p.distance_to(&p), 0.0);
    assert_eq!(Position::ORIGIN.distance_to(&Position::default()), 0.0);
}

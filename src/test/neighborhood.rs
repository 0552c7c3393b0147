use crate::env::NodeId;
use crate::link::Neighborhood;
use std::collections::HashSet;

#[test]
fn construction_strips_the_center() {
    let center = NodeId(0);
    let members: HashSet<NodeId> = [NodeId(0), NodeId(1), NodeId(2)].into_iter().collect();

    let nbh = Neighborhood::new(center, members);
    assert_eq!(nbh.center(), center);
    assert!(!nbh.contains(center));
    assert_eq!(nbh.len(), 2);
    assert!(nbh.contains(NodeId(1)));
    assert!(nbh.contains(NodeId(2)));
}

#[test]
fn empty_neighborhood() {
    let nbh = Neighborhood::new(NodeId(7), HashSet::new());
    assert!(nbh.is_empty());
    assert_eq!(nbh.len(), 0);
    assert_eq!(nbh.iter().count(), 0);
}

#[test]
fn members_are_deduplicated_by_identity() {
    let members: HashSet<NodeId> = [NodeId(1), NodeId(1), NodeId(2)].into_iter().collect();
    let nbh = Neighborhood::new(NodeId(0), members);
    assert_eq!(nbh.len(), 2);
    assert_eq!(nbh.members().len(), 2);
}

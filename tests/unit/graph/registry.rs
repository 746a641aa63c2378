use super::*;
use crate::foundation::core::Rgba8;

fn v(name: &str) -> VertexId {
    VertexId::new(name)
}

fn style() -> EdgeStyle {
    EdgeStyle {
        color: Rgba8::WHITE,
        width: 0.05,
        z_order: 0,
    }
}

fn square() -> GraphRegistry {
    let mut reg = GraphRegistry::default();
    for name in ["a", "b"] {
        reg.add_vertex(&v(name), Side::Left).unwrap();
    }
    for name in ["c", "d"] {
        reg.add_vertex(&v(name), Side::Right).unwrap();
    }
    reg
}

#[test]
fn vertices_keep_side_and_creation_index() {
    let reg = square();
    assert_eq!(reg.vertex_count(), 4);
    assert_eq!(
        reg.lookup_vertex(&v("b")).unwrap(),
        VertexInfo {
            side: Side::Left,
            index: 1
        }
    );
    assert_eq!(
        reg.lookup_vertex(&v("c")).unwrap(),
        VertexInfo {
            side: Side::Right,
            index: 0
        }
    );
    assert_eq!(reg.side_count(Side::Left), 2);
}

#[test]
fn duplicate_vertex_is_rejected() {
    let mut reg = square();
    assert_eq!(
        reg.add_vertex(&v("a"), Side::Right).unwrap_err(),
        RegistryError::DuplicateVertex(v("a"))
    );
}

#[test]
fn edge_needs_both_endpoints() {
    let mut reg = square();
    assert_eq!(
        reg.add_edge(&v("a"), &v("z"), style()).unwrap_err(),
        RegistryError::UnknownVertex(v("z"))
    );
    assert_eq!(reg.edge_count(), 0);
}

#[test]
fn lookup_is_order_sensitive_by_default() {
    let mut reg = square();
    reg.add_edge(&v("a"), &v("c"), style()).unwrap();

    assert!(reg.lookup_edge(&v("a"), &v("c")).is_ok());
    assert_eq!(
        reg.lookup_edge(&v("c"), &v("a")).unwrap_err(),
        RegistryError::EdgeNotFound(EdgeKey("c_a".to_owned()))
    );
}

#[test]
fn unordered_lookup_finds_reversed_pair() {
    let mut reg = GraphRegistry::new(EdgeLookup::Unordered);
    reg.add_vertex(&v("a"), Side::Left).unwrap();
    reg.add_vertex(&v("c"), Side::Right).unwrap();
    reg.add_edge(&v("a"), &v("c"), style()).unwrap();

    let edge = reg.lookup_edge(&v("c"), &v("a")).unwrap();
    assert_eq!(edge.key.as_str(), "a_c");
}

#[test]
fn unordered_lookup_rejects_reversed_duplicate() {
    let mut reg = GraphRegistry::new(EdgeLookup::Unordered);
    reg.add_vertex(&v("a"), Side::Left).unwrap();
    reg.add_vertex(&v("c"), Side::Right).unwrap();
    reg.add_edge(&v("a"), &v("c"), style()).unwrap();

    let err = reg.add_edge(&v("c"), &v("a"), style()).unwrap_err();
    assert_eq!(
        err,
        RegistryError::DuplicateEdge(EdgeKey::new(&v("a"), &v("c")))
    );
    assert_eq!(reg.edge_count(), 1);
}

#[test]
fn reversed_pair_is_a_separate_edge_by_default() {
    let mut reg = square();
    reg.add_edge(&v("a"), &v("c"), style()).unwrap();
    reg.add_edge(&v("c"), &v("a"), style()).unwrap();
    assert_eq!(reg.edge_count(), 2);
}

#[test]
fn duplicate_edge_is_rejected() {
    let mut reg = square();
    reg.add_edge(&v("a"), &v("c"), style()).unwrap();
    assert!(matches!(
        reg.add_edge(&v("a"), &v("c"), style()),
        Err(RegistryError::DuplicateEdge(_))
    ));
}

#[test]
fn restyle_returns_previous_style() {
    let mut reg = square();
    reg.add_edge(&v("b"), &v("d"), style()).unwrap();

    let yellow = EdgeStyle {
        color: Rgba8::YELLOW,
        width: 0.08,
        z_order: -1,
    };
    let (key, prev) = reg.restyle_edge(&v("b"), &v("d"), yellow).unwrap();
    assert_eq!(key.as_str(), "b_d");
    assert_eq!(prev, style());
    assert_eq!(reg.lookup_edge(&v("b"), &v("d")).unwrap().style, yellow);
}

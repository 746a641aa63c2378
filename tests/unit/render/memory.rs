use super::*;

fn style() -> EdgeStyle {
    EdgeStyle {
        color: Rgba8::WHITE,
        width: 0.05,
        z_order: 0,
    }
}

#[test]
fn created_elements_are_findable() {
    let mut r = RecordingRenderer::new(style());
    let a = VertexId::new("a");
    let key = EdgeKey("a_b".to_owned());

    r.create_node(&a, Side::Left, Point::new(0.0, 2.0), Rgba8::RED, "a")
        .unwrap();
    r.create_edge(&key, Point::new(0.0, 2.0), Point::new(0.0, -2.0))
        .unwrap();

    assert_eq!(r.find_node(&a), Some(Rgba8::RED));
    assert_eq!(r.find_edge(&key), Some(style()));
    assert_eq!(r.find_node(&VertexId::new("zz")), None);
}

#[test]
fn restyling_a_missing_edge_fails() {
    let mut r = RecordingRenderer::new(style());
    let err = r
        .set_edge_style(&EdgeKey("x_y".to_owned()), style())
        .unwrap_err();
    assert!(err.to_string().contains("render error:"));
    assert_eq!(r.edge_style_updates, 0);
}

#[test]
fn duplicate_node_fails() {
    let mut r = RecordingRenderer::new(style());
    let a = VertexId::new("a");
    r.create_node(&a, Side::Left, Point::ORIGIN, Rgba8::RED, "a")
        .unwrap();
    assert!(
        r.create_node(&a, Side::Right, Point::ORIGIN, Rgba8::BLUE, "a")
            .is_err()
    );
}

#[test]
fn texts_are_tracked_per_slot() {
    let mut r = RecordingRenderer::new(style());
    r.set_text(TextSlot::Narration, "one").unwrap();
    r.set_text(TextSlot::Phase, "Phase 1").unwrap();
    r.set_text(TextSlot::Narration, "two").unwrap();

    assert_eq!(r.text(TextSlot::Narration), "two");
    assert_eq!(r.text(TextSlot::Phase), "Phase 1");
    assert_eq!(r.text_history.len(), 3);
}

use super::*;
use crate::foundation::core::EdgeKey;

fn driver() -> PlaybackDriver {
    PlaybackDriver::new(PlaybackConfig::default()).unwrap()
}

fn feed(d: &mut PlaybackDriver, lines: &[&str]) {
    for line in lines {
        d.feed_line(line);
    }
}

fn recolors(effects: &[TimedEffect]) -> Vec<(&str, EdgeStyle, f64)> {
    effects
        .iter()
        .filter_map(|e| match &e.effect {
            EffectKind::RecolorEdge { key, style, .. } => Some((key.as_str(), *style, e.time)),
            _ => None,
        })
        .collect()
}

fn narrations(effects: &[TimedEffect]) -> Vec<&str> {
    effects
        .iter()
        .filter_map(|e| match &e.effect {
            EffectKind::SetNarrationText { text } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn initialize_registers_sides_and_moves_to_running() {
    let mut d = driver();
    assert_eq!(d.state(), PlaybackState::Idle);
    feed(&mut d, &["Initialize: (A,B C,D)"]);

    assert_eq!(d.state(), PlaybackState::Running);
    assert_eq!(d.registry().vertex_count(), 4);
    assert_eq!(
        d.registry()
            .lookup_vertex(&VertexId::new("B"))
            .unwrap()
            .side,
        Side::Left
    );
    assert_eq!(
        d.registry()
            .lookup_vertex(&VertexId::new("D"))
            .unwrap()
            .side,
        Side::Right
    );
    assert_eq!(d.now(), 0.0);

    let pb = d.into_playback();
    let nodes: Vec<_> = pb
        .effects
        .iter()
        .filter(|e| matches!(e.effect, EffectKind::CreateNode { .. }))
        .collect();
    assert_eq!(nodes.len(), 4);
    assert!(nodes.iter().all(|e| e.fire_at() == 0.0));
}

#[test]
fn add_edge_does_not_advance_clock_but_settles() {
    let mut d = driver();
    feed(&mut d, &["Initialize: (1,2 3,4)", "Add_edge: (1,3) (2,4)"]);
    assert_eq!(d.now(), 0.0);
    assert_eq!(d.registry().edge_count(), 2);
    assert_eq!(d.scheduler().settle(), 5.0);

    feed(&mut d, &["Begin_Phase1"]);
    let pb = d.into_playback();
    let phase = pb
        .effects
        .iter()
        .find(|e| matches!(e.effect, EffectKind::SetPhaseText { .. }))
        .unwrap();
    assert_eq!(phase.time, 2.0);
    assert_eq!(phase.fire_at(), 7.0);
}

#[test]
fn each_timed_step_advances_clock_once() {
    let cfg = PlaybackConfig::default();
    let step = cfg.step_duration;
    let mut d = PlaybackDriver::new(cfg).unwrap();
    feed(
        &mut d,
        &[
            "Initialize: (1,2,3 4,5,6)",
            "Add_edge: (1,4) (2,5) (3,6)",
        ],
    );

    let steps = [
        "Begin_Phase1",
        "Add_path: (1,4) (2,5) (3,6)",
        "Update_match: (1,4) (2,5) (3,6)",
        "Disregard_vertices: (1,4) (2,5)",
        "Disregard_vertices:",
        "Maximum matching: 3",
    ];
    let mut last = d.now();
    for line in steps {
        d.feed_line(line);
        assert_eq!(d.now(), last + step, "{line}");
        last = d.now();
    }
}

#[test]
fn add_path_alternates_green_and_white() {
    let mut d = driver();
    feed(
        &mut d,
        &[
            "Initialize: (1,2 3,4)",
            "Add_edge: (1,3) (2,3) (2,4)",
            "Add_path: (1,3) (2,3) (2,4)",
        ],
    );
    let pb = d.into_playback();
    let r = recolors(&pb.effects);
    assert_eq!(r.len(), 3);
    assert_eq!(r[0].1.color, Rgba8::GREEN);
    assert_eq!(r[1].1.color, Rgba8::WHITE);
    assert_eq!(r[2].1.color, Rgba8::GREEN);
    assert!(r.iter().all(|(_, s, t)| s.width == 0.08 && s.z_order == -1 && *t == 2.0));

    let highlights = pb
        .effects
        .iter()
        .filter(|e| matches!(e.effect, EffectKind::HighlightNode { .. }))
        .count();
    assert_eq!(highlights, 6);
}

#[test]
fn disregard_orders_keep_decreasing_across_steps() {
    let mut d = driver();
    feed(
        &mut d,
        &[
            "Initialize: (1,2 3,4)",
            "Add_edge: (1,3) (1,4) (2,3) (2,4)",
            "Disregard_vertices: (1,3) (1,4)",
            "Disregard_vertices: (2,3)",
        ],
    );
    let pb = d.into_playback();
    let r = recolors(&pb.effects);
    let orders: Vec<i32> = r.iter().map(|(_, s, _)| s.z_order).collect();
    assert_eq!(orders, [-2, -3, -4]);
    assert!(
        r.iter()
            .all(|(_, s, _)| s.color == Rgba8::GREY && s.width == 0.05)
    );
}

#[test]
fn empty_disregard_only_narrates() {
    let mut d = driver();
    feed(&mut d, &["Initialize: (1 2)", "Disregard_vertices:"]);
    let pb = d.into_playback();
    assert!(recolors(&pb.effects).is_empty());
    assert!(narrations(&pb.effects).contains(&"No edges to ignore."));
}

#[test]
fn reversed_pair_drops_only_that_effect() {
    let mut d = driver();
    feed(
        &mut d,
        &[
            "Initialize: (1,2 3,4)",
            "Add_edge: (1,3) (2,4)",
            "Update_match: (3,1) (2,4)",
        ],
    );
    assert_eq!(d.stats().skipped_effects, 1);
    let pb = d.into_playback();
    let r = recolors(&pb.effects);
    assert_eq!(r.len(), 1);
    assert_eq!(r[0].0, "2_4");
}

#[test]
fn steps_before_initialize_fail_lookups() {
    let mut d = driver();
    feed(&mut d, &["Add_edge: (1,3)"]);
    assert_eq!(d.state(), PlaybackState::Running);
    assert_eq!(d.registry().edge_count(), 0);
    assert_eq!(d.stats().skipped_effects, 1);
}

#[test]
fn bad_lines_are_skipped() {
    let mut d = driver();
    feed(
        &mut d,
        &["Initialize: (1 2)", "Frobnicate: (1,2)", "Initialize: (1)"],
    );
    assert_eq!(d.stats().lines, 3);
    assert_eq!(d.stats().events, 1);
    assert_eq!(d.stats().skipped_lines, 2);
}

#[test]
fn finish_without_result_says_found_final_matching() {
    let mut d = driver();
    feed(&mut d, &["Initialize: (1 2)", "Begin_Phase1"]);
    d.finish();
    assert_eq!(d.state(), PlaybackState::Finished);

    let pb = d.into_playback();
    let last = pb.effects.last().unwrap();
    assert_eq!(last.time, 4.0);
    assert_eq!(
        last.effect,
        EffectKind::SetNarrationText {
            text: "Found final matching!".to_owned()
        }
    );
    assert_eq!(pb.end_time, 4.0);
}

#[test]
fn finish_after_result_repeats_the_result() {
    let mut d = driver();
    feed(&mut d, &["Initialize: (1 2)", "Maximum matching: 1"]);
    let pb = d.into_playback();
    let texts = narrations(&pb.effects);
    assert_eq!(texts.last().copied(), Some("Maximum matching is  1"));
    assert!(texts.contains(&"Finished"));
}

#[test]
fn steps_after_finish_are_ignored() {
    let mut d = driver();
    feed(&mut d, &["Initialize: (1 2)"]);
    d.finish();
    d.feed_line("Begin_Phase9");
    assert_eq!(d.now(), 0.0);
    assert_eq!(d.stats().events, 1);
}

#[test]
fn recolor_remembers_previous_colour() {
    let mut d = driver();
    feed(
        &mut d,
        &[
            "Initialize: (1 2)",
            "Add_edge: (1,2)",
            "Add_path: (1,2)",
            "Update_match: (1,2)",
        ],
    );
    let pb = d.into_playback();
    let froms: Vec<Rgba8> = pb
        .effects
        .iter()
        .filter_map(|e| match &e.effect {
            EffectKind::RecolorEdge { from, .. } => Some(*from),
            _ => None,
        })
        .collect();
    assert_eq!(froms, [Rgba8::WHITE, Rgba8::GREEN]);
    assert_eq!(
        pb.registry
            .lookup_edge(&VertexId::new("1"), &VertexId::new("2"))
            .unwrap()
            .key,
        EdgeKey("1_2".to_owned())
    );
}

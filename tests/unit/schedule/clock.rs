use super::*;

#[test]
fn advances_forward_only() {
    let mut clock = PlaybackClock::new();
    assert_eq!(clock.now(), 0.0);
    assert_eq!(clock.advance(2.0), 2.0);
    assert_eq!(clock.advance(-1.0), 2.0);
    assert_eq!(clock.advance(f64::NAN), 2.0);
    assert_eq!(clock.advance(0.5), 2.5);
}

use super::*;

const LAYOUT: RowLayout = RowLayout {
    left_row_y: 2.0,
    right_row_y: -2.0,
};

#[test]
fn rows_are_centred() {
    assert_eq!(LAYOUT.position(Side::Left, 0, 3), Point::new(-1.0, 2.0));
    assert_eq!(LAYOUT.position(Side::Left, 1, 3), Point::new(0.0, 2.0));
    assert_eq!(LAYOUT.position(Side::Left, 2, 3), Point::new(1.0, 2.0));
}

#[test]
fn even_rows_straddle_origin() {
    assert_eq!(LAYOUT.position(Side::Right, 0, 2), Point::new(-0.5, -2.0));
    assert_eq!(LAYOUT.position(Side::Right, 1, 2), Point::new(0.5, -2.0));
}

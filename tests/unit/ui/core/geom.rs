use super::*;

#[test]
fn contains_includes_the_origin_and_excludes_the_far_edges() {
    let r = Rect::new(10, 20, 3, 2);
    assert!(r.contains(Pos::new(10, 20)));
    assert!(r.contains(Pos::new(12, 21)));
    assert!(!r.contains(Pos::new(13, 20)));
    assert!(!r.contains(Pos::new(12, 22)));
    assert!(!Rect::new(0, 0, 0, 10).contains(Pos::new(0, 0)));
}

#[test]
fn screen_rect_is_cols_wide_and_rows_tall() {
    let r = Rect::screen(24, 80);
    assert_eq!(r, Rect::new(0, 0, 80, 24));
    assert_eq!(r.last_col(), Some(79));
    assert_eq!(r.last_row(), Some(23));
    assert_eq!(Rect::new(3, 3, 0, 4).last_col(), None);
}

#[test]
fn shrink_collapses_small_rects() {
    assert_eq!(Rect::new(0, 0, 10, 5).shrink(1), Rect::new(1, 1, 8, 3));
    assert!(Rect::new(0, 0, 2, 2).shrink(1).is_empty());
    assert!(Rect::new(0, 0, 2, 2).shrink(3).is_empty());
}

#[test]
fn intersect_keeps_only_the_overlap() {
    let a = Rect::new(0, 0, 5, 5);
    assert_eq!(a.intersect(Rect::new(3, 3, 5, 5)), Rect::new(3, 3, 2, 2));
    assert!(a.intersect(Rect::new(7, 7, 2, 2)).is_empty());
}

#[test]
fn content_area_sits_inside_the_frame_border() {
    let content = Rect::screen(24, 80).content_area();
    assert_eq!(content, Rect::new(1, 1, 78, 22));
    assert_eq!(content.last_col(), Some(78));
    assert_eq!(content.last_row(), Some(22));
}

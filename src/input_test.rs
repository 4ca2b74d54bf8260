use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// --- map_button ---

#[test]
fn map_button_primary_for_zero() {
    assert_eq!(map_button(0), Button::Primary);
}

#[test]
fn map_button_middle_is_other() {
    assert_eq!(map_button(1), Button::Other);
}

#[test]
fn map_button_secondary_for_two() {
    assert_eq!(map_button(2), Button::Secondary);
}

#[test]
fn map_button_back_forward_and_unknown_are_other() {
    assert_eq!(map_button(3), Button::Other);
    assert_eq!(map_button(4), Button::Other);
    assert_eq!(map_button(-1), Button::Other);
}

// --- DrawState ---

#[test]
fn draw_state_default_is_idle() {
    let state = DrawState::default();
    assert_eq!(state, DrawState::Idle);
    assert!(state.segment().is_none());
}

#[test]
fn start_anchors_both_endpoints() {
    let state = DrawState::start(pt(3.0, 4.0));
    assert_eq!(state.segment(), Some(Segment::new(pt(3.0, 4.0), pt(3.0, 4.0))));
}

#[test]
fn track_moves_only_the_end() {
    let mut state = DrawState::start(pt(1.0, 1.0));
    assert!(state.track(pt(8.0, 2.0)));
    assert!(state.track(pt(9.0, 5.0)));
    assert_eq!(state.segment(), Some(Segment::new(pt(1.0, 1.0), pt(9.0, 5.0))));
}

#[test]
fn track_while_idle_is_ignored() {
    let mut state = DrawState::Idle;
    assert!(!state.track(pt(8.0, 2.0)));
    assert_eq!(state, DrawState::Idle);
}

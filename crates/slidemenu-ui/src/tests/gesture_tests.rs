use super::*;
use slidemenu_foundation::LayoutDirection;

fn geometry(direction: LayoutDirection) -> MenuGeometry {
    MenuGeometry::new(800, 180, direction).expect("valid geometry")
}

#[test]
fn session_tracks_movement() {
    let mut session = TouchSession::default();
    assert_eq!(session.phase(), TouchPhase::Idle);
    assert!(!session.is_touching());

    session.on_down(100.0);
    assert!(session.is_touching());
    session.on_move(100.0);
    assert!(!session.has_moved());
    session.on_move(100.5);
    assert!(session.has_moved());
    session.on_move(100.0);
    assert!(session.has_moved(), "movement is sticky for the session");

    assert!(session.on_release());
    assert_eq!(session.phase(), TouchPhase::Released);
    assert!(!session.is_touching());
}

#[test]
fn down_resets_previous_session() {
    let mut session = TouchSession::default();
    session.on_down(10.0);
    session.on_move(40.0);
    session.on_release();

    session.on_down(200.0);
    assert!(!session.has_moved());
    assert_eq!(session.start_x(), 200.0);
}

#[test]
fn move_without_down_is_not_movement() {
    let mut session = TouchSession::default();
    session.on_move(50.0);
    assert!(!session.has_moved());
    assert!(!session.on_release());
}

#[test]
fn closed_menu_only_intercepts_the_edge() {
    let ltr = geometry(LayoutDirection::Ltr);
    assert_eq!(classify_down(&ltr, false, 20.0, 50), InterceptDecision::Intercept);
    assert_eq!(classify_down(&ltr, false, 50.9, 50), InterceptDecision::Intercept);
    assert_eq!(classify_down(&ltr, false, 51.0, 50), InterceptDecision::PassToChild);

    let rtl = geometry(LayoutDirection::Rtl);
    assert_eq!(classify_down(&rtl, false, 780.0, 50), InterceptDecision::Intercept);
    assert_eq!(classify_down(&rtl, false, 400.0, 50), InterceptDecision::PassToChild);
}

#[test]
fn open_menu_leaves_menu_touches_alone() {
    let ltr = geometry(LayoutDirection::Ltr);
    assert_eq!(classify_down(&ltr, true, 300.0, 50), InterceptDecision::PassToChild);
    assert_eq!(classify_down(&ltr, true, 700.0, 50), InterceptDecision::Intercept);
    assert_eq!(classify_down(&ltr, true, 620.0, 50), InterceptDecision::Intercept);

    let rtl = geometry(LayoutDirection::Rtl);
    assert_eq!(classify_down(&rtl, true, 500.0, 50), InterceptDecision::PassToChild);
    assert_eq!(classify_down(&rtl, true, 100.0, 50), InterceptDecision::Intercept);
}

#[test]
fn drags_settle_toward_nearest_side() {
    let ltr = geometry(LayoutDirection::Ltr);
    assert_eq!(classify_release(&ltr, true, 400, false, 0.0), ReleaseOutcome::DragClose);
    assert_eq!(classify_release(&ltr, true, 100, false, 0.0), ReleaseOutcome::DragOpen);
    assert_eq!(classify_release(&ltr, true, 310, false, 0.0), ReleaseOutcome::FallThrough);

    let rtl = geometry(LayoutDirection::Rtl);
    assert_eq!(classify_release(&rtl, true, 400, true, 0.0), ReleaseOutcome::DragOpen);
    assert_eq!(classify_release(&rtl, true, 100, true, 0.0), ReleaseOutcome::DragClose);
}

#[test]
fn drag_outcome_beats_tap_outcome() {
    let ltr = geometry(LayoutDirection::Ltr);
    // Menu open, finger on the content strip, but it moved.
    assert_eq!(classify_release(&ltr, true, 0, true, 700.0), ReleaseOutcome::DragOpen);
}

#[test]
fn tap_on_content_strip_closes_open_menu() {
    let ltr = geometry(LayoutDirection::Ltr);
    assert_eq!(classify_release(&ltr, false, 0, true, 700.0), ReleaseOutcome::TapClose);
    assert_eq!(classify_release(&ltr, false, 0, true, 620.0), ReleaseOutcome::FallThrough);
    assert_eq!(classify_release(&ltr, false, 620, false, 700.0), ReleaseOutcome::FallThrough);

    let rtl = geometry(LayoutDirection::Rtl);
    assert_eq!(classify_release(&rtl, false, 620, true, 100.0), ReleaseOutcome::TapClose);
    assert!(ReleaseOutcome::TapClose.is_toggle());
    assert!(!ReleaseOutcome::FallThrough.is_toggle());
}

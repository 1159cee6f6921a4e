//! End-to-end menu behavior driven through the test rule.

use slidemenu_testing::prelude::*;
use slidemenu_ui::{
    LayoutDirection, Panel, Rect, ScrollContainer, SlidingListener, SlidingMenuConfig,
    WeakSlidingMenu,
};
use std::cell::RefCell;
use std::rc::Rc;

fn rule_180(direction: LayoutDirection) -> SlidingMenuTestRule {
    let config = SlidingMenuConfig::default().with_sliding_padding(180);
    SlidingMenuTestRule::with_config(config, 800, direction).expect("rule")
}

#[test]
fn stepping_offset_to_open_flips_state_only_at_the_end() {
    let rule = rule_180(LayoutDirection::Ltr);
    let menu = rule.menu();
    assert_eq!(menu.geometry().map(|g| g.menu_width()), Some(620));
    assert_eq!(menu.scroll_x(), 620);

    for x in (0..=600).rev().step_by(20) {
        menu.scroll_container().set_scroll_x(x);
        assert!(menu.sync_scroll().expect("sync"));
        assert_eq!(menu.is_menu_open(), x == 0, "open flag at offset {x}");
    }

    let offsets = rule.listener().slide_offsets();
    assert_eq!(offsets.len(), 31, "one slide per offset change");
    assert_monotonic(&offsets, "open fraction");
    assert_approx_eq(offsets[0], 20.0 / 620.0, 1e-6, "first step");
    assert_eq!(offsets.last().copied(), Some(1.0));
    assert_eq!(rule.listener().opened_count(), 0);
}

#[test]
fn animated_open_reports_rising_fraction_and_scales_content() {
    let mut rule = rule_180(LayoutDirection::Ltr);

    rule.menu().open_menu();
    let frames = rule.pump_until_idle().expect("pump");
    assert!(frames > 1);

    assert_eq!(rule.menu().scroll_x(), 0);
    assert!(rule.menu().is_menu_open());
    assert_eq!(rule.listener().opened_count(), 1);

    let offsets = rule.listener().slide_offsets();
    assert_monotonic(&offsets, "open fraction");
    assert_eq!(offsets.last().copied(), Some(1.0));

    let layer = rule.content_panel().graphics_layer();
    assert_approx_eq(layer.scale_x, 0.9, 1e-6, "content scale when open");
    assert_eq!(layer.scale_x, layer.scale_y);
    assert_eq!((layer.pivot.x, layer.pivot.y), (0.0, 300.0));
}

#[test]
fn slide_notifications_carry_the_menu_panel() {
    let mut rule = rule_180(LayoutDirection::Ltr);
    rule.menu().open_menu();
    rule.pump_until_idle().expect("pump");

    let menu_id = rule.menu_panel().id();
    for event in rule.listener().events() {
        match event {
            RecordedEvent::Slide { menu, .. }
            | RecordedEvent::Opened { menu }
            | RecordedEvent::Closed { menu } => assert_eq!(menu, Some(menu_id)),
        }
    }
}

#[test]
fn open_then_close_round_trip() {
    let mut rule = rule_180(LayoutDirection::Ltr);

    rule.menu().open_menu();
    rule.menu().open_menu();
    rule.pump_until_idle().expect("pump");
    rule.menu().close_menu();
    rule.menu().close_menu();
    rule.pump_until_idle().expect("pump");

    assert_eq!(rule.menu().scroll_x(), 620);
    assert!(!rule.menu().is_menu_open());
    assert_eq!(rule.listener().opened_count(), 1);
    assert_eq!(rule.listener().closed_count(), 1);
    assert_approx_eq(
        rule.content_panel().graphics_layer().scale_x,
        1.0,
        1e-6,
        "content scale when closed",
    );
}

#[test]
fn edge_swipe_past_halfway_opens() {
    let mut rule = rule_180(LayoutDirection::Ltr);

    let handled = rule
        .perform_touch_input(|touch| touch.swipe((10.0, 300.0), (420.0, 300.0), 8))
        .expect("swipe");
    assert!(handled);
    assert!(rule.menu().is_menu_open());
    assert_eq!(rule.listener().opened_count(), 1);

    rule.pump_until_idle().expect("pump");
    assert_eq!(rule.menu().scroll_x(), 0);
}

#[test]
fn edge_swipe_short_of_halfway_settles_closed() {
    let mut rule = rule_180(LayoutDirection::Ltr);

    rule.perform_touch_input(|touch| touch.swipe((10.0, 300.0), (200.0, 300.0), 4))
        .expect("swipe");
    assert!(!rule.menu().is_menu_open());

    rule.pump_until_idle().expect("pump");
    assert_eq!(rule.menu().scroll_x(), 620);
    assert_eq!(rule.listener().opened_count(), 0);
    assert_eq!(rule.listener().closed_count(), 0);
}

#[test]
fn flag_holds_while_finger_rests_on_a_boundary() {
    let rule = rule_180(LayoutDirection::Ltr);

    rule.perform_touch_input(|touch| {
        touch.down(10.0, 300.0)?;
        touch.move_to(700.0, 300.0)?;
        Ok(())
    })
    .expect("drag");

    assert_eq!(rule.menu().scroll_x(), 0);
    assert!(rule.menu().is_touching());
    assert!(!rule.menu().is_menu_open());
    assert_eq!(rule.listener().opened_count(), 0);

    rule.perform_touch_input(|touch| touch.up()).expect("release");
    assert!(rule.menu().is_menu_open());
    assert_eq!(rule.listener().opened_count(), 1);
}

#[test]
fn tap_on_content_strip_closes() {
    let mut rule = rule_180(LayoutDirection::Ltr);
    rule.menu().open_menu();
    rule.pump_until_idle().expect("pump");
    rule.listener().clear();

    let handled = rule
        .perform_touch_input(|touch| touch.click(750.0, 300.0))
        .expect("click");
    assert!(handled);
    assert!(!rule.menu().is_menu_open());
    assert_eq!(
        rule.listener().take(),
        vec![RecordedEvent::Closed {
            menu: Some(rule.menu_panel().id())
        }]
    );

    rule.pump_until_idle().expect("pump");
    assert_eq!(rule.menu().scroll_x(), 620);
}

#[test]
fn rtl_mirrors_everything() {
    let mut rule = rule_180(LayoutDirection::Rtl);
    assert_eq!(rule.menu().scroll_x(), 0);

    rule.perform_touch_input(|touch| touch.swipe((790.0, 300.0), (380.0, 300.0), 8))
        .expect("swipe");
    assert!(rule.menu().is_menu_open());
    rule.pump_until_idle().expect("pump");
    assert_eq!(rule.menu().scroll_x(), 620);

    let layer = rule.content_panel().graphics_layer();
    assert_approx_eq(layer.scale_x, 0.9, 1e-6, "content scale when open");
    assert_eq!(layer.pivot.x, 800.0);

    rule.perform_touch_input(|touch| touch.click(40.0, 300.0))
        .expect("click");
    assert!(!rule.menu().is_menu_open());
    rule.pump_until_idle().expect("pump");
    assert_eq!(rule.menu().scroll_x(), 0);
}

#[test]
fn cancelled_drag_returns_without_callbacks() {
    let mut rule = rule_180(LayoutDirection::Ltr);

    rule.perform_touch_input(|touch| {
        touch.down(10.0, 300.0)?;
        touch.move_to(600.0, 300.0)?;
        touch.cancel()?;
        Ok(())
    })
    .expect("cancelled drag");
    rule.pump_until_idle().expect("pump");

    assert_eq!(rule.menu().scroll_x(), 620);
    assert!(!rule.menu().is_menu_open());
    assert!(rule.listener().events().iter().all(RecordedEvent::is_slide));
}

#[test]
fn cancelled_drag_on_open_menu_stays_open() {
    let mut rule = rule_180(LayoutDirection::Ltr);
    rule.menu().open_menu();
    rule.pump_until_idle().expect("pump");
    rule.listener().clear();

    rule.perform_touch_input(|touch| {
        touch.down(700.0, 300.0)?;
        touch.move_to(100.0, 300.0)?;
        touch.cancel()?;
        Ok(())
    })
    .expect("cancelled drag");
    assert!(rule.menu().scroll_x() > 310);
    rule.pump_until_idle().expect("pump");

    assert_eq!(rule.menu().scroll_x(), 0);
    assert!(rule.menu().is_menu_open());
    assert_eq!(rule.listener().closed_count(), 0);
}

struct Tagged {
    tag: &'static str,
    log: Rc<RefCell<Vec<&'static str>>>,
}

impl SlidingListener for Tagged {
    fn on_menu_opened(&self, _menu: Option<&Panel>) {
        self.log.borrow_mut().push(self.tag);
    }
}

#[test]
fn listeners_hear_in_registration_order() {
    let rule = rule_180(LayoutDirection::Ltr);
    let log = Rc::new(RefCell::new(Vec::new()));
    for tag in ["first", "second", "third"] {
        rule.menu().set_sliding_listener(Rc::new(Tagged {
            tag,
            log: log.clone(),
        }));
    }
    assert_eq!(rule.menu().listener_count(), 4);

    rule.menu().open_menu();
    assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
}

struct Bouncer {
    menu: WeakSlidingMenu,
}

impl SlidingListener for Bouncer {
    fn on_menu_opened(&self, _menu: Option<&Panel>) {
        if let Some(menu) = self.menu.upgrade() {
            menu.close_menu();
        }
    }

    fn on_menu_closed(&self, _menu: Option<&Panel>) {
        if let Some(menu) = self.menu.upgrade() {
            menu.open_menu();
        }
    }
}

#[test]
fn re_entrant_listeners_are_capped() {
    let mut rule = rule_180(LayoutDirection::Ltr);
    rule.menu().set_sliding_listener(Rc::new(Bouncer {
        menu: rule.menu().downgrade(),
    }));

    rule.menu().open_menu();

    assert_eq!(rule.listener().opened_count(), 8);
    assert_eq!(rule.listener().closed_count(), 8);
    assert!(rule.menu().is_menu_open());

    rule.pump_until_idle().expect("pump");
    assert_eq!(rule.menu().scroll_x(), 0);
}

#[test]
fn narrowed_crack_leaves_wider_edge_touches_to_content() {
    let rule = rule_180(LayoutDirection::Ltr);
    rule.menu().set_sliding_width(20);
    rule.content_panel().set_pointer_handler(|_| true);

    rule.perform_touch_input(|touch| touch.swipe((30.0, 300.0), (500.0, 300.0), 4))
        .expect("swipe");
    assert!(!rule.menu().is_menu_open());
}

#[test]
fn panel_bounds_follow_the_scroll_offset() {
    let mut rule = rule_180(LayoutDirection::Ltr);
    let height = slidemenu_testing::PANEL_HEIGHT as f32;

    let content = rule.content_panel().clone();
    let menu_panel = rule.menu_panel().clone();
    let closed = rule.menu().panel_bounds(&content).expect("measured");
    assert_rect_approx_eq(closed, Rect::new(0.0, 0.0, 800.0, height), 1e-3, "closed content");

    rule.menu().open_menu();
    rule.pump_until_idle().expect("pump");

    let open = rule.menu().panel_bounds(&content).expect("measured");
    assert_rect_approx_eq(open, Rect::new(620.0, 0.0, 800.0, height), 1e-3, "open content");
    let menu_bounds = rule.menu().panel_bounds(&menu_panel).expect("measured");
    assert_rect_approx_eq(menu_bounds, Rect::new(0.0, 0.0, 620.0, height), 1e-3, "open menu");
    assert!(rule.menu().panel_bounds(&Panel::new("stranger")).is_none());
}

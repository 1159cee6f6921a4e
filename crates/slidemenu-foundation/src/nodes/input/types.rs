use slidemenu_ui_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

impl PointerEventKind {
    /// Up and cancel both end the gesture.
    pub fn ends_gesture(self) -> bool {
        matches!(self, PointerEventKind::Up | PointerEventKind::Cancel)
    }
}

#[derive(Debug, Default)]
struct EventFlags {
    consumed: Cell<bool>,
    disallow_intercept: Cell<bool>,
}

/// A single touch sample in the coordinates of whoever receives it.
///
/// Copies made with [`PointerEvent::at`] share one set of flags with the
/// original. `consumed` stops later handlers from acting on the event and
/// `disallow_intercept` tells the enclosing dispatcher that the current
/// gesture belongs to a child and must not be stolen back.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    flags: Rc<EventFlags>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            id: 0,
            kind,
            position,
            flags: Rc::default(),
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y))
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y))
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y))
    }

    pub fn cancel(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Cancel, Point::new(x, y))
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }

    pub fn consume(&self) {
        self.flags.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.flags.consumed.get()
    }

    /// Ask the dispatcher above not to intercept the rest of this gesture.
    pub fn request_disallow_intercept(&self, disallow: bool) {
        self.flags.disallow_intercept.set(disallow);
    }

    pub fn is_intercept_disallowed(&self) -> bool {
        self.flags.disallow_intercept.get()
    }

    /// The same event seen at `position`, usually a panel's local coordinates.
    pub fn at(&self, position: Point) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_up_and_cancel_end_a_gesture() {
        assert!(!PointerEventKind::Down.ends_gesture());
        assert!(!PointerEventKind::Move.ends_gesture());
        assert!(PointerEventKind::Up.ends_gesture());
        assert!(PointerEventKind::Cancel.ends_gesture());
    }

    #[test]
    fn local_copy_shares_flags() {
        let event = PointerEvent::down(10.0, 10.0).with_id(7);
        let local = event.at(Point::new(2.0, 3.0));

        local.consume();
        local.request_disallow_intercept(true);

        assert!(event.is_consumed());
        assert!(event.is_intercept_disallowed());
        assert_eq!(local.id, 7);
        assert_eq!(local.x(), 2.0);
        assert_eq!(event.x(), 10.0);
    }
}

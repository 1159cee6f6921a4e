use super::*;

#[test]
fn callbacks_fire_once_with_frame_time() {
    let clock = FrameClock::new();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let registration = {
        let seen = Rc::clone(&seen);
        clock.with_frame_nanos(move |time| seen.borrow_mut().push(time))
    };

    assert!(clock.has_pending_frame_callbacks());
    assert_eq!(clock.drain_frame_callbacks(16), 1);
    assert_eq!(clock.drain_frame_callbacks(32), 0);
    assert_eq!(seen.borrow().as_slice(), &[16]);
    assert_eq!(clock.last_frame_nanos(), Some(32));
    drop(registration);
}

#[test]
fn dropping_registration_unschedules_callback() {
    let clock = FrameClock::new();
    let fired = Rc::new(Cell::new(false));

    let registration = {
        let fired = Rc::clone(&fired);
        clock.with_frame_nanos(move |_| fired.set(true))
    };
    drop(registration);

    assert!(!clock.has_pending_frame_callbacks());
    clock.drain_frame_callbacks(16);
    assert!(!fired.get());
}

#[test]
fn cancel_only_removes_its_own_callback() {
    let clock = FrameClock::new();
    let count = Rc::new(Cell::new(0));

    let first = {
        let count = Rc::clone(&count);
        clock.with_frame_nanos(move |_| count.set(count.get() + 1))
    };
    let second = {
        let count = Rc::clone(&count);
        clock.with_frame_nanos(move |_| count.set(count.get() + 10))
    };
    first.cancel();

    clock.drain_frame_callbacks(16);
    assert_eq!(count.get(), 10);
    drop(second);
}

#[test]
fn callbacks_registered_during_drain_wait_for_next_frame() {
    let clock = FrameClock::new();
    let frames = Rc::new(RefCell::new(Vec::new()));
    let follow_up: Rc<RefCell<Option<FrameCallbackRegistration>>> = Rc::new(RefCell::new(None));

    let registration = {
        let clock_inner = clock.clone();
        let frames = Rc::clone(&frames);
        let follow_up = Rc::clone(&follow_up);
        clock.with_frame_nanos(move |time| {
            frames.borrow_mut().push(time);
            let frames = Rc::clone(&frames);
            let next = clock_inner.with_frame_nanos(move |time| frames.borrow_mut().push(time));
            follow_up.borrow_mut().replace(next);
        })
    };

    assert_eq!(clock.drain_frame_callbacks(1), 1);
    assert_eq!(frames.borrow().as_slice(), &[1]);
    assert!(clock.has_pending_frame_callbacks());
    assert_eq!(clock.drain_frame_callbacks(2), 1);
    assert_eq!(frames.borrow().as_slice(), &[1, 2]);
    drop(registration);
}

#[test]
fn registration_outliving_its_clock_is_harmless() {
    let clock = FrameClock::new();
    let registration = clock.with_frame_nanos(|_| {});
    drop(clock);
    registration.cancel();
}

// Host-side tests for the per-frame tick hub.

#![allow(dead_code)]
mod ticker {
    include!("../src/core/ticker.rs");
}

use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;
use ticker::*;

fn tick(frame: u64, offset: f32) -> FrameTick {
    FrameTick {
        frame,
        dt: 1.0 / 60.0,
        elapsed: frame as f32 / 60.0,
        scroll_offset: offset,
    }
}

#[test]
fn subscribers_see_every_tick() {
    let mut t = Ticker::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = seen.clone();
    t.subscribe(move |tick| {
        s.borrow_mut().push(tick.scroll_offset);
        ControlFlow::Continue(())
    });
    t.emit(&tick(1, 0.1));
    t.emit(&tick(2, 0.2));
    assert_eq!(*seen.borrow(), vec![0.1, 0.2]);
    assert_eq!(t.subscriber_count(), 1);
}

#[test]
fn break_drops_the_subscriber() {
    let mut t = Ticker::new();
    let calls = Rc::new(RefCell::new(0));
    let c = calls.clone();
    t.subscribe(move |tick| {
        *c.borrow_mut() += 1;
        if tick.frame >= 2 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    for f in 1..=5 {
        t.emit(&tick(f, 0.0));
    }
    assert_eq!(*calls.borrow(), 2);
    assert_eq!(t.subscriber_count(), 0);
}

#[test]
fn break_leaves_other_subscribers_running() {
    let mut t = Ticker::new();
    let calls = Rc::new(RefCell::new(0));
    t.subscribe(|_| ControlFlow::Break(()));
    let c = calls.clone();
    t.subscribe(move |_| {
        *c.borrow_mut() += 1;
        ControlFlow::Continue(())
    });
    t.emit(&tick(1, 0.0));
    t.emit(&tick(2, 0.0));
    assert_eq!(t.subscriber_count(), 1);
    assert_eq!(*calls.borrow(), 2);
}

#[test]
fn subscribers_run_in_order() {
    let mut t = Ticker::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    for i in 0..3 {
        let o = order.clone();
        t.subscribe(move |_| {
            o.borrow_mut().push(i);
            ControlFlow::Continue(())
        });
    }
    t.emit(&FrameTick::default());
    assert_eq!(*order.borrow(), vec![0, 1, 2]);
}

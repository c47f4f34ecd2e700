use std::ops::ControlFlow;

/// Emitted once per animation frame, after the scene has been stepped.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTick {
    pub frame: u64,
    pub dt: f32,
    pub elapsed: f32,
    pub scroll_offset: f32,
}

type Subscriber = Box<dyn FnMut(&FrameTick) -> ControlFlow<()>>;

/// Publish/subscribe hub for the per-frame tick.
///
/// Anything that must stay in step with the 3D frame clock (the DOM nav
/// overlay, for one) subscribes here instead of relying on its own update
/// cycle. A subscriber returning `ControlFlow::Break(())` is dropped.
#[derive(Default)]
pub struct Ticker {
    subscribers: Vec<Subscriber>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, f: impl FnMut(&FrameTick) -> ControlFlow<()> + 'static) {
        self.subscribers.push(Box::new(f));
    }

    #[inline]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn emit(&mut self, tick: &FrameTick) {
        self.subscribers
            .retain_mut(|f| matches!(f(tick), ControlFlow::Continue(())));
    }
}

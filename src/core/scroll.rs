use super::constants::{SCROLL_EPS, SCROLL_PAGES, SCROLL_SMOOTH_TIME_SEC};
use super::easing::Damped;

/// Horizontal, infinitely looping scroll state.
///
/// The target and the damped value live on an unbounded line measured in
/// whole turns; `offset()` folds the damped value into [0, 1). Keeping both
/// unbounded means a wrap from the last page to the first is just more
/// scrolling, with no jump for the damping to chase.
#[derive(Clone, Debug)]
pub struct ScrollControls {
    pages: f32,
    smooth_time: f32,
    eps: f32,
    target: f32,
    current: Damped,
}

impl Default for ScrollControls {
    fn default() -> Self {
        Self::new(SCROLL_PAGES)
    }
}

impl ScrollControls {
    pub fn new(pages: f32) -> Self {
        Self {
            pages: pages.max(1.0),
            smooth_time: SCROLL_SMOOTH_TIME_SEC,
            eps: SCROLL_EPS,
            target: 0.0,
            current: Damped::new(0.0),
        }
    }

    #[inline]
    pub fn pages(&self) -> f32 {
        self.pages
    }

    /// Scroll by a pixel delta; one viewport of travel is one page.
    pub fn scroll_by_pixels(&mut self, delta_px: f32, viewport_px: f32) {
        if viewport_px <= 0.0 || !delta_px.is_finite() {
            return;
        }
        self.scroll_by(delta_px / (viewport_px * self.pages));
    }

    /// Scroll by a delta measured in turns (1.0 = the whole loop).
    pub fn scroll_by(&mut self, delta: f32) {
        if delta.is_finite() {
            self.target += delta;
        }
    }

    /// Move the target `n` page boundaries forward (negative: backward).
    pub fn step_pages(&mut self, n: i32) {
        if n == 0 {
            return;
        }
        let page = self.target * self.pages;
        let base = if n > 0 { page.floor() } else { page.ceil() };
        self.target = (base + n as f32) / self.pages;
    }

    /// Advance the damping by `dt` seconds. Returns `false` once settled.
    pub fn tick(&mut self, dt: f32) -> bool {
        let moving = self
            .current
            .damp_eps(self.target, self.smooth_time, dt, self.eps);
        let turns = self.current.value.floor();
        if turns != 0.0 {
            self.current.value -= turns;
            self.target -= turns;
        }
        moving
    }

    /// Damped scroll progress in [0, 1).
    pub fn offset(&self) -> f32 {
        wrap01(self.current.value)
    }

    /// Where the scroll is heading, in [0, 1).
    pub fn target_offset(&self) -> f32 {
        wrap01(self.target)
    }

    /// Index of the page currently under the damped offset.
    pub fn page(&self) -> usize {
        let n = self.pages.round().max(1.0) as usize;
        super::nav::highlighted_index(self.offset(), n)
    }
}

/// Page step for a navigation key, if it is one.
#[inline]
pub fn page_step_for_key(key: &str) -> Option<i32> {
    match key {
        "ArrowRight" | "PageDown" => Some(1),
        "ArrowLeft" | "PageUp" => Some(-1),
        _ => None,
    }
}

#[inline]
fn wrap01(v: f32) -> f32 {
    let r = v.rem_euclid(1.0);
    if r >= 1.0 {
        0.0
    } else {
        r
    }
}

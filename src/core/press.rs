use glam::Vec2;

/// Pointer press tracked between `pointerdown` and `pointerup`.
///
/// Movement under `slop` keeps the press a click. Once it is exceeded the
/// press becomes a drag, and the distance covered so far is handed over in
/// one step so the ring does not lag behind the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PressState {
    pub active: bool,
    pub start: Vec2,
    pub last: Vec2,
    pub travelled: f32,
    slop: f32,
}

impl PressState {
    pub fn new(slop: f32) -> Self {
        Self {
            active: false,
            start: Vec2::ZERO,
            last: Vec2::ZERO,
            travelled: 0.0,
            slop: slop.max(0.0),
        }
    }

    pub fn begin(&mut self, at: Vec2) {
        *self = Self {
            active: true,
            start: at,
            last: at,
            travelled: 0.0,
            slop: self.slop,
        };
    }

    /// Record a move. Returns the horizontal distance to scroll by, or `None`
    /// while the press is still within the click slop.
    pub fn drag_to(&mut self, at: Vec2) -> Option<f32> {
        let was_click = self.is_click();
        let prev = self.last;
        self.travelled += (at - prev).length();
        self.last = at;
        if self.is_click() {
            None
        } else if was_click {
            Some(at.x - self.start.x)
        } else {
            Some(at.x - prev.x)
        }
    }

    #[inline]
    pub fn is_click(&self) -> bool {
        self.travelled < self.slop
    }

    /// End the press; returns `true` if it counts as a click.
    pub fn release(&mut self) -> bool {
        let click = self.active && self.is_click();
        self.active = false;
        click
    }
}

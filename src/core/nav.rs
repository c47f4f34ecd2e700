use super::constants::FRAME_COUNT;
use super::i18n::Translate;
use super::selection::SelectionStore;

/// One navigation target: the frame identifier it selects and its label key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub id: &'static str,
    pub label_key: &'static str,
}

/// Ring order: entry `i` selects frame `i`.
pub const NAV_ENTRIES: [NavEntry; FRAME_COUNT] = [
    NavEntry {
        id: "0",
        label_key: "home.projects.title",
    },
    NavEntry {
        id: "1",
        label_key: "home.blog.title",
    },
    NavEntry {
        id: "2",
        label_key: "home.me.title",
    },
    NavEntry {
        id: "3",
        label_key: "home.fun.title",
    },
];

/// `floor(offset * n) mod n`; the entry the scroll position sits on.
#[inline]
pub fn highlighted_index(scroll_offset: f32, n: usize) -> usize {
    if n == 0 || !scroll_offset.is_finite() {
        return 0;
    }
    ((scroll_offset * n as f32).floor() as i64).rem_euclid(n as i64) as usize
}

/// State behind the navigation overlay.
///
/// It keeps its own copy of the scroll position, refreshed from the frame
/// ticker, so the highlighted entry tracks the 3D camera frame by frame.
#[derive(Clone, Debug)]
pub struct NavOverlay {
    entries: Vec<NavEntry>,
    labels: Vec<String>,
    scroll_pos: f32,
    highlighted: usize,
    mobile_open: bool,
}

impl NavOverlay {
    pub fn new(entries: &[NavEntry], translator: &dyn Translate) -> Self {
        Self {
            entries: entries.to_vec(),
            labels: entries.iter().map(|e| translator.t(e.label_key)).collect(),
            scroll_pos: 0.0,
            highlighted: 0,
            mobile_open: false,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    #[inline]
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    #[inline]
    pub fn scroll_pos(&self) -> f32 {
        self.scroll_pos
    }

    #[inline]
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    #[inline]
    pub fn is_highlighted(&self, index: usize) -> bool {
        index == self.highlighted
    }

    /// Take the latest scroll offset. Returns `true` if the highlight moved.
    pub fn on_tick(&mut self, scroll_offset: f32) -> bool {
        self.scroll_pos = scroll_offset;
        let next = highlighted_index(scroll_offset, self.entries.len());
        let changed = next != self.highlighted;
        self.highlighted = next;
        changed
    }

    /// Select the frame behind entry `index`; returns its identifier.
    pub fn activate(&self, index: usize, store: &mut dyn SelectionStore) -> Option<&'static str> {
        let entry = self.entries.get(index)?;
        store.set_selection(entry.id);
        Some(entry.id)
    }

    #[inline]
    pub fn is_mobile_open(&self) -> bool {
        self.mobile_open
    }

    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.mobile_open = !self.mobile_open;
        self.mobile_open
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_open = false;
    }
}

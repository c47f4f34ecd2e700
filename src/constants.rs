/// Web frontend tuning constants.
///
/// These express intended behavior (element ids, input thresholds, clear
/// colour) and keep magic numbers out of the event and render code.
// DOM ids
pub const CANVAS_ID: &str = "app-canvas";
pub const OVERLAY_ROOT_ID: &str = "overlay-root";
pub const LABELS_ROOT_ID: &str = "labels-root";

// Query parameters besides the selection
pub const LANG_PARAM: &str = "lang";
pub const LOG_PARAM: &str = "log";
pub const FALLBACK_LANG: &str = "en";

// Pointer
pub const CLICK_SLOP_PX: f32 = 6.0; // movement under this between down/up counts as a click

// Wheel delta_mode conversions to pixels
pub const WHEEL_LINE_PX: f32 = 16.0;

// Frame clock
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after tab switches so the damping doesn't jump

// Labels
pub const LABEL_MIN_FONT_PX: f32 = 8.0;
pub const LABEL_MAX_FONT_PX: f32 = 160.0;

// Rendering
pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.0]; // black page background
pub const PORTAL_BORDER_HOVER_BOOST: f32 = 1.0;
pub const IMMERSION_STRENGTH: f32 = 0.6;

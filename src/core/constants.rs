use glam::Vec3;

// Scene layout and motion tuning shared by the core and the web frontend.

// Frames
pub const FRAME_COUNT: usize = 4;
pub const FRAME_SCALE: f32 = 3.0; // uniform scale applied to every frame group
pub const FRAME_LABEL_OFFSET: Vec3 = Vec3::new(-0.5, 0.7, 0.0); // label anchor, frame-local
pub const FRAME_LABEL_FONT_SIZE: f32 = 0.15; // frame-local units
pub const PORTAL_PLANE_HALF_EXTENT: f32 = 0.5; // unit plane
pub const PORTAL_CONTENT_DEPTH: f32 = 2.0; // backdrop distance behind the window

// Smoothing time constants (seconds)
pub const BLEND_SMOOTH_TIME_SEC: f32 = 0.2;
pub const RIG_SMOOTH_TIME_SEC: f32 = 0.5;
pub const SCROLL_SMOOTH_TIME_SEC: f32 = 0.25;

// Snap thresholds
pub const DAMP_EPS: f32 = 0.001;
pub const SCROLL_EPS: f32 = 1e-7;

// Camera rig
pub const OVERVIEW_POSITION: Vec3 = Vec3::new(0.0, 0.0, 5.0);
pub const FOCUS_OFFSET_LOCAL: Vec3 = Vec3::new(0.0, 0.0, 0.25); // viewpoint, frame-local
pub const FOCUS_POINT_LOCAL: Vec3 = Vec3::ZERO;
pub const FOCUS_TURN_PER_ID: f32 = std::f32::consts::FRAC_PI_2;

// Camera projection
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Scroll
pub const SCROLL_PAGES: f32 = 4.0;

// Starfield
pub const STAR_RADIUS: f32 = 100.0;
pub const STAR_DEPTH: f32 = 50.0;
pub const STAR_COUNT: usize = 5000;
pub const STAR_SIZE_FACTOR: f32 = 4.0;
pub const STAR_SATURATION: f32 = 0.0;
pub const STAR_LIGHTNESS: f32 = 0.9;
pub const STAR_SEED: u64 = 7;

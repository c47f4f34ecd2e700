pub mod camera;
pub mod constants;
pub mod easing;
pub mod i18n;
pub mod nav;
pub mod portal;
pub mod press;
pub mod rig;
pub mod scene;
pub mod scroll;
pub mod selection;
pub mod stars;
pub mod surface;
pub mod ticker;
pub mod world;

pub use camera::*;
pub use constants::*;
pub use i18n::{Catalog, Translate, Translator};
pub use nav::{highlighted_index, NavOverlay, NAV_ENTRIES};
pub use selection::{Selection, SelectionStore, SELECTION_PARAM};
pub use ticker::{FrameTick, Ticker};
pub use world::{World, WorldParams};

// Shaders bundled as string constants
pub static STARS_WGSL: &str = include_str!("../../shaders/stars.wgsl");
pub static PORTAL_WGSL: &str = include_str!("../../shaders/portal.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");

// Bundled translation catalogs
pub static LOCALE_EN: &str = include_str!("../../locales/en.json");
pub static LOCALE_ES: &str = include_str!("../../locales/es.json");

use glam::{Vec2, Vec3};
use std::f32::consts::{FRAC_PI_2, PI};

use super::camera::PerspectiveCamera;
use super::constants::{FRAME_SCALE, SCROLL_PAGES};
use super::i18n::Translate;
use super::portal::{cursor_for, PortalContent, PortalFrame};
use super::rig::{CameraRig, RigMode};
use super::scene::{SceneError, SceneGraph, Transform};
use super::scroll::ScrollControls;
use super::selection::SelectionStore;
use super::stars::{self, Star, StarfieldParams};
use super::ticker::FrameTick;

/// Placement and content of one portal frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSpec {
    pub identifier: &'static str,
    pub name_key: &'static str,
    pub position: Vec3,
    pub yaw: f32,
    pub scale: f32,
    pub color_rgb: [f32; 3],
    pub caption: &'static str,
}

/// The four frames on a ring facing its centre, in selection order.
pub fn default_frames() -> Vec<FrameSpec> {
    vec![
        FrameSpec {
            identifier: "0",
            name_key: "home.projects.title",
            position: Vec3::new(0.0, 0.0, 0.0),
            yaw: 0.0,
            scale: FRAME_SCALE,
            color_rgb: [1.0, 0.0, 0.0], // red
            caption: "1",
        },
        FrameSpec {
            identifier: "1",
            name_key: "home.blog.title",
            position: Vec3::new(-5.0, 0.0, 5.0),
            yaw: FRAC_PI_2,
            scale: FRAME_SCALE,
            color_rgb: [1.0, 0.41, 0.71], // hotpink
            caption: "2",
        },
        FrameSpec {
            identifier: "2",
            name_key: "home.me.title",
            position: Vec3::new(0.0, 0.0, 10.0),
            yaw: PI,
            scale: FRAME_SCALE,
            color_rgb: [0.0, 0.5, 0.0], // green
            caption: "3",
        },
        FrameSpec {
            identifier: "3",
            name_key: "home.fun.title",
            position: Vec3::new(5.0, 0.0, 5.0),
            yaw: -FRAC_PI_2,
            scale: FRAME_SCALE,
            color_rgb: [0.0, 0.0, 1.0], // blue
            caption: "4",
        },
    ]
}

#[derive(Clone, Debug)]
pub struct WorldParams {
    pub frames: Vec<FrameSpec>,
    pub scroll_pages: f32,
    pub starfield: StarfieldParams,
}

impl Default for WorldParams {
    fn default() -> Self {
        Self {
            frames: default_frames(),
            scroll_pages: SCROLL_PAGES,
            starfield: StarfieldParams::default(),
        }
    }
}

/// Everything in the 3D scene plus the state that drives it each frame.
pub struct World {
    pub scene: SceneGraph,
    pub frames: Vec<PortalFrame>,
    pub camera: PerspectiveCamera,
    pub rig: CameraRig,
    pub scroll: ScrollControls,
    pub stars: Vec<Star>,
    frame: u64,
    elapsed: f32,
}

impl World {
    pub fn build(params: &WorldParams, translator: &dyn Translate) -> Result<Self, SceneError> {
        let mut scene = SceneGraph::new();
        let mut frames = Vec::with_capacity(params.frames.len());
        for entry in &params.frames {
            let frame = PortalFrame::spawn(
                &mut scene,
                entry.identifier,
                &translator.t(entry.name_key),
                Transform::from_yaw(entry.position, entry.yaw, entry.scale),
                PortalContent {
                    color_rgb: entry.color_rgb,
                    caption: entry.caption.to_string(),
                },
            )?;
            frames.push(frame);
        }
        let camera = PerspectiveCamera::default();
        let rig = CameraRig::new(&camera);
        Ok(Self {
            scene,
            frames,
            camera,
            rig,
            scroll: ScrollControls::new(params.scroll_pages),
            stars: stars::generate(&params.starfield),
            frame: 0,
            elapsed: 0.0,
        })
    }

    /// Advance scroll, portal blends and the camera rig by `dt` seconds.
    pub fn step(&mut self, selection: Option<&str>, dt: f32) -> FrameTick {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.frame += 1;
        self.elapsed += dt;
        self.scroll.tick(dt);
        let offset = self.scroll.offset();
        for f in &mut self.frames {
            f.step(selection, dt);
        }
        self.rig
            .step(&self.scene, selection, offset, dt, &mut self.camera);
        FrameTick {
            frame: self.frame,
            dt,
            elapsed: self.elapsed,
            scroll_offset: offset,
        }
    }

    #[inline]
    pub fn mode(&self) -> &RigMode {
        self.rig.mode()
    }

    /// Nearest frame under the given NDC point. Only that frame receives the click.
    pub fn pick(&self, ndc: Vec2) -> Option<usize> {
        let (ro, rd) = self.camera.ndc_ray(ndc);
        let mut best: Option<(usize, f32)> = None;
        for (i, f) in self.frames.iter().enumerate() {
            if let Some(t) = f.intersect(&self.scene, ro, rd) {
                match best {
                    Some((_, bt)) if t >= bt => {}
                    _ => best = Some((i, t)),
                }
            }
        }
        best.map(|(i, _)| i)
    }

    /// Update hover flags from the pointer (`None` when it left the canvas).
    /// Returns `true` if the cursor style should change.
    pub fn hover(&mut self, ndc: Option<Vec2>) -> bool {
        let before = self.cursor();
        let hit = ndc.and_then(|p| self.pick(p));
        for (i, f) in self.frames.iter_mut().enumerate() {
            f.set_hovered(hit == Some(i));
        }
        before != self.cursor()
    }

    /// Route a click to the nearest frame. Returns the selected identifier.
    pub fn click(&self, ndc: Vec2, store: &mut dyn SelectionStore) -> Option<&str> {
        let i = self.pick(ndc)?;
        let frame = &self.frames[i];
        frame.click(store);
        Some(frame.identifier())
    }

    #[inline]
    pub fn cursor(&self) -> &'static str {
        cursor_for(&self.frames)
    }

    /// World-space anchor of frame `i`'s label.
    pub fn label_anchor(&self, i: usize) -> Option<Vec3> {
        let f = self.frames.get(i)?;
        Some(self.scene.local_to_world(f.label(), Vec3::ZERO))
    }

    /// Largest blend across frames and the colour of that frame.
    pub fn immersion(&self) -> ([f32; 3], f32) {
        self.frames
            .iter()
            .map(|f| (f.content().color_rgb, f.blend()))
            .fold(([0.0; 3], 0.0), |acc, cur| if cur.1 > acc.1 { cur } else { acc })
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

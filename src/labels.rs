use crate::constants::{LABEL_MAX_FONT_PX, LABEL_MIN_FONT_PX};
use crate::core::camera::ndc_to_pixel;
use crate::core::{World, FRAME_LABEL_FONT_SIZE};
use crate::dom;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Frame names drawn as DOM text pinned to each frame's label anchor.
pub struct FrameLabels {
    elements: Vec<web::HtmlElement>,
}

impl FrameLabels {
    pub fn mount(document: &web::Document, root: &web::Element, world: &World) -> Self {
        dom::clear_children(root);
        let elements = world
            .frames
            .iter()
            .filter_map(|f| {
                let el = dom::append_element(document, root, "div", "frame-label")?;
                el.set_text_content(Some(f.name()));
                el.dyn_into::<web::HtmlElement>().ok()
            })
            .collect();
        Self { elements }
    }

    /// Reposition every label for the current camera. `width`/`height` are CSS pixels.
    pub fn update(&self, world: &World, width: f32, height: f32) {
        for (i, el) in self.elements.iter().enumerate() {
            let style = el.style();
            let placed = world.label_anchor(i).and_then(|anchor| {
                let ndc = world.camera.project(anchor)?;
                if ndc.z > 1.0 || ndc.x.abs() > 1.5 || ndc.y.abs() > 1.5 {
                    return None;
                }
                let distance = (anchor - world.camera.position).length().max(1e-3);
                let world_px = height / world.camera.frustum_height_at(distance);
                Some((ndc_to_pixel(Vec2::new(ndc.x, ndc.y), width, height), world_px))
            });
            match placed {
                Some((px, world_px)) => {
                    // Label size is frame-local; frames carry a uniform scale.
                    let scale = world
                        .frames
                        .get(i)
                        .and_then(|f| world.scene.node(f.group()))
                        .map(|n| n.transform.scale.x)
                        .unwrap_or(1.0);
                    let font_px = (FRAME_LABEL_FONT_SIZE * scale * world_px)
                        .clamp(LABEL_MIN_FONT_PX, LABEL_MAX_FONT_PX);
                    _ = style.set_property("display", "block");
                    _ = style.set_property(
                        "transform",
                        &format!("translate({:.1}px, {:.1}px)", px.x, px.y),
                    );
                    _ = style.set_property("font-size", &format!("{:.1}px", font_px));
                }
                None => {
                    _ = style.set_property("display", "none");
                }
            }
        }
    }
}

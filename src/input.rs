use crate::constants::WHEEL_LINE_PX;
use crate::core::camera::pixel_to_ndc;
use glam::Vec2;
use web_sys as web;

/// Pointer position in CSS pixels relative to the canvas.
#[inline]
pub fn pointer_css_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

/// Pointer position in normalized device coordinates of the canvas.
#[inline]
pub fn pointer_ndc(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    pixel_to_ndc(
        pointer_css_px(ev, canvas),
        rect.width() as f32,
        rect.height() as f32,
    )
}

/// Horizontal-first wheel delta in CSS pixels.
pub fn wheel_delta_px(ev: &web::WheelEvent, viewport_px: f32) -> f32 {
    let dx = ev.delta_x() as f32;
    let dy = ev.delta_y() as f32;
    let raw = if dx.abs() > dy.abs() { dx } else { dy };
    match ev.delta_mode() {
        web::WheelEvent::DOM_DELTA_LINE => raw * WHEEL_LINE_PX,
        web::WheelEvent::DOM_DELTA_PAGE => raw * viewport_px,
        _ => raw,
    }
}

use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(element: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

#[inline]
pub fn set_cursor(canvas: &web::HtmlCanvasElement, cursor: &str) {
    _ = canvas.style().set_property("cursor", cursor);
}

/// Create an element with a class, appended to `parent`.
pub fn append_element(
    document: &web::Document,
    parent: &web::Element,
    tag: &str,
    class: &str,
) -> Option<web::Element> {
    let el = document.create_element(tag).ok()?;
    el.set_class_name(class);
    parent.append_child(&el).ok()?;
    Some(el)
}

/// Remove all children of `el`.
pub fn clear_children(el: &web::Element) {
    while let Some(child) = el.first_child() {
        _ = el.remove_child(&child);
    }
}

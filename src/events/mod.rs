pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_input_handlers, InputWiring};

use crate::core::World;
use crate::input;
use crate::url::UrlSelection;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wheel over the canvas drives the horizontal scroll.
pub fn wire_wheel(canvas: &web::HtmlCanvasElement, world: Rc<RefCell<World>>) {
    let canvas_for_wheel = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let width = canvas_for_wheel.get_bounding_client_rect().width() as f32;
        let delta = input::wheel_delta_px(&ev, width);
        world.borrow_mut().scroll.scroll_by_pixels(delta, width);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Back/forward navigation re-reads the selection from the URL.
pub fn wire_popstate(selection: Rc<RefCell<UrlSelection>>) {
    if let Some(window) = web::window() {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            selection.borrow_mut().sync_from_location();
        }) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

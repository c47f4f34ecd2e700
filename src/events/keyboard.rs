use crate::core::scroll::page_step_for_key;
use crate::core::{SelectionStore, World};
use crate::url::UrlSelection;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    world: &Rc<RefCell<World>>,
    selection: &Rc<RefCell<UrlSelection>>,
) {
    let key = ev.key();
    if let Some(step) = page_step_for_key(&key) {
        let mut world = world.borrow_mut();
        world.scroll.step_pages(step);
        log::debug!(
            "[scroll] page {} -> target {:.3}",
            world.scroll.page(),
            world.scroll.target_offset()
        );
        ev.prevent_default();
        return;
    }
    if key == "Escape" {
        // The only way back to the overview without leaving the page.
        selection.borrow_mut().clear_selection();
    }
}

pub fn wire_global_keydown(world: Rc<RefCell<World>>, selection: Rc<RefCell<UrlSelection>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &world, &selection);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

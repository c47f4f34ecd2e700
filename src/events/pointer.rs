use crate::core::World;
use crate::dom;
use crate::core::press::PressState;
use crate::input;
use crate::url::UrlSelection;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub world: Rc<RefCell<World>>,
    pub selection: Rc<RefCell<UrlSelection>>,
    pub press: Rc<RefCell<PressState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_pointerleave(&w);
}

fn listen(
    canvas: &web::HtmlCanvasElement,
    event: &str,
    handler: impl FnMut(web::PointerEvent) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(
        Box::new(handler) as Box<dyn FnMut(web::PointerEvent)>
    );
    _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    listen(&canvas_for_listener, "pointermove", move |ev| {
        let px = input::pointer_css_px(&ev, &w.canvas);
        let mut press = w.press.borrow_mut();
        if press.active {
            // Dragging scrolls the ring; content follows the finger.
            if let Some(dx) = press.drag_to(px) {
                let width = w.canvas.get_bounding_client_rect().width() as f32;
                w.world.borrow_mut().scroll.scroll_by_pixels(-dx, width);
            }
            return;
        }
        drop(press);
        let ndc = input::pointer_ndc(&ev, &w.canvas);
        let mut world = w.world.borrow_mut();
        if world.hover(Some(ndc)) {
            dom::set_cursor(&w.canvas, world.cursor());
        }
    });
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    listen(&canvas_for_listener, "pointerdown", move |ev| {
        let px = input::pointer_css_px(&ev, &w.canvas);
        w.press.borrow_mut().begin(px);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    });
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    listen(&canvas_for_listener, "pointerup", move |ev| {
        let was_click = w.press.borrow_mut().release();
        if was_click {
            let ndc = input::pointer_ndc(&ev, &w.canvas);
            let world = w.world.borrow();
            let mut selection = w.selection.borrow_mut();
            if let Some(id) = world.click(ndc, &mut *selection) {
                log::info!("[click] frame {}", id);
            }
        }
        _ = w.canvas.release_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    });
}

fn wire_pointerleave(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    listen(&canvas_for_listener, "pointerleave", move |_ev| {
        w.press.borrow_mut().active = false;
        let mut world = w.world.borrow_mut();
        if world.hover(None) {
            dom::set_cursor(&w.canvas, world.cursor());
        }
    });
}

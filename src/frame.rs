use crate::constants::MAX_FRAME_DT_SEC;
use crate::core::stars::Star;
use crate::core::surface::{recovery_for, SurfaceRecovery};
use crate::core::{Ticker, World};
use crate::labels::FrameLabels;
use crate::render;
use crate::url::UrlSelection;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub world: Rc<RefCell<World>>,
    pub selection: Rc<RefCell<UrlSelection>>,
    pub ticker: Rc<RefCell<Ticker>>,
    pub labels: FrameLabels,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32().min(MAX_FRAME_DT_SEC);

        let width = self.canvas.width();
        let height = self.canvas.height();

        let tick = {
            let selection = self.selection.borrow();
            let mut world = self.world.borrow_mut();
            world.camera.set_viewport(width, height);
            world.step(selection.get(), dt_sec)
        };
        // Subscribers may touch the DOM; no world borrow is held here.
        self.ticker.borrow_mut().emit(&tick);

        let world = self.world.borrow();
        let rect = self.canvas.get_bounding_client_rect();
        self.labels
            .update(&world, rect.width() as f32, rect.height() as f32);

        let Some(g) = &mut self.gpu else {
            return;
        };
        g.resize_if_needed(width, height);
        let Err(e) = g.render(&world) else {
            return;
        };
        match recovery_for(&e) {
            SurfaceRecovery::Reconfigure => {
                log::warn!("[gpu] surface {:?}, reconfiguring", e);
                g.reconfigure();
            }
            SurfaceRecovery::Skip => log::warn!("[gpu] frame skipped: {:?}", e),
            SurfaceRecovery::Stop => {
                log::error!("[gpu] render stopped: {:?}", e);
                self.gpu = None;
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    stars: &[Star],
    portal_count: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, stars, portal_count).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

#![cfg(target_arch = "wasm32")]
use crate::core::press::PressState;
use crate::core::selection::query_param;
use crate::core::{
    Catalog, NavOverlay, Ticker, Translate, Translator, World, WorldParams, LOCALE_EN, LOCALE_ES,
    NAV_ENTRIES,
};
use constants::{
    CANVAS_ID, CLICK_SLOP_PX, FALLBACK_LANG, LABELS_ROOT_ID, LANG_PARAM, LOG_PARAM, OVERLAY_ROOT_ID,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod labels;
mod overlay;
mod render;
mod url;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// `?log=debug` turns on debug output; everything else logs at info.
fn log_level(search: &str) -> log::Level {
    match query_param(search, LOG_PARAM).as_deref() {
        Some("debug") => log::Level::Debug,
        Some("trace") => log::Level::Trace,
        _ => log::Level::Info,
    }
}

fn build_translator(window: &web::Window, search: &str) -> anyhow::Result<Translator> {
    let catalogs = vec![
        Catalog::from_json("en", LOCALE_EN)?,
        Catalog::from_json("es", LOCALE_ES)?,
    ];
    let mut translator = Translator::new(catalogs, FALLBACK_LANG);
    let requested = query_param(search, LANG_PARAM).or_else(|| window.navigator().language());
    if let Some(tag) = requested {
        if !translator.set_language(&tag) {
            log::info!("[i18n] no catalog for {}, using {}", tag, FALLBACK_LANG);
        }
    }
    log::info!(
        "[i18n] language={}",
        translator.active_language().unwrap_or(FALLBACK_LANG)
    );
    Ok(translator)
}

fn element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log_level(&url::location_search())).ok();
    log::info!("portal-folio starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = element_by_id(&document, CANVAS_ID)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    // Internal pixel size follows CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let search = url::location_search();
    let translator = build_translator(&window, &search)?;

    let world = World::build(&WorldParams::default(), &translator)?;
    log::info!(
        "[world] frames={} nodes={} stars={}",
        world.frames.len(),
        world.scene.node_count(),
        world.stars.len()
    );
    let world = Rc::new(RefCell::new(world));
    let selection = Rc::new(RefCell::new(url::UrlSelection::from_location()));
    let ticker = Rc::new(RefCell::new(Ticker::new()));

    if overlay::mount(
        &document,
        element_by_id(&document, OVERLAY_ROOT_ID)?,
        NavOverlay::new(&NAV_ENTRIES, &translator),
        &translator.t("home.menu.label"),
        selection.clone(),
        &ticker,
    )
    .is_none()
    {
        log::warn!("[overlay] could not build navigation");
    }
    let labels = labels::FrameLabels::mount(
        &document,
        &element_by_id(&document, LABELS_ROOT_ID)?,
        &world.borrow(),
    );

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        world: world.clone(),
        selection: selection.clone(),
        press: Rc::new(RefCell::new(PressState::new(CLICK_SLOP_PX))),
    });
    events::wire_wheel(&canvas, world.clone());
    events::wire_popstate(selection.clone());
    events::wire_global_keydown(world.clone(), selection.clone());

    let (stars, portal_count) = {
        let w = world.borrow();
        (w.stars.clone(), w.frames.len())
    };
    let gpu = frame::init_gpu(&canvas, &stars, portal_count).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        world,
        selection,
        ticker,
        labels,
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

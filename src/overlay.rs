use crate::core::{NavOverlay, Ticker};
use crate::dom;
use crate::url::UrlSelection;
use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct OverlayDom {
    root: web::Element,
    desktop: Vec<web::Element>,
    mobile_list: web::Element,
}

impl OverlayDom {
    fn render(&self, model: &NavOverlay) {
        for (i, el) in self.desktop.iter().enumerate() {
            _ = el
                .class_list()
                .toggle_with_force("active", model.is_highlighted(i));
        }
        if let Some(html) = self.root.dyn_ref::<web::HtmlElement>() {
            _ = html
                .style()
                .set_property("--scroll", &format!("{:.4}", model.scroll_pos()));
        }
    }

    fn render_menu(&self, model: &NavOverlay) {
        let open = if model.is_mobile_open() { "1" } else { "0" };
        _ = self.mobile_list.set_attribute("data-open", open);
    }
}

fn build_buttons(
    document: &web::Document,
    parent: &web::Element,
    model: &Rc<RefCell<NavOverlay>>,
    selection: &Rc<RefCell<UrlSelection>>,
    on_activate: Option<Rc<dyn Fn()>>,
) -> Vec<web::Element> {
    let len = model.borrow().len();
    let mut buttons = Vec::with_capacity(len);
    for i in 0..len {
        let Some(btn) = dom::append_element(document, parent, "button", "nav-button") else {
            continue;
        };
        btn.set_text_content(model.borrow().label(i));
        let model = model.clone();
        let selection = selection.clone();
        let after = on_activate.clone();
        dom::add_click_listener(&btn, move || {
            model.borrow().activate(i, &mut *selection.borrow_mut());
            if let Some(f) = &after {
                f();
            }
        });
        buttons.push(btn);
    }
    buttons
}

/// Project the navigation overlay into `root` and keep it in step with the
/// frame ticker.
///
/// The overlay reads the scroll offset from every tick rather than from the
/// page's own event flow, so the highlighted entry moves in lock-step with the
/// camera. If `root` is detached from the document the subscription ends.
pub fn mount(
    document: &web::Document,
    root: web::Element,
    model: NavOverlay,
    menu_label: &str,
    selection: Rc<RefCell<UrlSelection>>,
    ticker: &Rc<RefCell<Ticker>>,
) -> Option<()> {
    dom::clear_children(&root);
    let model = Rc::new(RefCell::new(model));

    let layer = dom::append_element(document, &root, "div", "nav-layer")?;
    let bar = dom::append_element(document, &layer, "nav", "nav-bar")?;
    let desktop = build_buttons(document, &bar, &model, &selection, None);

    let menu = dom::append_element(document, &layer, "button", "nav-menu")?;
    _ = menu.set_attribute("aria-label", menu_label);
    menu.set_text_content(Some("\u{2630}"));
    let mobile_list = dom::append_element(document, &layer, "div", "nav-mobile")?;

    let parts = Rc::new(OverlayDom {
        root: root.clone(),
        desktop,
        mobile_list: mobile_list.clone(),
    });

    let close_menu: Rc<dyn Fn()> = {
        let model = model.clone();
        let parts = parts.clone();
        Rc::new(move || {
            model.borrow_mut().close_mobile_menu();
            parts.render_menu(&model.borrow());
        })
    };
    build_buttons(document, &mobile_list, &model, &selection, Some(close_menu));

    {
        let model = model.clone();
        let parts = parts.clone();
        dom::add_click_listener(&menu, move || {
            model.borrow_mut().toggle_mobile_menu();
            parts.render_menu(&model.borrow());
        });
    }

    parts.render(&model.borrow());
    parts.render_menu(&model.borrow());

    ticker.borrow_mut().subscribe(move |tick| {
        if !parts.root.is_connected() {
            log::info!("[overlay] root detached, unsubscribing");
            return ControlFlow::Break(());
        }
        let mut m = model.borrow_mut();
        m.on_tick(tick.scroll_offset);
        parts.render(&m);
        ControlFlow::Continue(())
    });
    log::info!(
        "[overlay] mounted, {} tick subscriber(s)",
        ticker.borrow().subscriber_count()
    );
    Some(())
}

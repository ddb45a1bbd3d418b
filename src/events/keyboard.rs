use crate::ui;
use wasm_bindgen::JsCast;
use web_sys as web;

// Wire an 'H' key handler to slide the control panel in and out
pub fn wire_panel_toggle_h(document: &web::Document) {
    if let Some(window) = web::window() {
        let doc = document.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                if ev.repeat() {
                    return;
                }
                // typing into a control should not toggle the panel
                let in_control = ev.target().is_some_and(|t| {
                    t.has_type::<web::HtmlInputElement>() || t.has_type::<web::HtmlSelectElement>()
                });
                let key = ev.key();
                if !in_control && (key == "h" || key == "H") {
                    ui::toggle_panel(&doc);
                    ev.prevent_default();
                }
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

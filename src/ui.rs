use crate::constants::{PANEL_HIDDEN_TRANSFORM, PANEL_SHOWN_TRANSFORM};
use crate::core::{Status, UserParams, VizMode};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

// Element ids of the control panel
pub const START_BUTTON_ID: &str = "startAudio";
pub const MODE_SELECT_ID: &str = "visualizationType";
pub const SENSITIVITY_ID: &str = "sensitivity";
pub const ROTATION_ID: &str = "rotation";
pub const STATUS_ID: &str = "status";
pub const PANEL_ID: &str = "panel";
pub const PANEL_TOGGLE_ID: &str = "togglePanel";

/// Read both sliders; missing or bad values fall back to defaults.
pub fn read_params(document: &web::Document) -> UserParams {
    UserParams::from_raw(
        &dom::control_value(document, SENSITIVITY_ID),
        &dom::control_value(document, ROTATION_ID),
    )
}

pub fn selected_mode(document: &web::Document) -> VizMode {
    VizMode::from_select_value(&dom::control_value(document, MODE_SELECT_ID))
}

/// Write the status line and its recording indicator.
pub fn set_status(document: &web::Document, status: Status) {
    if let Some(el) = document.get_element_by_id(STATUS_ID) {
        el.set_text_content(Some(&status.text()));
        _ = el
            .class_list()
            .toggle_with_force("recording", status.recording());
        if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            _ = html.style().set_property("opacity", "0.98");
        }
    }
}

#[inline]
pub fn set_status_now(status: Status) {
    if let Some(document) = dom::window_document() {
        set_status(&document, status);
    }
}

#[inline]
pub fn panel_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(PANEL_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .and_then(|el| el.style().get_property_value("transform").ok())
        .map(|t| t == PANEL_HIDDEN_TRANSFORM)
        .unwrap_or(false)
}

/// Slide the control panel out of view or back in.
pub fn toggle_panel(document: &web::Document) {
    let hidden = panel_hidden(document);
    if let Some(el) = document
        .get_element_by_id(PANEL_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        let next = if hidden {
            PANEL_SHOWN_TRANSFORM
        } else {
            PANEL_HIDDEN_TRANSFORM
        };
        _ = el.style().set_property("transform", next);
    }
}

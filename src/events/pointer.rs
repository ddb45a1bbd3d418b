use crate::core::OrbitCamera;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Default, Clone, Copy)]
struct DragState {
    active: bool,
    last_x: f32,
    last_y: f32,
}

/// Drag on the canvas to orbit, wheel to zoom. Motion is queued on the
/// camera and eased in by its per-frame update.
pub fn wire_orbit_controls(canvas: &web::HtmlCanvasElement, camera: Rc<RefCell<OrbitCamera>>) {
    let drag = Rc::new(RefCell::new(DragState::default()));
    wire_pointerdown(canvas, drag.clone());
    wire_pointermove(canvas, drag.clone(), camera.clone());
    wire_pointerup(canvas, drag);
    wire_wheel(canvas, camera);
}

fn wire_pointerdown(canvas: &web::HtmlCanvasElement, drag: Rc<RefCell<DragState>>) {
    let target = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut d = drag.borrow_mut();
        d.active = true;
        d.last_x = ev.client_x() as f32;
        d.last_y = ev.client_y() as f32;
        _ = target.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(
    canvas: &web::HtmlCanvasElement,
    drag: Rc<RefCell<DragState>>,
    camera: Rc<RefCell<OrbitCamera>>,
) {
    let target = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut d = drag.borrow_mut();
        if !d.active {
            return;
        }
        let x = ev.client_x() as f32;
        let y = ev.client_y() as f32;
        let height = target.get_bounding_client_rect().height() as f32;
        camera.borrow_mut().drag(x - d.last_x, y - d.last_y, height);
        d.last_x = x;
        d.last_y = y;
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(canvas: &web::HtmlCanvasElement, drag: Rc<RefCell<DragState>>) {
    let target = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        drag.borrow_mut().active = false;
        _ = target.release_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    for event in ["pointerup", "pointercancel"] {
        _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(canvas: &web::HtmlCanvasElement, camera: Rc<RefCell<OrbitCamera>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        camera.borrow_mut().zoom(ev.delta_y() as f32);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

#![cfg(target_arch = "wasm32")]
use crate::audio::AudioSource;
use crate::core::{sample_channel, OrbitCamera, Scene, StartDecision, Status};
use instant::Instant;
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;
mod ui;

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

fn wire_start_button(document: &web::Document, audio_source: &Rc<RefCell<AudioSource>>) {
    let audio_source = audio_source.clone();
    dom::add_click_listener(document, ui::START_BUTTON_ID, move || {
        if audio::start(&audio_source, ui::set_status_now) == StartDecision::AlreadyRunning {
            ui::set_status_now(Status::AlreadyRunning);
        }
    });
}

fn wire_mode_select(document: &web::Document, scene: &Rc<RefCell<Scene>>) {
    let scene = scene.clone();
    let doc = document.clone();
    dom::add_change_listener(document, ui::MODE_SELECT_ID, move || {
        let mode = ui::selected_mode(&doc);
        scene.borrow_mut().set_mode(mode);
        log::info!("[scene] mode={}", mode);
        ui::set_status(&doc, Status::Mode(mode));
    });
}

fn wire_panel_toggle(document: &web::Document) {
    let doc = document.clone();
    dom::add_click_listener(document, ui::PANEL_TOGGLE_ID, move || {
        ui::toggle_panel(&doc);
    });
    events::wire_panel_toggle_h(document);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("audioviz-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let (writer, samples) = sample_channel();
    let audio_source = Rc::new(RefCell::new(AudioSource::new(writer)));

    let scene = Rc::new(RefCell::new(Scene::new(StdRng::from_entropy())));
    let initial_mode = ui::selected_mode(&document);
    scene.borrow_mut().set_mode(initial_mode);
    log::info!("[scene] mode={}", initial_mode);

    let camera = Rc::new(RefCell::new(OrbitCamera::looking_at(
        constants::CAMERA_EYE.into(),
        glam::Vec3::ZERO,
        constants::CAMERA_FOVY_DEG.to_radians(),
        constants::CAMERA_NEAR,
        constants::CAMERA_FAR,
    )));

    wire_start_button(&document, &audio_source);
    wire_mode_select(&document, &scene);
    wire_panel_toggle(&document);
    events::wire_orbit_controls(&canvas, camera.clone());

    let gpu = frame::init_gpu(&canvas).await;
    // A Start click during GPU init has already set its own status
    let ready = audio_source.borrow().ready_status();

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        document: document.clone(),
        canvas,
        scene,
        camera,
        audio: audio_source,
        samples,
        gpu,
        started: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    if let Some(status) = ready {
        ui::set_status(&document, status);
    }
    Ok(())
}

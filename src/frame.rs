use crate::audio::AudioSource;
use crate::core::{mapper, OrbitCamera, SampleReader, Scene};
use crate::render;
use crate::ui;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub audio: Rc<RefCell<AudioSource>>,
    pub samples: SampleReader,
    pub gpu: Option<render::GpuState>,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let elapsed_sec = self.started.elapsed().as_secs_f32();

        // Nothing moves until a producer is publishing frames
        if self.audio.borrow().is_active() {
            let params = ui::read_params(&self.document);
            let frame = self.samples.latest();
            mapper::update(&mut self.scene.borrow_mut(), frame, &params, elapsed_sec);
        }

        self.camera.borrow_mut().update();

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let scene = self.scene.borrow();
            let camera = self.camera.borrow();
            if let Err(e) = g.render(&scene, &camera) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
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
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

use crate::core::constants::{
    ANALYSER_FFT_SIZE, SCRIPT_PROCESSOR_BUFFER, SIMULATED_INTERVAL_MS,
};
use crate::core::signal::fill_synthetic;
use crate::core::{SampleWriter, SourceState, StartDecision, Status};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Why live capture could not be set up. Always recovered by simulating.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("no window")]
    NoWindow,
    #[error("mediaDevices unavailable: {0}")]
    NoMediaDevices(String),
    #[error("microphone request failed: {0}")]
    Denied(String),
    #[error("{0} error: {1}")]
    Graph(&'static str, String),
}

fn js_err(e: JsValue) -> String {
    format!("{:?}", e)
}

/// Live microphone graph: stream source -> analyser -> script processor ->
/// destination. The processor callback publishes each analyser snapshot.
pub struct LiveCapture {
    audio_ctx: web::AudioContext,
    _source: web::MediaStreamAudioSourceNode,
    processor: web::ScriptProcessorNode,
    _on_process: Closure<dyn FnMut(web::AudioProcessingEvent)>,
}

struct LiveGraph {
    audio_ctx: web::AudioContext,
    source: web::MediaStreamAudioSourceNode,
    analyser: web::AnalyserNode,
    processor: web::ScriptProcessorNode,
}

/// Create and resume the context. Must run inside the click handler so the
/// user activation unlocks audio playback.
fn create_context() -> Result<web::AudioContext, CaptureError> {
    let audio_ctx =
        web::AudioContext::new().map_err(|e| CaptureError::Graph("AudioContext", js_err(e)))?;
    _ = audio_ctx.resume();
    Ok(audio_ctx)
}

async fn acquire_microphone(audio_ctx: web::AudioContext) -> Result<LiveGraph, CaptureError> {
    let window = web::window().ok_or(CaptureError::NoWindow)?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|e| CaptureError::NoMediaDevices(js_err(e)))?;
    let constraints = web::MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::TRUE);
    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| CaptureError::Denied(js_err(e)))?;
    let stream: web::MediaStream = JsFuture::from(promise)
        .await
        .map_err(|e| CaptureError::Denied(js_err(e)))?
        .dyn_into()
        .map_err(|e| CaptureError::Denied(js_err(e)))?;

    let analyser = audio_ctx
        .create_analyser()
        .map_err(|e| CaptureError::Graph("AnalyserNode", js_err(e)))?;
    analyser.set_fft_size(ANALYSER_FFT_SIZE);
    let source = audio_ctx
        .create_media_stream_source(&stream)
        .map_err(|e| CaptureError::Graph("MediaStreamSource", js_err(e)))?;
    _ = source.connect_with_audio_node(&analyser);
    #[allow(deprecated)]
    let processor = audio_ctx
        .create_script_processor_with_buffer_size_and_number_of_input_channels_and_number_of_output_channels(
            SCRIPT_PROCESSOR_BUFFER,
            1,
            1,
        )
        .map_err(|e| CaptureError::Graph("ScriptProcessorNode", js_err(e)))?;
    _ = analyser.connect_with_audio_node(&processor);
    _ = processor.connect_with_audio_node(&audio_ctx.destination());
    Ok(LiveGraph {
        audio_ctx,
        source,
        analyser,
        processor,
    })
}

impl LiveCapture {
    fn attach(graph: LiveGraph, mut writer: SampleWriter) -> Self {
        let analyser = graph.analyser;
        let on_process = Closure::wrap(Box::new(move |_ev: web::AudioProcessingEvent| {
            writer.publish_with(|frame| {
                analyser.get_byte_frequency_data(&mut frame.frequency);
                analyser.get_byte_time_domain_data(&mut frame.time);
            });
        }) as Box<dyn FnMut(web::AudioProcessingEvent)>);
        #[allow(deprecated)]
        graph
            .processor
            .set_onaudioprocess(Some(on_process.as_ref().unchecked_ref()));
        Self {
            audio_ctx: graph.audio_ctx,
            _source: graph.source,
            processor: graph.processor,
            _on_process: on_process,
        }
    }
}

impl Drop for LiveCapture {
    fn drop(&mut self) {
        #[allow(deprecated)]
        self.processor.set_onaudioprocess(None);
        _ = self.audio_ctx.close();
    }
}

/// Synthetic fallback: refills the frame on a fixed browser interval.
pub struct SimulatedCapture {
    interval_id: i32,
    _tick: Closure<dyn FnMut()>,
}

impl SimulatedCapture {
    fn start(mut writer: SampleWriter) -> Result<Self, CaptureError> {
        let window = web::window().ok_or(CaptureError::NoWindow)?;
        let tick = Closure::wrap(Box::new(move || {
            let t_sec = js_sys::Date::now() / 1000.0;
            writer.publish_with(|frame| fill_synthetic(frame, t_sec));
        }) as Box<dyn FnMut()>);
        let interval_id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                tick.as_ref().unchecked_ref(),
                SIMULATED_INTERVAL_MS,
            )
            .map_err(|e| CaptureError::Graph("setInterval", js_err(e)))?;
        Ok(Self {
            interval_id,
            _tick: tick,
        })
    }
}

impl Drop for SimulatedCapture {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.interval_id);
        }
    }
}

/// Owns the producer half of the sample channel and whichever capture path
/// ended up feeding it.
pub struct AudioSource {
    state: SourceState,
    writer: Option<SampleWriter>,
    live: Option<LiveCapture>,
    simulated: Option<SimulatedCapture>,
}

impl AudioSource {
    pub fn new(writer: SampleWriter) -> Self {
        Self {
            state: SourceState::Idle,
            writer: Some(writer),
            live: None,
            simulated: None,
        }
    }

    pub fn ready_status(&self) -> Option<Status> {
        self.state.ready_status()
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }
}

/// Start capture once. Returns immediately with `AlreadyRunning` if a start
/// is in flight or finished. Otherwise the audio context is created right away
/// (this must be called from a user gesture), then the microphone is requested
/// and the settled status is reported through `on_status`.
pub fn start(source: &Rc<RefCell<AudioSource>>, on_status: impl Fn(Status) + 'static) -> StartDecision {
    let writer = {
        let mut src = source.borrow_mut();
        if src.state.begin_start() == StartDecision::AlreadyRunning {
            return StartDecision::AlreadyRunning;
        }
        match src.writer.take() {
            Some(w) => w,
            None => return StartDecision::AlreadyRunning,
        }
    };
    let audio_ctx = create_context();
    let source = source.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let acquired = match audio_ctx {
            Ok(ctx) => {
                let fallback_ctx = ctx.clone();
                acquire_microphone(ctx).await.map_err(|e| {
                    _ = fallback_ctx.close();
                    e
                })
            }
            Err(e) => Err(e),
        };
        let settled = match acquired {
            Ok(graph) => {
                log::info!("[audio] microphone active");
                let live = LiveCapture::attach(graph, writer);
                let mut src = source.borrow_mut();
                src.live = Some(live);
                src.state = SourceState::Live;
                src.state
            }
            Err(e) => {
                log::warn!("[audio] mic access failed, using simulated audio: {}", e);
                let mut src = source.borrow_mut();
                match SimulatedCapture::start(writer) {
                    Ok(sim) => {
                        src.simulated = Some(sim);
                        src.state = SourceState::Simulated;
                    }
                    Err(e) => {
                        log::error!("[audio] simulated audio failed: {}", e);
                        src.state = SourceState::Simulated;
                    }
                }
                src.state
            }
        };
        if let Some(status) = settled.settled_status() {
            on_status(status);
        }
    });
    StartDecision::Begin
}

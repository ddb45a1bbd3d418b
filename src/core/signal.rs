use super::constants::FREQ_BINS;
use triple_buffer::TripleBuffer;

/// One complete audio snapshot: frequency magnitudes and waveform bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleFrame {
    pub frequency: [u8; FREQ_BINS],
    pub time: [u8; FREQ_BINS],
}

impl Default for SampleFrame {
    fn default() -> Self {
        Self {
            frequency: [0; FREQ_BINS],
            time: [0; FREQ_BINS],
        }
    }
}

/// Fill `frame` with the synthetic fallback signal at time `t_sec`.
///
/// Smooth periodic functions of time and bin index; deterministic for a given
/// `t_sec`. Frequency bytes peak at 250, waveform bytes span 0..=255.
pub fn fill_synthetic(frame: &mut SampleFrame, t_sec: f64) {
    for i in 0..FREQ_BINS {
        let n = i as f64 / 8.0 + t_sec * 1.2;
        let f = n.sin().abs() * 200.0 + (n * 0.3).sin().abs() * 50.0;
        let w = ((i as f64 / 8.0 + t_sec * 3.0).sin() * 0.5 + 0.5) * 255.0;
        frame.frequency[i] = f as u8;
        frame.time[i] = w as u8;
    }
}

/// Producer half of the latest-snapshot channel.
///
/// Frames are assembled in a private scratch copy and handed over in a single
/// publish, so the reader never sees a half-filled frame.
pub struct SampleWriter {
    input: triple_buffer::Input<SampleFrame>,
    scratch: SampleFrame,
    published: u64,
}

/// Consumer half; always yields the newest complete frame.
pub struct SampleReader {
    output: triple_buffer::Output<SampleFrame>,
}

pub fn sample_channel() -> (SampleWriter, SampleReader) {
    let (input, output) = TripleBuffer::new(&SampleFrame::default()).split();
    (
        SampleWriter {
            input,
            scratch: SampleFrame::default(),
            published: 0,
        },
        SampleReader { output },
    )
}

impl SampleWriter {
    /// Let `fill` overwrite the scratch frame, then publish it whole.
    pub fn publish_with(&mut self, fill: impl FnOnce(&mut SampleFrame)) {
        fill(&mut self.scratch);
        self.input.write(self.scratch);
        self.published += 1;
    }

    /// Number of frames published so far.
    pub fn published(&self) -> u64 {
        self.published
    }
}

impl SampleReader {
    pub fn latest(&mut self) -> &SampleFrame {
        self.output.read()
    }
}

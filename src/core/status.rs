use super::mode::VizMode;

/// What the single status line currently reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Ready,
    Listening,
    Simulating,
    AlreadyRunning,
    Mode(VizMode),
}

impl Status {
    pub fn text(&self) -> String {
        match self {
            Status::Ready => "Ready: click Start".to_string(),
            Status::Listening => "Listening: microphone active".to_string(),
            Status::Simulating => "Microphone denied: simulating audio".to_string(),
            Status::AlreadyRunning => "Already running".to_string(),
            Status::Mode(mode) => format!("Mode: {}", mode.label()),
        }
    }

    /// Whether the status line shows the "recording" indicator.
    pub fn recording(&self) -> bool {
        matches!(
            self,
            Status::Listening | Status::Simulating | Status::AlreadyRunning
        )
    }
}

/// Lifecycle of the audio source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SourceState {
    #[default]
    Idle,
    /// Waiting on the microphone permission prompt.
    Acquiring,
    Live,
    Simulated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartDecision {
    Begin,
    AlreadyRunning,
}

impl SourceState {
    /// Frames are mapped only once a producer is publishing.
    pub fn is_active(self) -> bool {
        matches!(self, SourceState::Live | SourceState::Simulated)
    }

    /// Move to `Acquiring` if idle; any other state makes start a no-op.
    pub fn begin_start(&mut self) -> StartDecision {
        match self {
            SourceState::Idle => {
                *self = SourceState::Acquiring;
                StartDecision::Begin
            }
            _ => StartDecision::AlreadyRunning,
        }
    }

    /// Status to show once startup finishes; `None` if Start was already
    /// pressed and the source reports its own status.
    pub fn ready_status(self) -> Option<Status> {
        match self {
            SourceState::Idle => Some(Status::Ready),
            _ => None,
        }
    }

    /// Status to show after the acquisition attempt settles.
    pub fn settled_status(self) -> Option<Status> {
        match self {
            SourceState::Live => Some(Status::Listening),
            SourceState::Simulated => Some(Status::Simulating),
            _ => None,
        }
    }
}

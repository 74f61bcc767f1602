use thiserror::Error;

use crate::device::MatchPolicy;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to initialize MIDI: {0}")]
    MidiInit(#[from] midir::InitError),

    #[error("failed to read MIDI port name: {0}")]
    PortInfo(#[from] midir::PortInfoError),

    #[error("no MIDI output matching {pattern:?} ({policy})")]
    DeviceNotFound { pattern: String, policy: MatchPolicy },

    #[error("failed to open MIDI port {port:?}: {reason}")]
    Connect { port: String, reason: String },

    #[error("weather request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("no digits in weather response {0:?}")]
    NoDigits(String),
}

pub type Result<T> = std::result::Result<T, Error>;

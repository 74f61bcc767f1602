use std::fmt;
use std::str::FromStr;

use log::{error, info};
use midir::{MidiOutput, MidiOutputConnection};

use crate::error::{Error, Result};
use crate::grid::{Command, CommandSink};

const CLIENT_NAME: &str = "launchpad-thermometer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    Exact,
    Substring,
}

impl FromStr for MatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "exact" => Ok(MatchPolicy::Exact),
            "substring" => Ok(MatchPolicy::Substring),
            other => Err(format!("unknown match policy {:?}", other)),
        }
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchPolicy::Exact => write!(f, "exact"),
            MatchPolicy::Substring => write!(f, "substring"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NamePattern {
    pub pattern: String,
    pub policy: MatchPolicy,
}

impl NamePattern {
    pub fn matches(&self, name: &str) -> bool {
        match self.policy {
            MatchPolicy::Exact => name == self.pattern,
            MatchPolicy::Substring => name.contains(&self.pattern),
        }
    }
}

/// Names of every MIDI output port, in enumeration order.
pub fn output_names() -> Result<Vec<String>> {
    let output = MidiOutput::new(CLIENT_NAME)?;
    output
        .ports()
        .iter()
        .map(|port| output.port_name(port).map_err(Error::from))
        .collect()
}

/// Open MIDI connection to the Launchpad. The port closes when this is dropped.
pub struct LaunchpadOutput {
    name: String,
    connection: MidiOutputConnection,
}

impl LaunchpadOutput {
    /// Connects to the first output port whose name matches `pattern`.
    pub fn open(pattern: &NamePattern) -> Result<Self> {
        let output = MidiOutput::new(CLIENT_NAME)?;

        let mut found = None;
        for port in output.ports() {
            let name = output.port_name(&port)?;
            if pattern.matches(&name) {
                found = Some((port, name));
                break;
            }
        }

        let (port, name) = found.ok_or_else(|| Error::DeviceNotFound {
            pattern: pattern.pattern.clone(),
            policy: pattern.policy,
        })?;

        let connection = output
            .connect(&port, CLIENT_NAME)
            .map_err(|e| Error::Connect {
                port: name.clone(),
                reason: e.to_string(),
            })?;
        info!("connected to {}", name);

        Ok(Self { name, connection })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl CommandSink for LaunchpadOutput {
    fn send(&mut self, command: Command) {
        if let Err(e) = self.connection.send(&command.to_midi()) {
            error!("failed to send {:?} to {}: {}", command, self.name, e);
        }
    }
}

use std::sync::Arc;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    service_manager::DeviceAudio,
};

/// Command to show or change the global mute state
///
/// Mute state lives in the audio backend, which is rebuilt on every run, so a
/// change lasts only for the current invocation.
pub struct MuteCommand {
    audio: Arc<DeviceAudio>,
}

impl MuteCommand {
    /// Creates a new MuteCommand
    pub fn new(audio: Arc<DeviceAudio>) -> Self {
        Self { audio }
    }
}

impl Command for MuteCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let Some(state) = args.first() else {
            let state = if self.audio.is_muted() { "muted" } else { "unmuted" };
            return Ok(state.to_string());
        };

        let muted = match state.to_lowercase().as_str() {
            "true" | "on" | "1" | "yes" => true,
            "false" | "off" | "0" | "no" => false,
            _ => {
                return Err(CliError::InvalidArguments(
                    "mute state must be 'on', 'off', 'true', or 'false'".to_string(),
                ));
            }
        };

        self.audio.set_mute(muted)?;

        Ok(if muted { "Muted" } else { "Unmuted" }.to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "mute".to_string(),
            description: "Show or set the mute state (held by this process only)".to_string(),
            category: "audio".to_string(),
            args: vec![CommandArg {
                name: "state".to_string(),
                description: "on/off/true/false (omit to show the current state)".to_string(),
                required: false,
                value_type: ArgType::Boolean,
            }],
            examples: vec![
                "devaudio audio mute".to_string(),
                "devaudio audio mute on".to_string(),
                "devaudio audio mute off".to_string(),
            ],
        }
    }
}

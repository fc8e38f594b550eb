use std::sync::Arc;

use super::utils::{parse_stream, stream_arg};
use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    service_manager::DeviceAudio,
    services::audio::BROADCAST_STREAMS,
};

/// Command to set the volume of one stream, or of the media streams at once
pub struct SetCommand {
    audio: Arc<DeviceAudio>,
}

impl SetCommand {
    /// Creates a new SetCommand
    pub fn new(audio: Arc<DeviceAudio>) -> Self {
        Self { audio }
    }
}

impl Command for SetCommand {
    /// Sets a stream volume
    ///
    /// # Arguments
    ///
    /// * `args` - [level, optional: stream]
    ///
    /// # Errors
    ///
    /// Returns CliError if the level is not a number, the stream is unknown
    /// or readonly, or persisting the volume fails
    fn execute(&self, args: &[String]) -> CommandResult {
        let level = args
            .first()
            .and_then(|level| level.parse::<f64>().ok())
            .ok_or_else(|| CliError::InvalidArguments("<level> must be a number".to_string()))?;
        let stream = parse_stream(args.get(1))?;

        self.audio.set_volume(stream, level)?;

        let written = level.clamp(0.0, 100.0).floor();
        match stream {
            Some(stream) => {
                let name = self.audio.descriptor(stream)?.name;
                Ok(format!("Set {name} volume to {written}"))
            }
            None => {
                let names: Vec<&str> = BROADCAST_STREAMS.iter().map(|kind| kind.name()).collect();
                Ok(format!("Set volume to {written} for {}", names.join(", ")))
            }
        }
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "set".to_string(),
            description: "Set stream volume (0 to 100)".to_string(),
            category: "audio".to_string(),
            args: vec![
                CommandArg {
                    name: "level".to_string(),
                    description: "Volume level, clamped to 0..=100".to_string(),
                    required: true,
                    value_type: ArgType::Number,
                },
                stream_arg("Stream id or name (omit for audio, playback, tts and ring)"),
            ],
            examples: vec![
                "devaudio audio set 40".to_string(),
                "devaudio audio set 80 ring".to_string(),
            ],
        }
    }
}

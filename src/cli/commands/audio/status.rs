use std::sync::Arc;

use super::utils::{parse_stream, stream_arg};
use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    service_manager::DeviceAudio,
    services::audio::StreamKind,
};

/// Command to report whether a stream is playing
///
/// Playback is tracked by the in-process backend; nothing plays during a
/// one-shot command, so streams report idle.
pub struct StatusCommand {
    audio: Arc<DeviceAudio>,
}

impl StatusCommand {
    /// Creates a new StatusCommand
    pub fn new(audio: Arc<DeviceAudio>) -> Self {
        Self { audio }
    }
}

impl Command for StatusCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let stream = parse_stream(args.first())?;
        let name = self
            .audio
            .descriptor(stream.unwrap_or(StreamKind::Tts.id()))?
            .name;

        let status = if self.audio.get_playing_status(stream)? {
            "playing"
        } else {
            "idle"
        };

        Ok(format!("{name}: {status}"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "status".to_string(),
            description: "Show whether a stream is playing in this process".to_string(),
            category: "audio".to_string(),
            args: vec![stream_arg("Stream id or name (defaults to tts)")],
            examples: vec![
                "devaudio audio status".to_string(),
                "devaudio audio status playback".to_string(),
            ],
        }
    }
}

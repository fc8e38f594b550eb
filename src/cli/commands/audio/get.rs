use std::sync::Arc;

use super::utils::{parse_stream, stream_arg};
use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    service_manager::DeviceAudio,
    services::audio::StreamKind,
};

/// Command to show the persisted volume of a stream
pub struct GetCommand {
    audio: Arc<DeviceAudio>,
}

impl GetCommand {
    /// Creates a new GetCommand
    pub fn new(audio: Arc<DeviceAudio>) -> Self {
        Self { audio }
    }
}

impl Command for GetCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let stream = parse_stream(args.first())?;
        let name = self
            .audio
            .descriptor(stream.unwrap_or(StreamKind::Tts.id()))?
            .name;

        match self.audio.get_volume(stream)? {
            Some(volume) => Ok(format!("{name}: {volume}")),
            None => Ok(format!("{name}: unset")),
        }
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "get".to_string(),
            description: "Show the persisted volume of a stream".to_string(),
            category: "audio".to_string(),
            args: vec![stream_arg("Stream id or name (defaults to tts)")],
            examples: vec![
                "devaudio audio get".to_string(),
                "devaudio audio get ring".to_string(),
                "devaudio audio get 3".to_string(),
            ],
        }
    }
}

use std::sync::Arc;

use crate::{
    cli::{
        Command, CommandResult,
        formatting::{format_description, format_subheader},
        types::CommandMetadata,
    },
    service_manager::DeviceAudio,
};

/// Command to list the stream catalog with persisted volumes
pub struct StreamsCommand {
    audio: Arc<DeviceAudio>,
}

impl StreamsCommand {
    /// Creates a new StreamsCommand
    pub fn new(audio: Arc<DeviceAudio>) -> Self {
        Self { audio }
    }
}

impl Command for StreamsCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        let mut output = format_subheader(&format!("{:<4}{:<12}{}", "ID", "NAME", "VOLUME"));

        for descriptor in self.audio.descriptors() {
            let volume = match self.audio.get_volume(Some(descriptor.id))? {
                Some(volume) => volume.to_string(),
                None => "unset".to_string(),
            };
            let readonly = if descriptor.readonly {
                format_description(" (readonly)")
            } else {
                String::new()
            };

            output.push_str(&format!(
                "\n{:<4}{:<12}{volume}{readonly}",
                descriptor.id.to_string(),
                descriptor.name
            ));
        }

        Ok(output)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "streams".to_string(),
            description: "List streams with their persisted volumes".to_string(),
            category: "audio".to_string(),
            args: vec![],
            examples: vec!["devaudio audio streams".to_string()],
        }
    }
}

use std::sync::Arc;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    service_manager::DeviceAudio,
    services::audio::ShaperKind,
};

/// Command to apply one of the built-in volume curves
///
/// The curve is applied to the in-process backend only. `audio.shaper` in the
/// config file selects the curve applied at startup.
pub struct ShaperCommand {
    audio: Arc<DeviceAudio>,
}

impl ShaperCommand {
    /// Creates a new ShaperCommand
    pub fn new(audio: Arc<DeviceAudio>) -> Self {
        Self { audio }
    }
}

impl Command for ShaperCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let name = args.first().map(String::as_str).unwrap_or_default();
        let shaper = ShaperKind::from_name(name).ok_or_else(|| {
            CliError::InvalidArguments(format!(
                "unknown shaper '{name}', expected 'linear' or 'logarithmic'"
            ))
        })?;

        self.audio.set_volume_shaper(|max| shaper.curve(max))?;

        Ok(format!("Applied {name} volume curve for this run"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "shaper".to_string(),
            description: "Apply a volume curve for this run (set audio.shaper to keep it)".to_string(),
            category: "audio".to_string(),
            args: vec![CommandArg {
                name: "kind".to_string(),
                description: "linear or logarithmic".to_string(),
                required: true,
                value_type: ArgType::String,
            }],
            examples: vec![
                "devaudio audio shaper linear".to_string(),
                "devaudio audio shaper logarithmic".to_string(),
            ],
        }
    }
}

//! Stream volume, mute and curve commands.
mod get;
mod mute;
mod set;
mod shaper;
mod status;
mod streams;
mod utils;

pub use get::GetCommand;
pub use mute::MuteCommand;
pub use set::SetCommand;
pub use shaper::ShaperCommand;
pub use status::StatusCommand;
pub use streams::StreamsCommand;

use crate::{cli::CommandRegistry, service_manager::Services};

/// Registers all audio-related commands with the command registry
///
/// Registers commands in the "audio" category for stream volumes, mute state,
/// playback status and the volume curve.
pub fn register_commands(registry: &mut CommandRegistry, services: &Services) {
    const CATEGORY_NAME: &str = "audio";

    registry.register_command(
        CATEGORY_NAME,
        Box::new(GetCommand::new(services.audio.clone())),
    );
    registry.register_command(
        CATEGORY_NAME,
        Box::new(SetCommand::new(services.audio.clone())),
    );
    registry.register_command(
        CATEGORY_NAME,
        Box::new(MuteCommand::new(services.audio.clone())),
    );
    registry.register_command(
        CATEGORY_NAME,
        Box::new(StatusCommand::new(services.audio.clone())),
    );
    registry.register_command(
        CATEGORY_NAME,
        Box::new(StreamsCommand::new(services.audio.clone())),
    );
    registry.register_command(
        CATEGORY_NAME,
        Box::new(ShaperCommand::new(services.audio.clone())),
    );
}

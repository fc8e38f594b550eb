use crate::{
    cli::{CliError, CommandArg, types::ArgType},
    services::audio::{StreamId, StreamKind},
};

/// Parses an optional stream argument given as a native id or catalog name
///
/// Numeric ids are passed through unchecked so the registry reports unknown
/// ids itself.
pub fn parse_stream(arg: Option<&String>) -> Result<Option<StreamId>, CliError> {
    let Some(arg) = arg else {
        return Ok(None);
    };

    if let Ok(id) = arg.parse::<u32>() {
        return Ok(Some(StreamId(id)));
    }

    StreamKind::from_name(arg)
        .map(|kind| Some(kind.id()))
        .ok_or_else(|| {
            CliError::InvalidArguments(format!(
                "'{arg}' is not a stream id or name (see 'devaudio audio streams')"
            ))
        })
}

/// Optional trailing stream argument shared by several commands
pub fn stream_arg(description: &str) -> CommandArg {
    CommandArg {
        name: "stream".to_string(),
        description: description.to_string(),
        required: false,
        value_type: ArgType::Stream,
    }
}

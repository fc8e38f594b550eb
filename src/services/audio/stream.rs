use std::fmt;

/// Native stream handle understood by the audio backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StreamId(pub u32);

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<StreamKind> for StreamId {
    fn from(kind: StreamKind) -> Self {
        kind.id()
    }
}

/// Audio channel classes known to the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamKind {
    /// General media audio
    Audio,
    /// Text-to-speech prompts
    Tts,
    /// Ringtones
    Ring,
    /// Voice calls
    VoiceCall,
    /// Music and other playback
    Playback,
    /// Alarms and timers
    Alarm,
    /// System sounds, fixed volume
    System,
}

impl StreamKind {
    /// Every stream kind, in native id order
    pub const ALL: [StreamKind; 7] = [
        StreamKind::Audio,
        StreamKind::Tts,
        StreamKind::Ring,
        StreamKind::VoiceCall,
        StreamKind::Playback,
        StreamKind::Alarm,
        StreamKind::System,
    ];

    /// Native id of this stream
    pub const fn id(self) -> StreamId {
        let raw = match self {
            Self::Audio => 0,
            Self::Tts => 1,
            Self::Ring => 2,
            Self::VoiceCall => 3,
            Self::Playback => 4,
            Self::Alarm => 5,
            Self::System => 6,
        };

        StreamId(raw)
    }

    /// Catalog name, also the last segment of the property key
    pub const fn name(self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Tts => "tts",
            Self::Ring => "ring",
            Self::VoiceCall => "voiceCall",
            Self::Playback => "playback",
            Self::Alarm => "alarm",
            Self::System => "system",
        }
    }

    /// Whether the stream rejects volume changes
    pub const fn is_readonly(self) -> bool {
        matches!(self, Self::System)
    }

    /// Looks up a kind by native id
    pub fn from_id(id: StreamId) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    /// Looks up a kind by catalog name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Catalog record for one stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamDescriptor {
    /// Stream class
    pub kind: StreamKind,
    /// Native handle
    pub id: StreamId,
    /// Catalog name
    pub name: &'static str,
    /// Volume writes are refused when set
    pub readonly: bool,
}

impl StreamDescriptor {
    const fn of(kind: StreamKind) -> Self {
        Self {
            kind,
            id: kind.id(),
            name: kind.name(),
            readonly: kind.is_readonly(),
        }
    }

    /// Property store key holding the persisted volume, `audio.volume.<name>`
    pub fn property_key(&self) -> String {
        format!("{PROPERTY_PREFIX}.{}", self.name)
    }
}

pub(crate) const PROPERTY_PREFIX: &str = "audio.volume";

/// The closed stream catalog, keyed by native id
pub(crate) static CATALOG: [StreamDescriptor; 7] = [
    StreamDescriptor::of(StreamKind::Audio),
    StreamDescriptor::of(StreamKind::Tts),
    StreamDescriptor::of(StreamKind::Ring),
    StreamDescriptor::of(StreamKind::VoiceCall),
    StreamDescriptor::of(StreamKind::Playback),
    StreamDescriptor::of(StreamKind::Alarm),
    StreamDescriptor::of(StreamKind::System),
];

/// Streams written when a volume change names no stream
pub const BROADCAST_STREAMS: [StreamKind; 4] = [
    StreamKind::Audio,
    StreamKind::Playback,
    StreamKind::Tts,
    StreamKind::Ring,
];

/// Finds the catalog record for a native id
pub fn descriptor(id: StreamId) -> Option<&'static StreamDescriptor> {
    CATALOG.iter().find(|descriptor| descriptor.id == id)
}

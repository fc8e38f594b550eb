use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Built-in volume curves
///
/// Each shaper is called with the highest curve index and returns one gain
/// value (0 to 100) per index, so `max + 1` points in total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShaperKind {
    /// Gain grows in step with the volume index.
    #[default]
    Linear,

    /// Gain rises quickly at low volumes and flattens out near the top.
    Logarithmic,
}

impl ShaperKind {
    /// Produce the curve for indices `0..=max`
    pub fn curve(self, max: u32) -> Value {
        match self {
            Self::Linear => linear(max),
            Self::Logarithmic => logarithmic(max),
        }
    }

    /// Parse a shaper name as used in configuration
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "linear" => Some(Self::Linear),
            "logarithmic" | "log" => Some(Self::Logarithmic),
            _ => None,
        }
    }
}

/// Gain equal to the volume percentage
pub fn linear(max: u32) -> Value {
    let scale = f64::from(max.max(1));

    (0..=max)
        .map(|index| f64::from(index) * 100.0 / scale)
        .collect::<Vec<f64>>()
        .into()
}

/// Gain following `log10(1 + 9x)` where `x` is the volume fraction
pub fn logarithmic(max: u32) -> Value {
    let scale = f64::from(max.max(1));

    (0..=max)
        .map(|index| {
            let fraction = f64::from(index) / scale;
            ((1.0 + 9.0 * fraction).log10() * 100.0).clamp(0.0, 100.0)
        })
        .collect::<Vec<f64>>()
        .into()
}

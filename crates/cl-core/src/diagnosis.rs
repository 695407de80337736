use serde::{Deserialize, Serialize};

/// Exposure diagnosis recorded for this device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diagnosis {
    #[default]
    Unknown,
    /// A contact of this device reported symptoms.
    Potential,
    Confirmed,
}

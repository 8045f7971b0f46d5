//! Density bands used when presenting keyword results.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How heavily a keyword is used, by density percentage.
///
/// | Level | Density |
/// | --- | --- |
/// | `Low` | below 0.8 % |
/// | `Normal` | 0.8 % to below 1.8 % |
/// | `Elevated` | 1.8 % to below 2.8 % |
/// | `High` | 2.8 % to below 3.8 % |
/// | `Excessive` | 3.8 % and above |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DensityLevel {
    Low,
    Normal,
    Elevated,
    High,
    Excessive,
}

impl DensityLevel {
    /// Classify a density percentage.
    pub fn from_density(density: f64) -> Self {
        if density < 0.8 {
            DensityLevel::Low
        } else if density < 1.8 {
            DensityLevel::Normal
        } else if density < 2.8 {
            DensityLevel::Elevated
        } else if density < 3.8 {
            DensityLevel::High
        } else {
            DensityLevel::Excessive
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DensityLevel::Low => "low",
            DensityLevel::Normal => "normal",
            DensityLevel::Elevated => "elevated",
            DensityLevel::High => "high",
            DensityLevel::Excessive => "excessive",
        }
    }
}

impl fmt::Display for DensityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

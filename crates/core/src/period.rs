use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Forecast horizon.
///
/// Each period is bound to a fixed trailing lookback window (daily→7,
/// weekly→4, monthly→3). The mapping is part of the engine's compatibility
/// contract and is not configurable per call.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    /// Number of trailing sales records the forecaster averages over.
    pub fn window_size(self) -> usize {
        match self {
            Period::Daily => 7,
            Period::Weekly => 4,
            Period::Monthly => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
        }
    }
}

impl FromStr for Period {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Period::Daily),
            "weekly" => Ok(Period::Weekly),
            "monthly" => Ok(Period::Monthly),
            other => Err(EngineError::invalid_argument(format!(
                "period must be one of: daily, weekly, monthly (got {other:?})"
            ))),
        }
    }
}

impl core::fmt::Display for Period {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

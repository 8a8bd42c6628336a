//! How much validation `Game::perform` runs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Validation level for `Game::perform` and `Game::validate_with`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PerformMode {
    /// Run every check
    #[default]
    Strict,
    /// Skip checks the move generator already guarantees: source ownership and
    /// attack geometry. Destination, promotion, immobility, double-pawn,
    /// self-check and drop-mate checks still run.
    AssumesGenerated,
    /// Apply without any check. Used for hypothetical positions.
    NoCheck,
}

impl PerformMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            PerformMode::Strict => "strict",
            PerformMode::AssumesGenerated => "assumes-generated",
            PerformMode::NoCheck => "no-check",
        }
    }
}

impl fmt::Display for PerformMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown perform mode: {0:?} (expected strict, assumes-generated or no-check)")]
pub struct PerformModeParseError(pub String);

impl FromStr for PerformMode {
    type Err = PerformModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(PerformMode::Strict),
            "assumes-generated" => Ok(PerformMode::AssumesGenerated),
            "no-check" => Ok(PerformMode::NoCheck),
            _ => Err(PerformModeParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        assert_eq!(PerformMode::default(), PerformMode::Strict);
    }

    #[test]
    fn test_parse_and_display() {
        for mode in [PerformMode::Strict, PerformMode::AssumesGenerated, PerformMode::NoCheck] {
            assert_eq!(mode.to_string().parse::<PerformMode>(), Ok(mode));
        }
        assert_eq!(" Strict ".parse::<PerformMode>(), Ok(PerformMode::Strict));
        assert!("fast".parse::<PerformMode>().is_err());
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&PerformMode::AssumesGenerated).unwrap();
        assert_eq!(json, "\"assumes-generated\"");
        let mode: PerformMode = serde_json::from_str("\"no-check\"").unwrap();
        assert_eq!(mode, PerformMode::NoCheck);
    }
}

//! Snap and tick granularity policies.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Grid the value settles on after a drag or flick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapPolicy {
    /// Leave the value where it stopped
    None,
    /// Whole steps
    #[default]
    Unit,
    /// Half steps
    Half,
    /// Steps divided by the style's fraction count
    Fraction,
}

/// Graduations that trigger a light haptic while the scale moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickPolicy {
    None,
    #[default]
    Unit,
    /// Half cells when the style draws half marks, whole cells otherwise
    Half,
    Fraction,
}

impl SnapPolicy {
    pub const ALL: [SnapPolicy; 4] = [Self::None, Self::Unit, Self::Half, Self::Fraction];

    /// Next policy in declaration order, wrapping around.
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Grid spacing in value units, `None` when snapping is off.
    pub fn grid(self, step: f64, fractions: u32) -> Option<f64> {
        match self {
            SnapPolicy::None => None,
            SnapPolicy::Unit => Some(step),
            SnapPolicy::Half => Some(step / 2.0),
            SnapPolicy::Fraction => Some(step / fractions as f64),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SnapPolicy::None => "none",
            SnapPolicy::Unit => "unit",
            SnapPolicy::Half => "half",
            SnapPolicy::Fraction => "fraction",
        }
    }
}

impl TickPolicy {
    pub const ALL: [TickPolicy; 4] = [Self::None, Self::Unit, Self::Half, Self::Fraction];

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Tick spacing in offset pixels, `None` when ticking is off.
    pub fn spacing(self, cell_width: f64, fractions: u32, has_half: bool) -> Option<f64> {
        match self {
            TickPolicy::None => None,
            TickPolicy::Unit => Some(cell_width),
            TickPolicy::Half if has_half => Some(cell_width / 2.0),
            TickPolicy::Half => Some(cell_width),
            TickPolicy::Fraction => Some(cell_width / fractions as f64),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TickPolicy::None => "none",
            TickPolicy::Unit => "unit",
            TickPolicy::Half => "half",
            TickPolicy::Fraction => "fraction",
        }
    }
}

impl FromStr for SnapPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| Error::Config(format!("unknown snap policy: {s}")))
    }
}

impl FromStr for TickPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| Error::Config(format!("unknown tick policy: {s}")))
    }
}

pub mod config;
pub mod run;
pub mod simulate;

use clap::Args;
use rulerkit_core::{AppConfig, Axis, LayoutDirection, SnapPolicy, TickPolicy};

pub use simulate::SimulateArgs;

/// Flags that override the `[ruler]` and `[ui]` config sections.
#[derive(Args, Debug, Clone, Default)]
pub struct RulerArgs {
    /// Lower bound
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<f64>,
    /// Upper bound
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<f64>,
    /// Value change per cell
    #[arg(long)]
    pub step: Option<f64>,
    /// Initial value
    #[arg(long, visible_alias = "from", allow_negative_numbers = true)]
    pub value: Option<f64>,
    /// Snap policy: none, unit, half or fraction
    #[arg(long)]
    pub snap: Option<SnapPolicy>,
    /// Tick policy: none, unit, half or fraction
    #[arg(long)]
    pub tick: Option<TickPolicy>,
    /// Skin: primary, centered or blank
    #[arg(long)]
    pub skin: Option<String>,
    /// Lay the ruler out vertically
    #[arg(long)]
    pub vertical: bool,
    /// Right-to-left layout
    #[arg(long)]
    pub rtl: bool,
}

impl RulerArgs {
    pub fn apply(&self, config: &mut AppConfig) {
        let ruler = &mut config.ruler;
        if let Some(min) = self.min {
            ruler.min = Some(min);
        }
        if let Some(max) = self.max {
            ruler.max = Some(max);
        }
        if let Some(step) = self.step {
            ruler.step = step;
        }
        if let Some(value) = self.value {
            ruler.value = value;
        }
        if let Some(snap) = self.snap {
            ruler.snap = snap;
        }
        if let Some(tick) = self.tick {
            ruler.tick = tick;
        }
        if self.vertical {
            ruler.axis = Axis::Vertical;
        }
        if self.rtl {
            ruler.direction = LayoutDirection::RightToLeft;
        }
        if let Some(skin) = &self.skin {
            config.ui.skin = skin.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let mut config = AppConfig::default();
        config.ruler.min = Some(-5.0);
        let args = RulerArgs {
            max: Some(10.0),
            snap: Some(SnapPolicy::Half),
            vertical: true,
            ..RulerArgs::default()
        };
        args.apply(&mut config);

        assert_eq!(config.ruler.min, Some(-5.0));
        assert_eq!(config.ruler.max, Some(10.0));
        assert_eq!(config.ruler.snap, SnapPolicy::Half);
        assert_eq!(config.ruler.axis, Axis::Vertical);
        assert_eq!(config.ruler.direction, LayoutDirection::LeftToRight);
    }
}

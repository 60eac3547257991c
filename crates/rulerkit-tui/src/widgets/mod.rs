mod ruler;
mod skins;
mod status_bar;

pub use ruler::{inner_area, Canvas, RulerWidget};
pub use skins::{BlankSkin, CenteredSkin, Graduation, PrimarySkin, ScaleSkin, SkinKind};
pub use status_bar::StatusBarWidget;

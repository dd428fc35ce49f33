//! Bootstrap 4 default token values.

use crate::css::unit::{Length, Unit};
use crate::theme::BreakpointMap;

pub const GRID_COLUMNS: u32 = 12;
pub const ENABLE_GRID_CLASSES: bool = true;
pub const ENABLE_FLEX: bool = false;

pub const FONT_FAMILY_BASE: &str = "-apple-system, system-ui, BlinkMacSystemFont, \"Segoe UI\", Roboto, \"Helvetica Neue\", Arial, sans-serif";
pub const FONT_WEIGHT_BASE: &str = "normal";
pub const BODY_COLOR: &str = "#292b2c";
pub const BODY_BG: &str = "#fff";

fn map(entries: &[(&str, Length)]) -> BreakpointMap {
    entries
        .iter()
        .map(|(name, length)| ((*name).to_owned(), *length))
        .collect()
}

/// `$grid-breakpoints`: minimum viewport width per tier, ascending.
pub fn grid_breakpoints() -> BreakpointMap {
    map(&[
        ("xs", Length::zero()),
        ("sm", Length::px(576.0)),
        ("md", Length::px(768.0)),
        ("lg", Length::px(992.0)),
        ("xl", Length::px(1200.0)),
    ])
}

/// `$grid-gutter-widths`: 30px at every tier.
pub fn grid_gutter_widths() -> BreakpointMap {
    map(&[
        ("xs", Length::px(30.0)),
        ("sm", Length::px(30.0)),
        ("md", Length::px(30.0)),
        ("lg", Length::px(30.0)),
        ("xl", Length::px(30.0)),
    ])
}

/// `$container-max-widths`: no entry for `xs`, which stays fluid.
pub fn container_max_widths() -> BreakpointMap {
    map(&[
        ("sm", Length::px(540.0)),
        ("md", Length::px(720.0)),
        ("lg", Length::px(960.0)),
        ("xl", Length::px(1140.0)),
    ])
}

pub fn list_inline_padding() -> Length {
    Length::px(5.0)
}

pub fn font_size_base() -> Length {
    Length::rem(1.0)
}

pub fn line_height_base() -> Length {
    Length::new(1.5, Unit::None)
}

//! Grid system mixins: containers, rows, columns and column modifiers.
//!
//! Responsive generators walk a breakpoint-indexed map in insertion order and
//! emit one fragment per tier. Later (wider) tiers come later in the output so
//! they win the cascade at equal specificity.

use crate::css::builder::CssBuilder;
use crate::css::unit::{to_percent, Length};
use crate::error::Result;
use crate::mixins::breakpoints::media_breakpoint_up;
use crate::mixins::clearfix::clearfix;
use crate::theme::{BreakpointMap, Theme};

/// Emit `declarations(value)` once per entry of `values`, each wrapped in the
/// min-width query of its tier.
fn responsive(
    values: &BreakpointMap,
    breakpoints: &BreakpointMap,
    declarations: impl Fn(&Length) -> String,
) -> Result<String> {
    let mut css = CssBuilder::new();
    for (name, value) in values {
        css.fragment(&media_breakpoint_up(name, breakpoints, &declarations(value))?);
    }
    Ok(css.into())
}

fn horizontal(property: &str, value: Length) -> String {
    let mut css = CssBuilder::new();
    css.declaration(&format!("{property}-right"), value)
        .declaration(&format!("{property}-left"), value);
    css.into()
}

fn half_gutter_padding(gutter: &Length) -> String {
    horizontal("padding", gutter.half())
}

/// Centered container with half-gutter padding at every tier.
///
/// Empty when grid classes are disabled.
pub fn make_container(
    enable_flex: bool,
    enable_grid_classes: bool,
    gutter_widths: &BreakpointMap,
    breakpoints: &BreakpointMap,
) -> Result<String> {
    if !enable_grid_classes {
        return Ok(String::new());
    }
    let mut css = CssBuilder::new();
    css.declaration("margin-left", "auto")
        .declaration("margin-right", "auto");
    if !enable_flex {
        css.fragment(&clearfix());
    }
    css.fragment(&responsive(gutter_widths, breakpoints, half_gutter_padding)?);
    Ok(css.into())
}

/// Fixed container width per tier, capped at the viewport.
pub fn make_container_max_widths(
    enable_grid_classes: bool,
    max_widths: &BreakpointMap,
    breakpoints: &BreakpointMap,
) -> Result<String> {
    if !enable_grid_classes {
        return Ok(String::new());
    }
    responsive(max_widths, breakpoints, |width| {
        let mut css = CssBuilder::new();
        css.declaration("width", width)
            .declaration("max-width", "100%");
        css.into()
    })
}

/// Half-gutter horizontal padding per tier.
pub fn make_gutters(gutter_widths: &BreakpointMap, breakpoints: &BreakpointMap) -> Result<String> {
    responsive(gutter_widths, breakpoints, half_gutter_padding)
}

/// Row wrapper: flex wrapping or a clearfix, then negative half-gutter
/// margins per tier to cancel the columns' padding.
///
/// Each tier's margins sit inside that tier's min-width query, like the
/// column padding they cancel.
pub fn make_row(
    enable_flex: bool,
    enable_grid_classes: bool,
    gutter_widths: &BreakpointMap,
    breakpoints: &BreakpointMap,
) -> Result<String> {
    if !enable_grid_classes {
        return Ok(String::new());
    }
    let mut css = CssBuilder::new();
    if enable_flex {
        css.declaration("display", "flex")
            .declaration("flex-wrap", "wrap");
    } else {
        css.fragment(&clearfix());
    }
    css.fragment(&responsive(gutter_widths, breakpoints, |gutter| {
        horizontal("margin", gutter.half().negate())
    })?);
    Ok(css.into())
}

/// Shared column setup emitted before any sizing.
pub fn make_col_ready(
    enable_flex: bool,
    gutter_widths: &BreakpointMap,
    breakpoints: &BreakpointMap,
) -> Result<String> {
    let mut css = CssBuilder::new();
    css.declaration("position", "relative")
        .declaration("min-height", "1px")
        .comment("Prevent collapsing");
    if enable_flex {
        // flex-basis set by make_col overrides this on wider tiers.
        css.declaration("width", "100%");
    }
    css.fragment(&responsive(gutter_widths, breakpoints, half_gutter_padding)?);
    Ok(css.into())
}

/// Size a column to `span / total_columns` of its row.
pub fn make_col(enable_flex: bool, span: i32, total_columns: u32) -> Result<String> {
    let width = to_percent(span, total_columns)?;
    let mut css = CssBuilder::new();
    if enable_flex {
        css.declaration("flex", format!("0 0 {width}"))
            .declaration("max-width", width);
    } else {
        css.declaration("float", "left").declaration("width", width);
    }
    Ok(css.into())
}

pub fn make_col_offset(span: i32, total_columns: u32) -> Result<String> {
    let mut css = CssBuilder::new();
    css.declaration("margin-left", to_percent(span, total_columns)?);
    Ok(css.into())
}

fn shift(property: &str, span: i32, total_columns: u32) -> Result<String> {
    let mut css = CssBuilder::new();
    if span > 0 {
        css.declaration(property, to_percent(span, total_columns)?);
    } else {
        css.declaration(property, "auto");
    }
    Ok(css.into())
}

/// Move a column right by `span` columns; `auto` for a non-positive span.
pub fn make_col_push(span: i32, total_columns: u32) -> Result<String> {
    shift("left", span, total_columns)
}

/// Move a column left by `span` columns; `auto` for a non-positive span.
pub fn make_col_pull(span: i32, total_columns: u32) -> Result<String> {
    shift("right", span, total_columns)
}

/// The kinds of column modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierKind {
    Push,
    Pull,
    Offset,
}

impl ModifierKind {
    /// Parse `"push"`, `"pull"` or `"offset"`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "push" => Some(ModifierKind::Push),
            "pull" => Some(ModifierKind::Pull),
            "offset" => Some(ModifierKind::Offset),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ModifierKind::Push => "push",
            ModifierKind::Pull => "pull",
            ModifierKind::Offset => "offset",
        }
    }

    /// Pair this kind with its span and column count.
    pub fn with(self, span: i32, columns: u32) -> ColModifier {
        match self {
            ModifierKind::Push => ColModifier::Push { span, columns },
            ModifierKind::Pull => ColModifier::Pull { span, columns },
            ModifierKind::Offset => ColModifier::Offset { span, columns },
        }
    }
}

/// A column modifier together with its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColModifier {
    Push { span: i32, columns: u32 },
    Pull { span: i32, columns: u32 },
    Offset { span: i32, columns: u32 },
}

pub fn make_col_modifier(modifier: ColModifier) -> Result<String> {
    match modifier {
        ColModifier::Push { span, columns } => make_col_push(span, columns),
        ColModifier::Pull { span, columns } => make_col_pull(span, columns),
        ColModifier::Offset { span, columns } => make_col_offset(span, columns),
    }
}

/// Dispatch on a modifier name. Unrecognized names produce an empty fragment.
pub fn make_col_modifier_named(name: &str, span: i32, columns: u32) -> Result<String> {
    match ModifierKind::from_name(name) {
        Some(kind) => make_col_modifier(kind.with(span, columns)),
        None => {
            tracing::debug!(modifier = name, "ignoring unknown column modifier");
            Ok(String::new())
        }
    }
}

/// Grid mixins bound to a theme's tokens.
#[derive(Debug, Clone, Copy)]
pub struct GridMixins<'a> {
    theme: &'a Theme,
}

impl Theme {
    /// Grid generators with this theme's tokens as arguments.
    pub fn grid(&self) -> GridMixins<'_> {
        GridMixins { theme: self }
    }
}

impl GridMixins<'_> {
    pub fn container(&self) -> Result<String> {
        let t = self.theme;
        make_container(
            t.enable_flex,
            t.enable_grid_classes,
            &t.grid_gutter_widths,
            &t.grid_breakpoints,
        )
    }

    pub fn container_max_widths(&self) -> Result<String> {
        let t = self.theme;
        make_container_max_widths(
            t.enable_grid_classes,
            &t.container_max_widths,
            &t.grid_breakpoints,
        )
    }

    pub fn gutters(&self) -> Result<String> {
        make_gutters(&self.theme.grid_gutter_widths, &self.theme.grid_breakpoints)
    }

    pub fn row(&self) -> Result<String> {
        let t = self.theme;
        make_row(
            t.enable_flex,
            t.enable_grid_classes,
            &t.grid_gutter_widths,
            &t.grid_breakpoints,
        )
    }

    pub fn col_ready(&self) -> Result<String> {
        let t = self.theme;
        make_col_ready(t.enable_flex, &t.grid_gutter_widths, &t.grid_breakpoints)
    }

    pub fn col(&self, span: i32) -> Result<String> {
        make_col(self.theme.enable_flex, span, self.theme.grid_columns)
    }

    pub fn col_offset(&self, span: i32) -> Result<String> {
        make_col_offset(span, self.theme.grid_columns)
    }

    pub fn col_push(&self, span: i32) -> Result<String> {
        make_col_push(span, self.theme.grid_columns)
    }

    pub fn col_pull(&self, span: i32) -> Result<String> {
        make_col_pull(span, self.theme.grid_columns)
    }

    pub fn col_modifier(&self, kind: ModifierKind, span: i32) -> Result<String> {
        make_col_modifier(kind.with(span, self.theme.grid_columns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StyleError;
    use crate::theme::defaults;
    use pretty_assertions::assert_eq;

    fn map(entries: &[(&str, &str)]) -> BreakpointMap {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_owned(), Length::parse(v).unwrap()))
            .collect()
    }

    fn breakpoints() -> BreakpointMap {
        defaults::grid_breakpoints()
    }

    fn gutters() -> BreakpointMap {
        map(&[("xs", "20px"), ("md", "30px")])
    }

    // ── make_container ───────────────────────────────────────────────

    #[test]
    fn test_container_disabled_is_empty() {
        for flex in [false, true] {
            assert_eq!(make_container(flex, false, &gutters(), &breakpoints()).unwrap(), "");
        }
        // Disabled output ignores even an inconsistent breakpoint map.
        assert_eq!(
            make_container(false, false, &map(&[("zz", "1px")]), &BreakpointMap::new()).unwrap(),
            ""
        );
    }

    #[test]
    fn test_container_float() {
        let css = make_container(false, true, &gutters(), &breakpoints()).unwrap();
        assert_eq!(
            css,
            "margin-left: auto;\n\
             margin-right: auto;\n\
             &::after {\n  display: block;\n  clear: both;\n  content: \"\";\n}\n\
             padding-right: 10px;\n\
             padding-left: 10px;\n\
             @media (min-width: 768px) {\n\
             padding-right: 15px;\n\
             padding-left: 15px;\n\
             }\n"
        );
    }

    #[test]
    fn test_container_flex_skips_clearfix() {
        let css = make_container(true, true, &gutters(), &breakpoints()).unwrap();
        assert!(css.starts_with("margin-left: auto;\nmargin-right: auto;\n"));
        assert!(!css.contains("&::after"));
    }

    #[test]
    fn test_container_unknown_tier() {
        let err = make_container(false, true, &map(&[("xxl", "30px")]), &breakpoints()).unwrap_err();
        assert!(matches!(err, StyleError::MissingBreakpoint(name) if name == "xxl"));
    }

    // ── make_container_max_widths ────────────────────────────────────

    #[test]
    fn test_container_max_widths() {
        let css = make_container_max_widths(true, &defaults::container_max_widths(), &breakpoints())
            .unwrap();
        insta::assert_snapshot!(css, @r"
        @media (min-width: 576px) {
        width: 540px;
        max-width: 100%;
        }
        @media (min-width: 768px) {
        width: 720px;
        max-width: 100%;
        }
        @media (min-width: 992px) {
        width: 960px;
        max-width: 100%;
        }
        @media (min-width: 1200px) {
        width: 1140px;
        max-width: 100%;
        }
        ");
    }

    #[test]
    fn test_container_max_widths_disabled() {
        let css =
            make_container_max_widths(false, &defaults::container_max_widths(), &breakpoints())
                .unwrap();
        assert_eq!(css, "");
    }

    // ── make_gutters ─────────────────────────────────────────────────

    #[test]
    fn test_gutters_zero_is_emitted() {
        let css = make_gutters(&map(&[("xs", "0"), ("sm", "0px")]), &breakpoints()).unwrap();
        assert_eq!(
            css,
            "padding-right: 0;\npadding-left: 0;\n\
             @media (min-width: 576px) {\npadding-right: 0px;\npadding-left: 0px;\n}\n"
        );
    }

    #[test]
    fn test_gutters_empty_map() {
        assert_eq!(make_gutters(&BreakpointMap::new(), &breakpoints()).unwrap(), "");
    }

    #[test]
    fn test_gutters_follow_map_order() {
        let css = make_gutters(&defaults::grid_gutter_widths(), &breakpoints()).unwrap();
        let positions: Vec<usize> = ["576px", "768px", "992px", "1200px"]
            .iter()
            .map(|w| css.find(w).unwrap())
            .collect();
        assert!(positions.windows(2).all(|p| p[0] < p[1]));
        assert!(css.starts_with("padding-right: 15px;"));
    }

    // ── make_row ─────────────────────────────────────────────────────

    #[test]
    fn test_row_flex() {
        let css = make_row(true, true, &gutters(), &breakpoints()).unwrap();
        assert_eq!(
            css,
            "display: flex;\n\
             flex-wrap: wrap;\n\
             margin-right: -10px;\n\
             margin-left: -10px;\n\
             @media (min-width: 768px) {\n\
             margin-right: -15px;\n\
             margin-left: -15px;\n\
             }\n"
        );
    }

    #[test]
    fn test_row_float_uses_clearfix() {
        let css = make_row(false, true, &gutters(), &breakpoints()).unwrap();
        assert!(css.starts_with("&::after {\n"));
        assert!(css.contains("margin-left: -10px;"));
    }

    #[test]
    fn test_row_disabled() {
        assert_eq!(make_row(true, false, &gutters(), &breakpoints()).unwrap(), "");
    }

    // ── make_col_ready ───────────────────────────────────────────────

    #[test]
    fn test_col_ready_flex() {
        let css = make_col_ready(true, &map(&[("xs", "30px")]), &breakpoints()).unwrap();
        assert_eq!(
            css,
            "position: relative;\n\
             min-height: 1px;\n\
             /* Prevent collapsing */\n\
             width: 100%;\n\
             padding-right: 15px;\n\
             padding-left: 15px;\n"
        );
    }

    #[test]
    fn test_col_ready_float_has_no_width() {
        let css = make_col_ready(false, &gutters(), &breakpoints()).unwrap();
        assert!(!css.contains("width: 100%"));
        assert!(css.contains("@media (min-width: 768px)"));
    }

    // ── make_col and modifiers ───────────────────────────────────────

    #[test]
    fn test_col_flex() {
        let css = make_col(true, 6, 12).unwrap();
        assert!(css.contains("flex: 0 0 50%;"));
        assert!(css.contains("max-width: 50%;"));
    }

    #[test]
    fn test_col_float() {
        assert_eq!(make_col(false, 4, 12).unwrap(), "float: left;\nwidth: 33.33333333333333%;\n");
    }

    #[test]
    fn test_col_zero_columns() {
        assert!(matches!(
            make_col(true, 1, 0),
            Err(StyleError::DivisionByZero { span: 1 })
        ));
    }

    #[test]
    fn test_col_offset() {
        assert_eq!(make_col_offset(3, 12).unwrap(), "margin-left: 25%;\n");
        assert_eq!(make_col_offset(0, 12).unwrap(), "margin-left: 0%;\n");
    }

    #[test]
    fn test_col_push_pull() {
        assert_eq!(make_col_push(0, 12).unwrap(), "left: auto;\n");
        assert_eq!(make_col_push(-2, 12).unwrap(), "left: auto;\n");
        assert_eq!(make_col_push(3, 12).unwrap(), "left: 25%;\n");
        assert_eq!(make_col_pull(0, 12).unwrap(), "right: auto;\n");
        assert_eq!(make_col_pull(6, 12).unwrap(), "right: 50%;\n");
    }

    #[test]
    fn test_push_auto_does_not_divide() {
        assert_eq!(make_col_push(0, 0).unwrap(), "left: auto;\n");
        assert!(make_col_push(1, 0).is_err());
    }

    #[test]
    fn test_col_modifier_dispatch() {
        assert_eq!(
            make_col_modifier(ColModifier::Push { span: 2, columns: 8 }).unwrap(),
            "left: 25%;\n"
        );
        assert_eq!(
            make_col_modifier(ColModifier::Pull { span: 0, columns: 8 }).unwrap(),
            "right: auto;\n"
        );
        assert_eq!(
            make_col_modifier(ColModifier::Offset { span: 4, columns: 8 }).unwrap(),
            "margin-left: 50%;\n"
        );
    }

    #[test]
    fn test_modifier_kind_names() {
        for kind in [ModifierKind::Push, ModifierKind::Pull, ModifierKind::Offset] {
            assert_eq!(ModifierKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(ModifierKind::from_name("PUSH"), None);
    }

    #[test]
    fn test_col_modifier_named_unknown_is_empty() {
        assert_eq!(make_col_modifier_named("stretch", 3, 12).unwrap(), "");
        assert_eq!(make_col_modifier_named("offset", 3, 12).unwrap(), "margin-left: 25%;\n");
    }

    // ── GridMixins ───────────────────────────────────────────────────

    #[test]
    fn test_theme_grid_uses_tokens() {
        let theme = Theme {
            grid_columns: 24,
            enable_flex: true,
            ..Theme::default()
        };
        let grid = theme.grid();
        assert_eq!(grid.col(6).unwrap(), "flex: 0 0 25%;\nmax-width: 25%;\n");
        assert_eq!(grid.col_push(12).unwrap(), "left: 50%;\n");
        assert_eq!(grid.col_pull(0).unwrap(), "right: auto;\n");
        assert_eq!(grid.col_offset(3).unwrap(), "margin-left: 12.5%;\n");
        assert_eq!(grid.col_modifier(ModifierKind::Offset, 6).unwrap(), "margin-left: 25%;\n");
        assert!(grid.row().unwrap().starts_with("display: flex;"));
    }

    #[test]
    fn test_theme_grid_matches_free_functions() {
        let theme = Theme::default();
        let grid = theme.grid();
        assert_eq!(
            grid.container().unwrap(),
            make_container(false, true, &theme.grid_gutter_widths, &theme.grid_breakpoints).unwrap()
        );
        assert_eq!(
            grid.gutters().unwrap(),
            make_gutters(&theme.grid_gutter_widths, &theme.grid_breakpoints).unwrap()
        );
        assert_eq!(
            grid.col_ready().unwrap(),
            make_col_ready(false, &theme.grid_gutter_widths, &theme.grid_breakpoints).unwrap()
        );
        assert_eq!(
            grid.container_max_widths().unwrap(),
            make_container_max_widths(true, &theme.container_max_widths, &theme.grid_breakpoints)
                .unwrap()
        );
    }
}

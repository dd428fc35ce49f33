//! Theme tokens: the typed replacement for Bootstrap's `$variable` map.
//!
//! A [`Theme`] carries every token the mixins read. [`Theme::default`] holds
//! Bootstrap's values; [`Theme::from_json`] overlays any subset of them from a
//! dollar-keyed JSON object; [`Theme::token`] looks a token up by name.

pub mod defaults;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::css::unit::Length;
use crate::error::Result;

/// Breakpoint-indexed lengths. Iteration follows insertion order, which must
/// be ascending by viewport width.
pub type BreakpointMap = IndexMap<String, Length>;

/// Complete set of theme tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    #[serde(rename = "$grid-columns")]
    pub grid_columns: u32,
    #[serde(rename = "$grid-breakpoints")]
    pub grid_breakpoints: BreakpointMap,
    #[serde(rename = "$grid-gutter-widths")]
    pub grid_gutter_widths: BreakpointMap,
    #[serde(rename = "$container-max-widths")]
    pub container_max_widths: BreakpointMap,
    #[serde(rename = "$enable-grid-classes")]
    pub enable_grid_classes: bool,
    #[serde(rename = "$enable-flex")]
    pub enable_flex: bool,
    #[serde(rename = "$list-inline-padding")]
    pub list_inline_padding: Length,
    #[serde(rename = "$font-family-base")]
    pub font_family_base: String,
    #[serde(rename = "$font-size-base")]
    pub font_size_base: Length,
    #[serde(rename = "$font-weight-base")]
    pub font_weight_base: String,
    #[serde(rename = "$line-height-base")]
    pub line_height_base: Length,
    #[serde(rename = "$body-color")]
    pub body_color: String,
    #[serde(rename = "$body-bg")]
    pub body_bg: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            grid_columns: defaults::GRID_COLUMNS,
            grid_breakpoints: defaults::grid_breakpoints(),
            grid_gutter_widths: defaults::grid_gutter_widths(),
            container_max_widths: defaults::container_max_widths(),
            enable_grid_classes: defaults::ENABLE_GRID_CLASSES,
            enable_flex: defaults::ENABLE_FLEX,
            list_inline_padding: defaults::list_inline_padding(),
            font_family_base: defaults::FONT_FAMILY_BASE.to_owned(),
            font_size_base: defaults::font_size_base(),
            font_weight_base: defaults::FONT_WEIGHT_BASE.to_owned(),
            line_height_base: defaults::line_height_base(),
            body_color: defaults::BODY_COLOR.to_owned(),
            body_bg: defaults::BODY_BG.to_owned(),
        }
    }
}

/// A single token value borrowed from a [`Theme`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenValue<'a> {
    Length(&'a Length),
    Map(&'a BreakpointMap),
    Integer(u32),
    Flag(bool),
    Text(&'a str),
}

impl Theme {
    /// Build a theme from a JSON object of dollar-prefixed tokens.
    ///
    /// Tokens missing from the object keep their defaults. A map token given
    /// in the object replaces the default map entirely.
    pub fn from_json(json: &str) -> Result<Self> {
        let theme: Theme = serde_json::from_str(json)?;
        tracing::debug!(
            columns = theme.grid_columns,
            breakpoints = theme.grid_breakpoints.len(),
            "loaded theme overrides"
        );
        Ok(theme)
    }

    /// Look a token up by its `$name`.
    pub fn token(&self, name: &str) -> Option<TokenValue<'_>> {
        let value = match name {
            "$grid-columns" => TokenValue::Integer(self.grid_columns),
            "$grid-breakpoints" => TokenValue::Map(&self.grid_breakpoints),
            "$grid-gutter-widths" => TokenValue::Map(&self.grid_gutter_widths),
            "$container-max-widths" => TokenValue::Map(&self.container_max_widths),
            "$enable-grid-classes" => TokenValue::Flag(self.enable_grid_classes),
            "$enable-flex" => TokenValue::Flag(self.enable_flex),
            "$list-inline-padding" => TokenValue::Length(&self.list_inline_padding),
            "$font-family-base" => TokenValue::Text(&self.font_family_base),
            "$font-size-base" => TokenValue::Length(&self.font_size_base),
            "$font-weight-base" => TokenValue::Text(&self.font_weight_base),
            "$line-height-base" => TokenValue::Length(&self.line_height_base),
            "$body-color" => TokenValue::Text(&self.body_color),
            "$body-bg" => TokenValue::Text(&self.body_bg),
            _ => {
                tracing::trace!(token = name, "unknown theme token");
                return None;
            }
        };
        Some(value)
    }
}

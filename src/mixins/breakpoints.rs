//! Breakpoint lookup and responsive media-query wrappers.
//!
//! Breakpoint maps are ordered ascending by width, e.g.
//! `xs: 0, sm: 576px, md: 768px, lg: 992px, xl: 1200px`.

use crate::css::builder::CssBuilder;
use crate::css::unit::Length;
use crate::error::{Result, StyleError};
use crate::theme::BreakpointMap;

/// Amount subtracted from the next tier's minimum to get a tier's maximum.
/// Stays below one device pixel at common zoom levels.
const MAX_WIDTH_PRECISION: f64 = 0.02;

/// Minimum width of `name`, or `None` for a zero-width (base) tier.
pub fn breakpoint_min(name: &str, breakpoints: &BreakpointMap) -> Result<Option<Length>> {
    let min = breakpoints
        .get(name)
        .ok_or_else(|| StyleError::MissingBreakpoint(name.to_owned()))?;
    Ok((!min.is_zero()).then_some(*min))
}

/// Name of the tier following `name`, or `None` for the last tier.
pub fn breakpoint_next<'a>(name: &str, breakpoints: &'a BreakpointMap) -> Result<Option<&'a str>> {
    let index = breakpoints
        .get_index_of(name)
        .ok_or_else(|| StyleError::MissingBreakpoint(name.to_owned()))?;
    Ok(breakpoints.get_index(index + 1).map(|(next, _)| next.as_str()))
}

/// Maximum width of `name`: the next tier's minimum less 0.02 of its unit.
///
/// `None` for the largest tier, which has no upper bound.
pub fn breakpoint_max(name: &str, breakpoints: &BreakpointMap) -> Result<Option<Length>> {
    let Some(next) = breakpoint_next(name, breakpoints)? else {
        return Ok(None);
    };
    let next_min = breakpoints[next];
    Ok(Some(Length::new(next_min.value - MAX_WIDTH_PRECISION, next_min.unit)))
}

/// Apply `body` from the `name` tier upward.
///
/// The base tier (zero minimum) needs no query, so `body` comes back as is.
pub fn media_breakpoint_up(name: &str, breakpoints: &BreakpointMap, body: &str) -> Result<String> {
    match breakpoint_min(name, breakpoints)? {
        None => Ok(body.to_owned()),
        Some(min) => {
            let mut css = CssBuilder::new();
            css.verbatim_block(&format!("@media (min-width: {min})"), body);
            Ok(css.into())
        }
    }
}

/// Apply `body` from the `name` tier downward.
///
/// The largest tier has no maximum, so `body` comes back as is.
pub fn media_breakpoint_down(name: &str, breakpoints: &BreakpointMap, body: &str) -> Result<String> {
    match breakpoint_max(name, breakpoints)? {
        None => Ok(body.to_owned()),
        Some(max) => {
            let mut css = CssBuilder::new();
            css.verbatim_block(&format!("@media (max-width: {max})"), body);
            Ok(css.into())
        }
    }
}

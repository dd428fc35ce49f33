//! CSS lengths: Length, Unit, and the rm_unit / detect_unit / to_percent helpers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::css::tokenizer::{tokenize, LengthToken};
use crate::error::{Result, StyleError};

/// A CSS length unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// CSS pixels.
    Px,
    /// Multiple of the root element's font size.
    Rem,
    /// Multiple of the element's own font size.
    Em,
    /// Percentage of the containing block.
    Percent,
    /// Percentage of the viewport width.
    Vw,
    /// Percentage of the viewport height.
    Vh,
    /// Typographic points.
    Pt,
    /// Unitless value such as `0` or a bare line-height.
    None,
}

impl Unit {
    /// The unit suffix as written in CSS (`""` for unitless values).
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Rem => "rem",
            Unit::Em => "em",
            Unit::Percent => "%",
            Unit::Vw => "vw",
            Unit::Vh => "vh",
            Unit::Pt => "pt",
            Unit::None => "",
        }
    }

    fn from_token(token: LengthToken) -> Option<Self> {
        match token {
            LengthToken::Px => Some(Unit::Px),
            LengthToken::Rem => Some(Unit::Rem),
            LengthToken::Em => Some(Unit::Em),
            LengthToken::Percent => Some(Unit::Percent),
            LengthToken::Vw => Some(Unit::Vw),
            LengthToken::Vh => Some(Unit::Vh),
            LengthToken::Pt => Some(Unit::Pt),
            LengthToken::Number => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A CSS length: a magnitude paired with a unit, e.g. `30px`, `50%`, `0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLength", into = "String")]
pub struct Length {
    /// Numeric magnitude, always finite.
    pub value: f64,
    /// Unit suffix; [`Unit::None`] for bare numbers.
    pub unit: Unit,
}

impl Length {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn px(value: f64) -> Self {
        Self::new(value, Unit::Px)
    }

    pub fn rem(value: f64) -> Self {
        Self::new(value, Unit::Rem)
    }

    pub fn percent(value: f64) -> Self {
        Self::new(value, Unit::Percent)
    }

    /// Unitless zero.
    pub fn zero() -> Self {
        Self::new(0.0, Unit::None)
    }

    /// Parse a length such as `"576px"`, `"1.5rem"` or `"0"`.
    ///
    /// Surrounding whitespace is ignored. Anything other than one finite number
    /// and an optional known unit fails with [`StyleError::MalformedLength`].
    pub fn parse(input: &str) -> Result<Self> {
        let malformed = || StyleError::MalformedLength(input.to_owned());
        let tokens = tokenize(input.trim()).ok_or_else(malformed)?;

        let (value, unit) = match tokens.as_slice() {
            [(LengthToken::Number, number)] => (number, Unit::None),
            [(LengthToken::Number, number), (unit, _)] => {
                (number, Unit::from_token(*unit).ok_or_else(malformed)?)
            }
            _ => return Err(malformed()),
        };

        let value = value.parse::<f64>().map_err(|_| malformed())?;
        // Literals past f64::MAX parse as infinity.
        if !value.is_finite() {
            return Err(malformed());
        }
        Ok(Self { value, unit })
    }

    /// Returns `true` for a zero magnitude in any unit.
    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }

    /// Half of this length, keeping the unit (used for half-gutters).
    pub fn half(&self) -> Self {
        Self::new(self.value / 2.0, self.unit)
    }

    pub fn negate(&self) -> Self {
        Self::new(-self.value, self.unit)
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for Length {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self> {
        Length::parse(s)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_number(self.value), self.unit)
    }
}

impl From<Length> for String {
    fn from(length: Length) -> Self {
        length.to_string()
    }
}

/// Lengths arrive from theme files either as CSS text or as a bare number.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLength {
    Text(String),
    Number(f64),
}

impl TryFrom<RawLength> for Length {
    type Error = StyleError;

    fn try_from(raw: RawLength) -> Result<Self> {
        match raw {
            RawLength::Text(text) => Length::parse(&text),
            RawLength::Number(value) if value.is_finite() => Ok(Length::new(value, Unit::None)),
            RawLength::Number(value) => Err(StyleError::MalformedLength(value.to_string())),
        }
    }
}

/// Format a magnitude with the shortest round-trip representation.
///
/// `15.0` prints as `15`, `1/12 * 100` as `8.333333333333332`, and negative
/// zero collapses to `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}

/// Strip the unit from a length and return its magnitude.
pub fn rm_unit(length: &str) -> Result<f64> {
    Length::parse(length).map(|l| l.value)
}

/// Return the unit of a length (`Unit::None` for values like `"0"`).
pub fn detect_unit(length: &str) -> Result<Unit> {
    Length::parse(length).map(|l| l.unit)
}

/// `span / total_columns` as a CSS percentage.
pub fn to_percent(span: i32, total_columns: u32) -> Result<Length> {
    if total_columns == 0 {
        return Err(StyleError::DivisionByZero { span });
    }
    let ratio = f64::from(span) / f64::from(total_columns);
    Ok(Length::percent(ratio * 100.0))
}

//! # bootstrap-mixins
//!
//! Bootstrap-flavored CSS mixins that turn theme tokens into CSS text.
//!
//! Every generator is a pure function: it takes the tokens it needs and
//! returns a `String`. Nothing is cached and nothing is injected anywhere;
//! the caller decides where the CSS goes.
//!
//! ## Core Systems
//!
//! - **[`css`]** — Length tokenizer, [`Length`]/[`Unit`], unit helpers, CSS text builder
//! - **[`theme`]** — [`Theme`] tokens with Bootstrap defaults and JSON overrides
//! - **[`mixins`]** — Breakpoint queries, clearfix, grid system, lists
//! - **[`utilities`]** — Reboot global styles
//!
//! ## Example
//!
//! ```
//! use bootstrap_mixins::Theme;
//!
//! let theme = Theme::default();
//! let col = theme.grid().col(6).unwrap();
//! assert_eq!(col, "float: left;\nwidth: 50%;\n");
//! ```

pub mod error;

pub mod css;
pub mod theme;

pub mod mixins;
pub mod utilities;

pub use css::{Length, Unit};
pub use error::{Result, StyleError};
pub use theme::{BreakpointMap, Theme, TokenValue};

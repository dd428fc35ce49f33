//! CSS primitives: length tokenizer, lengths and units, text builder.

pub mod builder;
pub mod tokenizer;
pub mod unit;

pub use builder::CssBuilder;
pub use unit::{detect_unit, format_number, rm_unit, to_percent, Length, Unit};

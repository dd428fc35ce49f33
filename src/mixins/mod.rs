//! Mixins: breakpoint queries, clearfix, grid system and lists.

pub mod breakpoints;
pub mod clearfix;
pub mod grid;
pub mod lists;

pub use breakpoints::{media_breakpoint_down, media_breakpoint_up};
pub use clearfix::clearfix;
pub use grid::{
    make_col, make_col_modifier, make_col_modifier_named, make_col_offset, make_col_pull,
    make_col_push, make_col_ready, make_container, make_container_max_widths, make_gutters,
    make_row, ColModifier, GridMixins, ModifierKind,
};
pub use lists::{list_inline, list_inline_item, list_unstyled};

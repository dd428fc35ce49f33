//! List mixins.

use crate::css::builder::CssBuilder;
use crate::css::unit::Length;

/// Keep list items block level but drop the browser's padding and bullets.
pub fn list_unstyled() -> String {
    let mut css = CssBuilder::new();
    css.declaration("padding-left", 0)
        .declaration("list-style", "none");
    css.into()
}

/// Container of an inline list; identical to [`list_unstyled`].
pub fn list_inline() -> String {
    list_unstyled()
}

/// Inline list item separated from its successor by `padding`.
pub fn list_inline_item(padding: &Length) -> String {
    let mut css = CssBuilder::new();
    css.declaration("display", "inline-block")
        .rule("&:not(:last-child)", |b| {
            b.declaration("margin-right", padding);
        });
    css.into()
}

//! Clearfix for float-based containers and rows.

use crate::css::builder::CssBuilder;

/// `&::after` rule that clears floated children.
pub fn clearfix() -> String {
    let mut css = CssBuilder::new();
    css.rule("&::after", |b| {
        b.declaration("display", "block")
            .declaration("clear", "both")
            .declaration("content", "\"\"");
    });
    css.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clearfix() {
        assert_eq!(
            clearfix(),
            "&::after {\n  display: block;\n  clear: both;\n  content: \"\";\n}\n"
        );
    }
}

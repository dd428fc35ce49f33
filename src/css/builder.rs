//! CSS text accumulator used by every mixin.
//!
//! The builder only emits text. Nested rules are indented two spaces per
//! level; fragments produced elsewhere are re-indented to the current level,
//! except through [`CssBuilder::verbatim_block`], which never touches the body.

use std::fmt::Display;

/// Appendable CSS fragment.
#[derive(Debug, Default, Clone)]
pub struct CssBuilder {
    out: String,
    depth: usize,
}

impl CssBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Append `property: value;`.
    pub fn declaration(&mut self, property: &str, value: impl Display) -> &mut Self {
        self.line(&format!("{property}: {value};"));
        self
    }

    /// Append `property: value !important;`.
    pub fn important(&mut self, property: &str, value: impl Display) -> &mut Self {
        self.line(&format!("{property}: {value} !important;"));
        self
    }

    /// Append a `/* ... */` comment line.
    pub fn comment(&mut self, text: &str) -> &mut Self {
        self.line(&format!("/* {text} */"));
        self
    }

    /// Append a nested rule whose body is written by `body`.
    pub fn rule(&mut self, prelude: &str, body: impl FnOnce(&mut CssBuilder)) -> &mut Self {
        self.line(&format!("{prelude} {{"));
        self.depth += 1;
        body(self);
        self.depth -= 1;
        self.line("}");
        self
    }

    /// Append a single-line rule such as `@-ms-viewport { width: device-width; }`.
    pub fn inline_rule(&mut self, prelude: &str, property: &str, value: impl Display) -> &mut Self {
        self.line(&format!("{prelude} {{ {property}: {value}; }}"));
        self
    }

    /// Append an already generated fragment, one line at a time.
    ///
    /// Empty fragments add nothing.
    pub fn fragment(&mut self, css: &str) -> &mut Self {
        for line in css.lines() {
            if line.is_empty() {
                self.out.push('\n');
            } else {
                self.line(line);
            }
        }
        self
    }

    /// Wrap `body` in `prelude { ... }` without re-indenting it.
    pub fn verbatim_block(&mut self, prelude: &str, body: &str) -> &mut Self {
        self.line(&format!("{prelude} {{"));
        self.out.push_str(body);
        if !body.is_empty() && !body.ends_with('\n') {
            self.out.push('\n');
        }
        self.line("}");
        self
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn build(&self) -> String {
        self.out.clone()
    }
}

impl From<CssBuilder> for String {
    fn from(builder: CssBuilder) -> Self {
        builder.out
    }
}

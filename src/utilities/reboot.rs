//! Reboot: element normalization forked from Normalize.css.
//!
//! Every function here returns a self-contained rule set meant for the global
//! stylesheet. [`global_styles`] concatenates them in cascade order.

use crate::css::builder::CssBuilder;
use crate::css::unit::Length;
use crate::theme::Theme;

/// The body tokens reboot reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyStyle<'a> {
    pub font_family: &'a str,
    pub font_size: Length,
    pub font_weight: &'a str,
    pub line_height: Length,
    pub color: &'a str,
    pub background: &'a str,
}

impl<'a> BodyStyle<'a> {
    pub fn from_theme(theme: &'a Theme) -> Self {
        Self {
            font_family: &theme.font_family_base,
            font_size: theme.font_size_base,
            font_weight: &theme.font_weight_base,
            line_height: theme.line_height_base,
            color: &theme.body_color,
            background: &theme.body_bg,
        }
    }
}

/// Border-box sizing, font fallback, and text-size/tap-highlight resets.
pub fn html() -> String {
    let mut css = CssBuilder::new();
    css.rule("html", |b| {
        b.declaration("box-sizing", "border-box")
            .declaration("font-family", "sans-serif")
            .declaration("line-height", 1.15)
            .declaration("-ms-text-size-adjust", "100%")
            .declaration("-webkit-text-size-adjust", "100%")
            .declaration("-ms-overflow-style", "scrollbar")
            .declaration("-webkit-tap-highlight-color", "rgba(0,0,0,0)");
    });
    css.into()
}

pub fn box_sizing() -> String {
    let mut css = CssBuilder::new();
    css.rule("*,\n*::before,\n*::after", |b| {
        b.declaration("box-sizing", "inherit");
    });
    css.into()
}

/// IE10+ ignores `<meta name="viewport">` in some cases.
pub fn ie10_fix_viewport() -> String {
    let mut css = CssBuilder::new();
    css.inline_rule("@-ms-viewport", "width", "device-width");
    css.into()
}

pub fn body(style: &BodyStyle<'_>) -> String {
    let mut css = CssBuilder::new();
    css.rule("body", |b| {
        b.declaration("margin", 0)
            .declaration("font-family", style.font_family)
            .declaration("font-size", style.font_size)
            .declaration("font-weight", style.font_weight)
            .declaration("line-height", style.line_height)
            .declaration("color", style.color)
            .declaration("background-color", style.background);
    });
    css.into()
}

/// No focus outline on elements only reachable by pointer.
pub fn tab_index() -> String {
    let mut css = CssBuilder::new();
    css.rule("[tabindex=\"-1\"]:focus", |b| {
        b.important("outline", "none");
    });
    css.into()
}

pub fn svg() -> String {
    let mut css = CssBuilder::new();
    css.rule("svg:not(:root)", |b| {
        b.declaration("overflow", "hidden");
    });
    css.into()
}

/// Always hide elements carrying the `hidden` attribute.
pub fn ie10_fix_hidden() -> String {
    let mut css = CssBuilder::new();
    css.rule("[hidden]", |b| {
        b.important("display", "none");
    });
    css.into()
}

pub fn webkit_file_upload_button() -> String {
    let mut css = CssBuilder::new();
    css.rule("::-webkit-file-upload-button", |b| {
        b.declaration("font", "inherit")
            .declaration("-webkit-appearance", "button");
    });
    css.into()
}

/// Every reboot rule, in the order they belong in a global stylesheet.
pub fn global_styles(style: &BodyStyle<'_>) -> String {
    let mut css = CssBuilder::new();
    css.fragment(&html())
        .fragment(&box_sizing())
        .fragment(&ie10_fix_viewport())
        .fragment(&body(style))
        .fragment(&tab_index())
        .fragment(&svg())
        .fragment(&ie10_fix_hidden())
        .fragment(&webkit_file_upload_button());
    css.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_html() {
        insta::assert_snapshot!(html(), @r"
        html {
          box-sizing: border-box;
          font-family: sans-serif;
          line-height: 1.15;
          -ms-text-size-adjust: 100%;
          -webkit-text-size-adjust: 100%;
          -ms-overflow-style: scrollbar;
          -webkit-tap-highlight-color: rgba(0,0,0,0);
        }
        ");
    }

    #[test]
    fn test_body_uses_theme_tokens() {
        let theme = Theme::default();
        let css = body(&BodyStyle::from_theme(&theme));
        assert!(css.starts_with("body {\n  margin: 0;\n"));
        assert!(css.contains("  font-size: 1rem;\n"));
        assert!(css.contains("  font-weight: normal;\n"));
        assert!(css.contains("  line-height: 1.5;\n"));
        assert!(css.contains("  color: #292b2c;\n"));
        assert!(css.contains("  background-color: #fff;\n"));
        assert!(css.contains("\"Segoe UI\""));
    }

    #[test]
    fn test_body_overrides() {
        let style = BodyStyle {
            font_family: "Georgia, serif",
            font_size: Length::px(14.0),
            font_weight: "300",
            line_height: Length::parse("1.42").unwrap(),
            color: "#333",
            background: "white",
        };
        assert_eq!(
            body(&style),
            "body {\n  margin: 0;\n  font-family: Georgia, serif;\n  font-size: 14px;\n  \
             font-weight: 300;\n  line-height: 1.42;\n  color: #333;\n  background-color: white;\n}\n"
        );
    }

    #[test]
    fn test_small_rules() {
        assert_eq!(box_sizing(), "*,\n*::before,\n*::after {\n  box-sizing: inherit;\n}\n");
        assert_eq!(ie10_fix_viewport(), "@-ms-viewport { width: device-width; }\n");
        assert_eq!(tab_index(), "[tabindex=\"-1\"]:focus {\n  outline: none !important;\n}\n");
        assert_eq!(svg(), "svg:not(:root) {\n  overflow: hidden;\n}\n");
        assert_eq!(ie10_fix_hidden(), "[hidden] {\n  display: none !important;\n}\n");
        assert_eq!(
            webkit_file_upload_button(),
            "::-webkit-file-upload-button {\n  font: inherit;\n  -webkit-appearance: button;\n}\n"
        );
    }

    #[test]
    fn test_global_styles_order() {
        let theme = Theme::default();
        let css = global_styles(&BodyStyle::from_theme(&theme));
        let order = [
            "html {",
            "*::after {",
            "@-ms-viewport",
            "body {",
            "[tabindex=\"-1\"]",
            "svg:not(:root)",
            "[hidden]",
            "::-webkit-file-upload-button",
        ];
        let positions: Vec<usize> = order.iter().map(|s| css.find(s).unwrap()).collect();
        assert!(positions.windows(2).all(|p| p[0] < p[1]), "{positions:?}");
    }
}

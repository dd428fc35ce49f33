//! logos-based tokenizer for CSS length values.
//!
//! A length is a single [`LengthToken::Number`] optionally followed by one
//! unit token. Unit tokens are matched longest-first by logos, so `rem`
//! never lexes as `r` + `em`.

use logos::Logos;

/// Token produced while lexing a CSS length such as `30px` or `-0.5rem`.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LengthToken {
    /// Integer or decimal magnitude, possibly negative: `30`, `-2`, `0.5`, `.25`.
    #[regex(r"-?([0-9]+(\.[0-9]+)?|\.[0-9]+)")]
    Number,

    #[token("px")]
    Px,

    #[token("rem")]
    Rem,

    #[token("em")]
    Em,

    #[token("%")]
    Percent,

    #[token("vw")]
    Vw,

    #[token("vh")]
    Vh,

    #[token("pt")]
    Pt,
}

/// Tokenize a length into `(token, text)` pairs.
///
/// Returns `None` as soon as any byte fails to lex, so callers never see a
/// partially recognized value.
pub fn tokenize(input: &str) -> Option<Vec<(LengthToken, &str)>> {
    let lexer = LengthToken::lexer(input);
    lexer
        .spanned()
        .map(|(result, span)| result.ok().map(|token| (token, &input[span])))
        .collect()
}

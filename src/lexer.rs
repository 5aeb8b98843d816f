//! Lexer for shell input
//!
//! Splits a raw input line into whitespace-separated tokens. There is no
//! quoting, escaping, or comment syntax; a token is an opaque string.

/// Tokenize one line of input. An empty or all-whitespace line yields an
/// empty vector.
pub fn tokenize(input: &str) -> Vec<String> {
    input.split_whitespace().map(ToString::to_string).collect()
}

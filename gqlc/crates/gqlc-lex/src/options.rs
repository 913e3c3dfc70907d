//! Lexer options.

use serde::{Deserialize, Serialize};

/// Configuration supplied when a [`LexerState`](crate::LexerState) is built.
///
/// Tokenization does not read any of these fields; they are carried along
/// for the tree builder that consumes the tokens.
///
/// ```
/// use gqlc_lex::LexOptions;
///
/// let options: LexOptions = serde_json::from_str(r#"{"no_location": true}"#).unwrap();
/// assert!(options.no_location);
/// assert_eq!(LexOptions::default().no_location, false);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexOptions {
    /// Ask downstream consumers not to attach location info to the nodes
    /// they build.
    pub no_location: bool,
}

impl LexOptions {
    /// Options with `no_location` set.
    pub fn without_location() -> Self {
        Self { no_location: true }
    }
}

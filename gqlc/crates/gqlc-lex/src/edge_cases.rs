//! Edge case tests for gqlc-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, LexError, LexResult, LexerState, Token, TokenKind};
    use gqlc_util::span::SourceText;

    fn lex_all(text: &str) -> LexResult<Vec<Token>> {
        tokenize(&SourceText::new(text))
    }

    fn kinds(text: &str) -> Vec<TokenKind> {
        lex_all(text).unwrap().iter().map(Token::kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert_eq!(kinds(""), [TokenKind::Eof]);
    }

    #[test]
    fn test_edge_long_name() {
        let name = "a".repeat(10000);
        let tokens = lex_all(&format!("{{ {} }}", name)).unwrap();
        assert_eq!(tokens[1].value(), Some(name.as_str()));
        assert_eq!(tokens[2].start(), 10003);
    }

    #[test]
    fn test_edge_adjacent_punctuators() {
        use TokenKind::*;
        assert_eq!(
            kinds("{}()[]!$:=@|..."),
            [BraceL, BraceR, ParenL, ParenR, BracketL, BracketR, Bang, Dollar, Colon, Equals, At, Pipe, Spread, Eof]
        );
    }

    #[test]
    fn test_edge_spread_before_name() {
        use TokenKind::*;
        assert_eq!(kinds("...Frag"), [Spread, Name, Eof]);
        assert_eq!(kinds("... on User"), [Spread, Name, Name, Eof]);
    }

    #[test]
    fn test_edge_commas_are_insignificant() {
        assert_eq!(kinds(",,,a,,,b,,,"), kinds("a b"));
    }

    #[test]
    fn test_edge_number_then_punctuator() {
        use TokenKind::*;
        assert_eq!(kinds("[1,2.5,-3]"), [BracketL, Int, Float, Int, BracketR, Eof]);
        assert_eq!(kinds("0)"), [Int, ParenR, Eof]);
    }

    #[test]
    fn test_edge_negative_zero_float() {
        let tokens = lex_all("-0.0e-0").unwrap();
        assert_eq!(tokens[0].kind(), TokenKind::Float);
        assert_eq!(tokens[0].value(), Some("-0.0e-0"));
    }

    #[test]
    fn test_edge_empty_string_value() {
        let tokens = lex_all("\"\"").unwrap();
        assert_eq!(tokens[0].value(), Some(""));
        assert_eq!(tokens[0].end(), 2);
    }

    #[test]
    fn test_edge_string_with_hash() {
        let tokens = lex_all("\"# not a comment\"").unwrap();
        assert_eq!(tokens[0].kind(), TokenKind::String);
        assert_eq!(tokens[0].value(), Some("# not a comment"));
    }

    #[test]
    fn test_edge_comment_with_quote() {
        assert_eq!(kinds("# \"unterminated\nx"), [TokenKind::Name, TokenKind::Eof]);
    }

    #[test]
    fn test_edge_bom_mid_document() {
        assert_eq!(kinds("a\u{feff}b"), kinds("a b"));
    }

    #[test]
    fn test_edge_eof_position_after_trailing_newline() {
        let tokens = lex_all("a\n").unwrap();
        let eof = &tokens[1];
        assert_eq!((eof.start(), eof.end()), (2, 2));
        assert_eq!((eof.line(), eof.column()), (2, 1));
    }

    #[test]
    fn test_edge_column_counts_bytes() {
        let tokens = lex_all("\"\u{e9}\" x").unwrap();
        assert_eq!(tokens[1].column(), 6);
    }

    #[test]
    fn test_edge_del_is_unexpected() {
        let err = lex_all("\u{7f}").unwrap_err();
        assert_eq!(err.to_string(), "Unexpected character: \"\\u007F\".");
    }

    #[test]
    fn test_edge_tab_inside_string_is_allowed() {
        assert_eq!(lex_all("\"\t\"").unwrap()[0].value(), Some("\t"));
    }

    #[test]
    fn test_edge_error_after_comment_keeps_state() {
        let source = SourceText::new("a # note\n  \"open");
        let mut lexer = LexerState::new(&source);
        lexer.advance().unwrap();
        let err = lexer.advance().unwrap_err();
        assert_eq!(err, LexError::UnterminatedString { position: 16 });
        assert_eq!(lexer.line(), 1);
        assert_eq!(lexer.tokens().count(), 2);
    }

    // ==================== PROPERTY-BASED TESTS ====================

    #[test]
    fn test_property_names() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,64}")| {
            let tokens = lex_all(&input).unwrap();
            assert_eq!(tokens.len(), 2);
            assert_eq!(tokens[0].kind(), TokenKind::Name);
            assert_eq!(tokens[0].value(), Some(input.as_str()));
        });
    }

    #[test]
    fn test_property_ints() {
        use proptest::prelude::*;

        proptest!(|(input in "-?(0|[1-9][0-9]{0,30})")| {
            let tokens = lex_all(&input).unwrap();
            assert_eq!(tokens[0].kind(), TokenKind::Int);
            assert_eq!(tokens[0].value(), Some(input.as_str()));
        });
    }

    #[test]
    fn test_property_floats() {
        use proptest::prelude::*;

        proptest!(|(input in "-?(0|[1-9][0-9]{0,5})(\\.[0-9]{1,5}|[eE][+-]?[0-9]{1,3}|\\.[0-9]{1,5}[eE][+-]?[0-9]{1,3})")| {
            let tokens = lex_all(&input).unwrap();
            assert_eq!(tokens[0].kind(), TokenKind::Float);
            assert_eq!(tokens[0].end(), input.len());
        });
    }

    #[test]
    fn test_property_plain_strings() {
        use proptest::prelude::*;

        proptest!(|(input in "[^\"\\\\\\x00-\\x1f]{0,64}")| {
            let text = format!("\"{}\"", input);
            let tokens = lex_all(&text).unwrap();
            assert_eq!(tokens[0].kind(), TokenKind::String);
            assert_eq!(tokens[0].value(), Some(input.as_str()));
        });
    }

    #[test]
    fn test_property_ignored_only() {
        use proptest::prelude::*;

        proptest!(|(input in "[ \t,\n]{0,64}")| {
            let source = SourceText::new(input.as_str());
            let mut lexer = LexerState::new(&source);
            let eof = lexer.advance().unwrap().clone();
            assert_eq!(eof.kind(), TokenKind::Eof);
            assert_eq!(lexer.last_token().kind(), TokenKind::Sof);
            let terminators = input.matches('\n').count() as u32;
            assert_eq!(lexer.line(), 1 + terminators);
        });
    }

    #[test]
    fn test_property_token_invariants() {
        use proptest::prelude::*;

        proptest!(|(input in any::<String>())| {
            let source = SourceText::new(input.as_str());
            let mut lexer = LexerState::new(&source);
            let mut last_end = 0;
            loop {
                match lexer.advance() {
                    Ok(token) => {
                        assert!(token.end() >= token.start());
                        assert!(token.start() >= last_end);
                        assert!(token.line() >= 1 && token.column() >= 1);
                        assert_eq!(token.kind().has_value(), token.value().is_some());
                        last_end = token.end();
                        if token.kind() == TokenKind::Eof {
                            assert_eq!(token.start(), input.len());
                            break;
                        }
                    }
                    Err(err) => {
                        assert!(err.position() <= input.len());
                        let line = lexer.line();
                        assert_eq!(lexer.advance().unwrap_err(), err);
                        assert_eq!(lexer.line(), line);
                        break;
                    }
                }
            }
        });
    }

    #[test]
    fn test_property_eof_is_idempotent() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-z{}():! ]{0,32}")| {
            let source = SourceText::new(input.as_str());
            let mut lexer = LexerState::new(&source);
            while lexer.advance().unwrap().kind() != TokenKind::Eof {}
            let first = lexer.advance().unwrap().clone();
            let second = lexer.advance().unwrap().clone();
            assert_eq!(first, second);
        });
    }
}

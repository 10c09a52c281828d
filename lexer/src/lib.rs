pub mod token;

use logos::Logos;
use shared_context::source_map::SourceMap;
use shared_context::Span;
use token::Token;

#[derive(Clone, Copy)]
pub struct SpannedToken<'source> {
    pub token_type: Token,
    pub lexeme: &'source str,
    pub span: Span,
}

impl<'source> Default for SpannedToken<'source> {
    fn default() -> Self {
        Self {
            token_type: Token::Error,
            lexeme: "",
            span: Span::default(),
        }
    }
}

impl<'source> SpannedToken<'source> {
    pub fn get_token(&self) -> Token {
        self.token_type
    }

    pub fn get_lexeme(&self) -> &'source str {
        self.lexeme
    }

    pub fn get_span(&self) -> Span {
        self.span
    }

    pub fn get_line(&self) -> usize {
        self.span.line
    }
}

/// An unrecognized character sequence in the source text.
#[derive(Debug)]
pub struct LexError {
    message: String,
}

impl LexError {
    pub fn new(lexeme: &str, span: Span, source_map: &SourceMap) -> Self {
        let message = source_map.format_message(format!("unknown token `{lexeme}`"), span);
        Self { message }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for LexError {}

pub struct Lexer<'source> {
    iter: logos::Lexer<'source, Token>,
    input: &'source str,
}

impl<'source> Lexer<'source> {
    pub fn new(input: &'source str) -> Self {
        Self {
            iter: Token::lexer(input),
            input,
        }
    }

    pub fn get_source_code(&self) -> &'source str {
        self.input
    }

    /// Returns the next token, or `None` at end of input.
    pub fn next(&mut self, source_map: &SourceMap) -> Option<Result<SpannedToken<'source>, LexError>> {
        loop {
            let result = self.iter.next()?;
            let byte_span = self.iter.span();
            let lexeme = self.iter.slice();
            let line = self.iter.extras.line_num + 1;

            let span = Span::new(byte_span.start, byte_span.end, line);

            return Some(match result {
                Ok(Token::Skip) => continue,
                Ok(Token::Error) => Err(LexError::new(lexeme, span, source_map)),
                Ok(token_type) => Ok(SpannedToken {
                    token_type,
                    lexeme,
                    span,
                }),
                Err(()) => Err(LexError::new(lexeme, span, source_map)),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(src: &str) -> Vec<Token> {
        let source_map = SourceMap::new("test.c", src);
        let mut lexer = Lexer::new(src);
        let mut tokens = Vec::new();
        while let Some(result) = lexer.next(&source_map) {
            tokens.push(result.expect("unexpected lex error").token_type);
        }
        tokens
    }

    #[test]
    fn lexes_minimal_program() {
        let tokens = lex_all("int main(void) { return 2; }");
        assert_eq!(
            tokens,
            vec![
                Token::Int,
                Token::Identifier,
                Token::LeftParenthesis,
                Token::Void,
                Token::RightParenthesis,
                Token::LeftCurlyBracket,
                Token::Return,
                Token::ConstantInt,
                Token::Semicolon,
                Token::RightCurlyBracket,
            ]
        );
    }

    #[test]
    fn lexes_operators_without_ambiguity() {
        let tokens = lex_all("a <= b && c != d || !e");
        assert_eq!(
            tokens,
            vec![
                Token::Identifier,
                Token::LessThanOrEq,
                Token::Identifier,
                Token::LogicalAnd,
                Token::Identifier,
                Token::NotEqual,
                Token::Identifier,
                Token::LogicalOr,
                Token::LogicalNot,
                Token::Identifier,
            ]
        );
    }

    #[test]
    fn skips_comments_and_whitespace() {
        let tokens = lex_all("int x; // trailing comment\n/* block */ int y;");
        assert_eq!(
            tokens,
            vec![
                Token::Int,
                Token::Identifier,
                Token::Semicolon,
                Token::Int,
                Token::Identifier,
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn reports_unknown_token() {
        let source_map = SourceMap::new("test.c", "int x = 9bad;");
        let mut lexer = Lexer::new("int x = 9bad;");
        let mut saw_error = false;
        while let Some(result) = lexer.next(&source_map) {
            if result.is_err() {
                saw_error = true;
                break;
            }
        }
        assert!(saw_error);
    }
}

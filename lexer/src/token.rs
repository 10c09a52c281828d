use logos::Logos;
use std::fmt;

/// Extra state threaded through the `logos::Lexer` so that every produced
/// token can be stamped with the line it was found on.
#[derive(Debug, Default)]
pub struct LinePosition {
    pub line_num: usize,
}

fn count_newline(lex: &mut logos::Lexer<Token>) -> logos::Skip {
    lex.extras.line_num += 1;
    logos::Skip
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Logos)]
#[logos(extras = LinePosition)]
pub enum Token {
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", priority = 0)]
    Identifier,

    #[regex(r"\d+")]
    ConstantInt,

    #[token("return")]
    Return,

    #[token("int")]
    Int,

    #[token("void")]
    Void,

    #[token("=")]
    Assignment,

    #[token("-")]
    Neg,

    #[token("+")]
    Add,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("%")]
    Mod,

    #[token("&&")]
    LogicalAnd,

    #[token("||")]
    LogicalOr,

    #[token("!")]
    LogicalNot,

    #[token("==")]
    Equal,

    #[token("!=")]
    NotEqual,

    #[token("<")]
    LessThan,

    #[token(">")]
    GreaterThan,

    #[token("<=")]
    LessThanOrEq,

    #[token(">=")]
    GreaterThanOrEq,

    #[token("~")]
    Not,

    #[token("(")]
    LeftParenthesis,

    #[token(")")]
    RightParenthesis,

    #[token("{")]
    LeftCurlyBracket,

    #[token("}")]
    RightCurlyBracket,

    #[token(";")]
    Semicolon,

    #[regex(r"\n", callback = count_newline)]
    #[regex(r"[ \t\f]+", logos::skip)]
    #[regex(r"//[^\n]*", logos::skip)]
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", logos::skip)]
    Skip,

    // catches things like "9main" that would otherwise lex as a constant
    // immediately followed by an identifier
    #[regex(r"\d+[a-zA-Z_][a-zA-Z0-9_]*")]
    Error,
}

impl Token {
    pub fn is_unary(&self) -> bool {
        matches!(self, Token::Neg | Token::Not | Token::LogicalNot)
    }

    pub fn is_binary(&self) -> bool {
        matches!(
            self,
            Token::Add
                | Token::Neg
                | Token::Mul
                | Token::Div
                | Token::Mod
                | Token::LogicalAnd
                | Token::LogicalOr
                | Token::Equal
                | Token::NotEqual
                | Token::LessThan
                | Token::GreaterThan
                | Token::LessThanOrEq
                | Token::GreaterThanOrEq
                | Token::Assignment
        )
    }

    pub fn precedence(&self) -> usize {
        match self {
            Token::Mul | Token::Div | Token::Mod => 50,
            Token::Add | Token::Neg => 45,
            Token::LessThan | Token::LessThanOrEq | Token::GreaterThan | Token::GreaterThanOrEq => {
                35
            }
            Token::Equal | Token::NotEqual => 30,
            Token::LogicalAnd => 10,
            Token::LogicalOr => 5,
            Token::Assignment => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Identifier => write!(f, "identifier"),
            Token::ConstantInt => write!(f, "int constant"),
            Token::Return => write!(f, "return"),
            Token::Int => write!(f, "int"),
            Token::Void => write!(f, "void"),
            Token::Assignment => write!(f, "="),
            Token::Neg => write!(f, "-"),
            Token::Add => write!(f, "+"),
            Token::Mul => write!(f, "*"),
            Token::Div => write!(f, "/"),
            Token::Mod => write!(f, "%"),
            Token::LogicalAnd => write!(f, "&&"),
            Token::LogicalOr => write!(f, "||"),
            Token::LogicalNot => write!(f, "!"),
            Token::Equal => write!(f, "=="),
            Token::NotEqual => write!(f, "!="),
            Token::LessThan => write!(f, "<"),
            Token::GreaterThan => write!(f, ">"),
            Token::LessThanOrEq => write!(f, "<="),
            Token::GreaterThanOrEq => write!(f, ">="),
            Token::Not => write!(f, "~"),
            Token::LeftParenthesis => write!(f, "("),
            Token::RightParenthesis => write!(f, ")"),
            Token::LeftCurlyBracket => write!(f, "{{"),
            Token::RightCurlyBracket => write!(f, "}}"),
            Token::Semicolon => write!(f, ";"),
            Token::Skip => write!(f, "<skip>"),
            Token::Error => write!(f, "<error>"),
        }
    }
}

use lexer::{token::Token, SpannedToken};
use parse_err::ParseErr;
use shared_context::{CompilerContext, Identifier, Span, SpannedIdentifier};

use crate::ast::*;

mod parse_expressions;
pub mod parse_err;

pub struct Parser<'a, 'c> {
    lexer: lexer::Lexer<'a>,
    ctx: &'c mut CompilerContext<'a>,
    current_token: SpannedToken<'a>,
    peeked_token: Option<SpannedToken<'a>>,
}

impl<'a, 'c> Parser<'a, 'c> {
    pub fn new(lexer: lexer::Lexer<'a>, ctx: &'c mut CompilerContext<'a>) -> Self {
        Self {
            lexer,
            ctx,
            current_token: SpannedToken::default(),
            peeked_token: None,
        }
    }

    /// advance the parser to the next token and return it
    fn advance(&mut self) -> Result<SpannedToken<'a>, ParseErr> {
        let token = match self.peeked_token.take() {
            Some(token) => token,
            None => self.next_raw()?,
        };
        self.current_token = token;
        Ok(self.current_token)
    }

    /// return the next token without consuming it
    fn peek(&mut self) -> Result<SpannedToken<'a>, ParseErr> {
        if self.peeked_token.is_none() {
            self.peeked_token = Some(self.next_raw()?);
        }
        Ok(self.peeked_token.unwrap())
    }

    fn next_raw(&mut self) -> Result<SpannedToken<'a>, ParseErr> {
        match self.lexer.next(&self.ctx.source_map) {
            Some(Ok(token)) => Ok(token),
            Some(Err(lex_err)) => Err(ParseErr::new(
                lex_err.to_string(),
                &self.current_token,
                &self.ctx.source_map,
            )),
            None => Err(ParseErr::new(
                "unexpected end of input".to_string(),
                &self.current_token,
                &self.ctx.source_map,
            )),
        }
    }

    /// compare the next token's lexeme with `expected`, consuming it on a match
    fn expect_token(&mut self, expected: &'static str) -> Result<(), ParseErr> {
        let token = self.peek()?;
        if token.get_lexeme() != expected {
            Err(ParseErr::expected(expected, &token, &self.ctx.source_map))
        } else {
            self.advance()?;
            Ok(())
        }
    }

    /// entry point for the parser
    pub fn parse_program(&mut self) -> Result<Program, ParseErr> {
        let function = self.parse_function()?;
        let program = Program::new(function);

        // any leftover token past the function definition is a syntax error
        if self.peek().is_ok() {
            let token = self.advance()?;
            Err(ParseErr::expected(
                "end of input",
                &token,
                &self.ctx.source_map,
            ))
        } else {
            Ok(program)
        }
    }

    fn parse_function(&mut self) -> Result<FunctionDef, ParseErr> {
        let start = self.peek()?.get_span().start;
        self.expect_token("int")?;

        let name = self.parse_identifier()?;

        self.expect_token("(")?;
        self.expect_token("void")?;
        self.expect_token(")")?;

        let body = self.parse_block()?;

        let end = self.current_token.get_span().end;
        let line = self.current_token.get_line();
        let span = Span::new(start, end, line);

        Ok(FunctionDef::new(name, body, span))
    }

    fn parse_block(&mut self) -> Result<Block, ParseErr> {
        let start = self.peek()?.get_span().start;

        self.expect_token("{")?;

        let mut items = Vec::new();
        while self.peek()?.get_token() != Token::RightCurlyBracket {
            items.push(self.parse_block_item()?);
        }
        self.advance()?; // consume '}'

        let end = self.current_token.get_span().end;
        let line = self.current_token.get_line();
        let span = Span::new(start, end, line);

        Ok(Block::new(items, span))
    }

    fn parse_block_item(&mut self) -> Result<BlockItem, ParseErr> {
        match self.peek()?.get_token() {
            Token::Int => Ok(BlockItem::D(self.parse_declaration()?)),
            _ => Ok(BlockItem::S(self.parse_statement()?)),
        }
    }

    fn parse_declaration(&mut self) -> Result<Declaration, ParseErr> {
        let start = self.peek()?.get_span().start;

        self.expect_token("int")?;
        let name = self.parse_identifier()?;

        let init = if self.peek()?.get_token() == Token::Assignment {
            self.advance()?; // consume '='
            Some(self.parse_expression(0)?)
        } else {
            None
        };

        self.expect_token(";")?;

        let end = self.current_token.get_span().end;
        let line = self.current_token.get_line();
        let span = Span::new(start, end, line);

        Ok(Declaration::new(name, init, span))
    }

    fn parse_statement(&mut self) -> Result<Statement, ParseErr> {
        let start = self.peek()?.get_span().start;

        let kind = match self.peek()?.get_token() {
            Token::Return => {
                self.advance()?; // consume 'return'
                let exp = self.parse_expression(0)?;
                self.expect_token(";")?;
                StatementKind::Return(exp)
            }
            Token::Semicolon => {
                self.advance()?; // consume ';'
                StatementKind::Null
            }
            _ => {
                let exp = self.parse_expression(0)?;
                self.expect_token(";")?;
                StatementKind::ExprStatement(exp)
            }
        };

        let end = self.current_token.get_span().end;
        let line = self.current_token.get_line();
        let span = Span::new(start, end, line);

        Ok(Statement::new(kind, span))
    }

    fn parse_identifier(&mut self) -> Result<SpannedIdentifier, ParseErr> {
        let start = self.peek()?.get_span().start;
        let token = self.advance()?;
        let end = token.get_span().end;
        let line = token.get_line();
        let span = Span::new(start, end, line);

        if token.get_token() == Token::Identifier {
            let symbol = self.ctx.interner.intern(token.get_lexeme());
            let identifier = Identifier::new(symbol, 0);
            Ok(SpannedIdentifier::new(identifier, span))
        } else {
            Err(ParseErr::expected("identifier", &token, &self.ctx.source_map))
        }
    }
}

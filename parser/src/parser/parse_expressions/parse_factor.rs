use crate::ast::{Expression, ExpressionKind};
use crate::parser::{ParseErr, Parser};
use lexer::token::Token;
use shared_context::{Span, SpannedIdentifier};

impl<'a, 'c> Parser<'a, 'c> {
    pub(crate) fn parse_factor(&mut self) -> Result<Expression, ParseErr> {
        let token = self.peek()?;

        match token.get_token() {
            Token::ConstantInt => self.parse_constant_int(),
            tok if tok.is_unary() => self.handle_unary_expression(),
            Token::LeftParenthesis => self.handle_parenthesized_expression(),
            Token::Identifier => self.handle_var_expression(),
            _ => Err(ParseErr::new(
                "invalid expression".to_string(),
                &token,
                &self.ctx.source_map,
            )),
        }
    }

    fn handle_unary_expression(&mut self) -> Result<Expression, ParseErr> {
        let start = self.peek()?.get_span().start;
        let line = self.peek()?.get_line();

        let op = self.parse_unary_op()?;
        let inner = self.parse_factor()?;

        let end = self.current_token.get_span().end;
        let kind = ExpressionKind::Unary {
            operator: op,
            operand: Box::new(inner),
        };
        Ok(Expression::new(kind, Span::new(start, end, line)))
    }

    fn handle_parenthesized_expression(&mut self) -> Result<Expression, ParseErr> {
        self.advance()?; // consume '('
        let inner = self.parse_expression(0)?;
        self.expect_token(")")?;
        Ok(inner)
    }

    fn handle_var_expression(&mut self) -> Result<Expression, ParseErr> {
        let start = self.peek()?.get_span().start;
        let line = self.peek()?.get_line();

        let name: SpannedIdentifier = self.parse_identifier()?;

        let end = self.current_token.get_span().end;
        let kind = ExpressionKind::Var(name);
        Ok(Expression::new(kind, Span::new(start, end, line)))
    }

    fn parse_constant_int(&mut self) -> Result<Expression, ParseErr> {
        let start = self.peek()?.get_span().start;
        let line = self.peek()?.get_line();
        let token = self.advance()?;

        let value = token.get_lexeme().parse::<i32>().map_err(|_| {
            ParseErr::new(
                "failed to parse integer constant".to_string(),
                &token,
                &self.ctx.source_map,
            )
        })?;

        let end = token.get_span().end;
        let kind = ExpressionKind::Constant(value);
        Ok(Expression::new(kind, Span::new(start, end, line)))
    }
}

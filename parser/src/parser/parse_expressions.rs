use crate::ast::{BinaryOP, Expression, ExpressionKind, UnaryOP};
use crate::parser::{ParseErr, Parser};
use lexer::token::Token;
use shared_context::Span;

mod parse_factor;

impl<'a, 'c> Parser<'a, 'c> {
    /// Precedence-climbing expression parser: `parse_expression(0)` parses a
    /// full expression, and each recursive call raises `min_prec` to bind
    /// tighter than the operator that triggered it.
    pub(crate) fn parse_expression(&mut self, min_prec: usize) -> Result<Expression, ParseErr> {
        let start = self.peek()?.get_span().start;
        let line = self.peek()?.get_line();
        let mut left = self.parse_factor()?;

        let mut next_token = self.peek()?.get_token();
        while next_token.is_binary() && next_token.precedence() >= min_prec {
            left = if next_token == Token::Assignment {
                self.handle_assignment(left, next_token.precedence(), start, line)?
            } else {
                self.handle_binary(left, next_token.precedence(), start, line)?
            };
            next_token = self.peek()?.get_token();
        }

        Ok(left)
    }

    fn handle_assignment(
        &mut self,
        left: Expression,
        token_precedence: usize,
        start: usize,
        line: usize,
    ) -> Result<Expression, ParseErr> {
        self.advance()?; // consume '='
        let right = self.parse_expression(token_precedence)?;
        let kind = ExpressionKind::Assignment {
            lvalue: Box::new(left),
            rvalue: Box::new(right),
        };
        let end = self.current_token.get_span().end;
        Ok(Expression::new(kind, Span::new(start, end, line)))
    }

    fn handle_binary(
        &mut self,
        left: Expression,
        token_precedence: usize,
        start: usize,
        line: usize,
    ) -> Result<Expression, ParseErr> {
        let op = self.parse_binary_op()?;
        // left-associative: the recursive call requires strictly higher
        // precedence so that a same-precedence operator to the right stops
        // here and is picked up by the enclosing loop instead.
        let right = self.parse_expression(token_precedence + 1)?;
        let kind = ExpressionKind::Binary {
            operator: op,
            operand1: Box::new(left),
            operand2: Box::new(right),
        };
        let end = self.current_token.get_span().end;
        Ok(Expression::new(kind, Span::new(start, end, line)))
    }

    fn parse_binary_op(&mut self) -> Result<BinaryOP, ParseErr> {
        let token = self.advance()?;

        match token.get_token() {
            Token::Add => Ok(BinaryOP::Add),
            // the '-' token doubles as binary subtraction and unary negation
            Token::Neg => Ok(BinaryOP::Sub),
            Token::Mul => Ok(BinaryOP::Mul),
            Token::Div => Ok(BinaryOP::Div),
            Token::Mod => Ok(BinaryOP::Mod),
            Token::LogicalAnd => Ok(BinaryOP::LogicalAnd),
            Token::LogicalOr => Ok(BinaryOP::LogicalOr),
            Token::Equal => Ok(BinaryOP::Equal),
            Token::NotEqual => Ok(BinaryOP::NotEqual),
            Token::LessThan => Ok(BinaryOP::LessThan),
            Token::GreaterThan => Ok(BinaryOP::GreaterThan),
            Token::LessThanOrEq => Ok(BinaryOP::LessThanOrEq),
            Token::GreaterThanOrEq => Ok(BinaryOP::GreaterThanOrEq),
            _ => Err(ParseErr::expected(
                "binary operator",
                &token,
                &self.ctx.source_map,
            )),
        }
    }

    fn parse_unary_op(&mut self) -> Result<UnaryOP, ParseErr> {
        let token = self.advance()?;

        match token.get_token() {
            Token::Neg => Ok(UnaryOP::Neg),
            Token::Not => Ok(UnaryOP::Not),
            Token::LogicalNot => Ok(UnaryOP::LogicalNot),
            _ => Err(ParseErr::expected(
                "unary operator",
                &token,
                &self.ctx.source_map,
            )),
        }
    }
}

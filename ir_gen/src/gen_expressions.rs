// Expression lowering: each AST expression becomes a sequence of Tacky
// instructions plus a `tacky::Value` naming its result.

use crate::IRgen;
use crate::InternalError;
use crate::tacky;
use parser::ast;

mod gen_logical_expressions;

impl<'src, 'ctx> IRgen<'src, 'ctx> {
    pub(crate) fn gen_expression(
        &mut self,
        expr: ast::Expression,
        instructions: &mut Vec<tacky::Instruction>,
    ) -> Result<tacky::Value, InternalError> {
        match expr.kind {
            ast::ExpressionKind::Constant(value) => Ok(tacky::Value::Constant(value)),

            ast::ExpressionKind::Var(name) => Ok(tacky::Value::Var(name.get_identifier())),

            ast::ExpressionKind::Unary { operator, operand } => {
                self.gen_unary_expr(operator, *operand, instructions)
            }

            ast::ExpressionKind::Binary {
                operator,
                operand1,
                operand2,
            } => self.gen_binary_expr(operator, *operand1, *operand2, instructions),

            ast::ExpressionKind::Assignment { lvalue, rvalue } => {
                self.gen_assignment(*lvalue, *rvalue, instructions)
            }
        }
    }

    fn gen_binary_expr(
        &mut self,
        operator: ast::BinaryOP,
        operand1: ast::Expression,
        operand2: ast::Expression,
        instructions: &mut Vec<tacky::Instruction>,
    ) -> Result<tacky::Value, InternalError> {
        match operator {
            // short-circuit operators need control flow, not a plain
            // instruction, so they're handled separately
            ast::BinaryOP::LogicalAnd => self.gen_logical_and(operand1, operand2, instructions),
            ast::BinaryOP::LogicalOr => self.gen_logical_or(operand1, operand2, instructions),

            _ => {
                let src1 = self.gen_expression(operand1, instructions)?;
                let src2 = self.gen_expression(operand2, instructions)?;
                let dst = self.make_temp_var();

                instructions.push(tacky::Instruction::Binary {
                    op: Self::convert_binary_op(operator)?,
                    src1,
                    src2,
                    dst,
                });

                Ok(dst)
            }
        }
    }

    fn gen_unary_expr(
        &mut self,
        operator: ast::UnaryOP,
        operand: ast::Expression,
        instructions: &mut Vec<tacky::Instruction>,
    ) -> Result<tacky::Value, InternalError> {
        let src = self.gen_expression(operand, instructions)?;
        let dst = self.make_temp_var();

        instructions.push(tacky::Instruction::Unary {
            op: Self::convert_unary_op(operator),
            src,
            dst,
        });

        Ok(dst)
    }

    /// `a = b` evaluates `b`, copies it into `a`, and yields `a` — not the
    /// rvalue — so that a chained `a = b = c` sees the destination location,
    /// matching what the destination-shape invariant assumes the value of an
    /// assignment expression is.
    fn gen_assignment(
        &mut self,
        lvalue: ast::Expression,
        rvalue: ast::Expression,
        instructions: &mut Vec<tacky::Instruction>,
    ) -> Result<tacky::Value, InternalError> {
        let rval = self.gen_expression(rvalue, instructions)?;
        let lval = self.gen_expression(lvalue, instructions)?;

        instructions.push(tacky::Instruction::Copy {
            src: rval,
            dst: lval,
        });

        Ok(lval)
    }

    fn convert_binary_op(op: ast::BinaryOP) -> Result<tacky::BinaryOP, InternalError> {
        Ok(match op {
            ast::BinaryOP::Add => tacky::BinaryOP::Add,
            ast::BinaryOP::Sub => tacky::BinaryOP::Sub,
            ast::BinaryOP::Mul => tacky::BinaryOP::Mul,
            ast::BinaryOP::Div => tacky::BinaryOP::Div,
            ast::BinaryOP::Mod => tacky::BinaryOP::Rem,
            ast::BinaryOP::Equal => tacky::BinaryOP::Equal,
            ast::BinaryOP::NotEqual => tacky::BinaryOP::NotEqual,
            ast::BinaryOP::GreaterThan => tacky::BinaryOP::GreaterThan,
            ast::BinaryOP::GreaterThanOrEq => tacky::BinaryOP::GreaterThanOrEq,
            ast::BinaryOP::LessThan => tacky::BinaryOP::LessThan,
            ast::BinaryOP::LessThanOrEq => tacky::BinaryOP::LessThanOrEq,
            ast::BinaryOP::LogicalAnd | ast::BinaryOP::LogicalOr => {
                return Err(InternalError::new(
                    "short-circuit operator reached convert_binary_op: should be lowered in gen_binary_expr",
                ));
            }
        })
    }

    fn convert_unary_op(op: ast::UnaryOP) -> tacky::UnaryOP {
        match op {
            ast::UnaryOP::Not => tacky::UnaryOP::Complement,
            ast::UnaryOP::Neg => tacky::UnaryOP::Negate,
            ast::UnaryOP::LogicalNot => tacky::UnaryOP::Not,
        }
    }
}

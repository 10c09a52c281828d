// Statement lowering: each AST statement becomes zero or more Tacky
// instructions.

use crate::IRgen;
use crate::InternalError;
use crate::tacky;
use parser::ast;

impl<'src, 'ctx> IRgen<'src, 'ctx> {
    pub(crate) fn gen_statement(
        &mut self,
        stmt: ast::Statement,
        instructions: &mut Vec<tacky::Instruction>,
    ) -> Result<(), InternalError> {
        match stmt.kind {
            ast::StatementKind::Return(expr) => {
                let val = self.gen_expression(expr, instructions)?;
                instructions.push(tacky::Instruction::Return(val));
            }
            ast::StatementKind::ExprStatement(expr) => {
                self.gen_expression(expr, instructions)?;
            }
            ast::StatementKind::Null => {}
        }
        Ok(())
    }
}

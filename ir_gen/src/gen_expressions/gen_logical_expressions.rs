// Short-circuit lowering for `&&` and `||`.

use crate::IRgen;
use crate::InternalError;
use crate::tacky;
use parser::ast;

impl<'src, 'ctx> IRgen<'src, 'ctx> {
    /// ```text
    ///   v1 = <operand1>
    ///   JumpIfZero v1, _false<n>
    ///   v2 = <operand2>
    ///   JumpIfZero v2, _false<n>
    ///   result = 1
    ///   Jump _end<n>
    /// _false<n>:
    ///   result = 0
    /// _end<n>:
    /// ```
    pub(super) fn gen_logical_and(
        &mut self,
        operand1: ast::Expression,
        operand2: ast::Expression,
        instructions: &mut Vec<tacky::Instruction>,
    ) -> Result<tacky::Value, InternalError> {
        let result = self.make_temp_var();
        let false_label = self.make_label("false");
        let end_label = self.make_label("end");

        let val1 = self.gen_expression(operand1, instructions)?;
        instructions.push(tacky::Instruction::JumpIfZero(val1, false_label));

        let val2 = self.gen_expression(operand2, instructions)?;
        instructions.push(tacky::Instruction::JumpIfZero(val2, false_label));

        instructions.push(tacky::Instruction::Copy {
            src: tacky::Value::Constant(1),
            dst: result,
        });
        instructions.push(tacky::Instruction::Jump(end_label));

        instructions.push(tacky::Instruction::Label(false_label));
        instructions.push(tacky::Instruction::Copy {
            src: tacky::Value::Constant(0),
            dst: result,
        });

        instructions.push(tacky::Instruction::Label(end_label));
        Ok(result)
    }

    /// ```text
    ///   v1 = <operand1>
    ///   JumpIfNotZero v1, _true<n>
    ///   v2 = <operand2>
    ///   JumpIfNotZero v2, _true<n>
    ///   result = 0
    ///   Jump _end<n>
    /// _true<n>:
    ///   result = 1
    /// _end<n>:
    /// ```
    pub(super) fn gen_logical_or(
        &mut self,
        operand1: ast::Expression,
        operand2: ast::Expression,
        instructions: &mut Vec<tacky::Instruction>,
    ) -> Result<tacky::Value, InternalError> {
        let result = self.make_temp_var();
        let true_label = self.make_label("true");
        let end_label = self.make_label("end");

        let val1 = self.gen_expression(operand1, instructions)?;
        instructions.push(tacky::Instruction::JumpIfNotZero(val1, true_label));

        let val2 = self.gen_expression(operand2, instructions)?;
        instructions.push(tacky::Instruction::JumpIfNotZero(val2, true_label));

        instructions.push(tacky::Instruction::Copy {
            src: tacky::Value::Constant(0),
            dst: result,
        });
        instructions.push(tacky::Instruction::Jump(end_label));

        instructions.push(tacky::Instruction::Label(true_label));
        instructions.push(tacky::Instruction::Copy {
            src: tacky::Value::Constant(1),
            dst: result,
        });

        instructions.push(tacky::Instruction::Label(end_label));
        Ok(result)
    }
}

use crate::Emitter;
use crate::EmitError;
use codegen::asm;
use shared_context::Identifier;
use std::io;

mod to_x86_asm;

impl<'a> Emitter<'a> {
    /// Writes a single `asm::Instruction` to the output buffer.
    pub(crate) fn write_instruction(
        &self,
        instr: asm::Instruction,
        out: &mut impl io::Write,
    ) -> Result<(), EmitError> {
        match instr {
            asm::Instruction::Mov { src, dst } => self.write_mov(src, dst, out),
            asm::Instruction::Unary { op, dst } => self.write_unary_instruction(op, dst, out),
            asm::Instruction::AllocateStack(size) => {
                self.write_stack_allocate_instruction(size, out)
            }
            asm::Instruction::Ret => self.write_return_instruction(out),
            asm::Instruction::Binary { op, src, dst } => {
                self.write_binary_instruction(op, src, dst, out)
            }
            asm::Instruction::Idiv(src) => self.write_div_instruction(src, out),
            asm::Instruction::Cdq => self.write_cdq_instruction(out),
            asm::Instruction::Cmp { src, dst } => self.write_cmp_instruction(src, dst, out),
            asm::Instruction::Jmp(label) => self.write_jmp_instruction(label, out),
            asm::Instruction::JmpCC(cond, label) => self.write_jmpcc_instruction(cond, label, out),
            asm::Instruction::SetCC(cond, dst) => self.write_setcc_instruction(cond, dst, out),
            asm::Instruction::Label(label) => self.write_label(label, out),
        }
    }

    fn write_mov(&self, src: asm::Operand, dst: asm::Operand, out: &mut impl io::Write) -> Result<(), EmitError> {
        let src = Self::convert_operand(src, 4)?;
        let dst = Self::convert_operand(dst, 4)?;
        Ok(self.format_two_operand_instruction("movl", &src, &dst, out)?)
    }

    fn write_unary_instruction(
        &self,
        op: asm::UnaryOP,
        dst: asm::Operand,
        out: &mut impl io::Write,
    ) -> Result<(), EmitError> {
        let op = Self::convert_unary_op(op);
        let dst = Self::convert_operand(dst, 4)?;
        Ok(self.format_one_operand_instruction(&op, &dst, out)?)
    }

    fn write_binary_instruction(
        &self,
        op: asm::BinaryOP,
        src: asm::Operand,
        dst: asm::Operand,
        out: &mut impl io::Write,
    ) -> Result<(), EmitError> {
        let op = Self::convert_binary_op(op);
        let src = Self::convert_operand(src, 4)?;
        let dst = Self::convert_operand(dst, 4)?;
        Ok(self.format_two_operand_instruction(&op, &src, &dst, out)?)
    }

    fn write_div_instruction(&self, src: asm::Operand, out: &mut impl io::Write) -> Result<(), EmitError> {
        let src = Self::convert_operand(src, 4)?;
        Ok(self.format_one_operand_instruction("idivl", &src, out)?)
    }

    fn write_cdq_instruction(&self, out: &mut impl io::Write) -> Result<(), EmitError> {
        Ok(out.write_all(b"\tcdq\n")?)
    }

    fn write_stack_allocate_instruction(&self, size: i32, out: &mut impl io::Write) -> Result<(), EmitError> {
        let src = format!("${size}");
        Ok(self.format_two_operand_instruction("subq", &src, "%rsp", out)?)
    }

    fn write_return_instruction(&self, out: &mut impl io::Write) -> Result<(), EmitError> {
        self.format_two_operand_instruction("movq", "%rbp", "%rsp", out)?;
        self.format_one_operand_instruction("popq", "%rbp", out)?;
        Ok(out.write_all(b"\tret\n")?)
    }

    fn write_cmp_instruction(
        &self,
        src: asm::Operand,
        dst: asm::Operand,
        out: &mut impl io::Write,
    ) -> Result<(), EmitError> {
        let src = Self::convert_operand(src, 4)?;
        let dst = Self::convert_operand(dst, 4)?;
        Ok(self.format_two_operand_instruction("cmpl", &src, &dst, out)?)
    }

    fn write_jmp_instruction(&self, label: Identifier, out: &mut impl io::Write) -> Result<(), EmitError> {
        let tar = format!("L{}", self.format_identifier(label));
        Ok(self.format_one_operand_instruction("jmp", &tar, out)?)
    }

    fn write_jmpcc_instruction(
        &self,
        cond: asm::Cond,
        label: Identifier,
        out: &mut impl io::Write,
    ) -> Result<(), EmitError> {
        let op = format!("j{}", Self::convert_cond(cond));
        let tar = format!("L{}", self.format_identifier(label));
        Ok(self.format_one_operand_instruction(&op, &tar, out)?)
    }

    fn write_setcc_instruction(
        &self,
        cond: asm::Cond,
        dst: asm::Operand,
        out: &mut impl io::Write,
    ) -> Result<(), EmitError> {
        let op = format!("set{}", Self::convert_cond(cond));
        let dst = Self::convert_operand(dst, 1)?;
        Ok(self.format_one_operand_instruction(&op, &dst, out)?)
    }

    fn write_label(&self, label: Identifier, out: &mut impl io::Write) -> Result<(), EmitError> {
        Ok(writeln!(out, "L{}:", self.format_identifier(label))?)
    }

    pub(crate) fn format_one_operand_instruction(
        &self,
        op: &str,
        dst: &str,
        out: &mut impl io::Write,
    ) -> io::Result<()> {
        writeln!(out, "\t{op}\t{dst}")
    }

    pub(crate) fn format_two_operand_instruction(
        &self,
        op: &str,
        src: &str,
        dst: &str,
        out: &mut impl io::Write,
    ) -> io::Result<()> {
        writeln!(out, "\t{op}\t{src}, {dst}")
    }
}

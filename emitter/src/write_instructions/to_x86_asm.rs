use codegen::asm;

use crate::Emitter;
use crate::EmitError;

impl<'a> Emitter<'a> {
    /// convert an operand to its x86-64 text form; `reg_size` picks the
    /// register width in bytes when the operand is a register
    pub(crate) fn convert_operand(operand: asm::Operand, reg_size: usize) -> Result<String, EmitError> {
        Ok(match operand {
            asm::Operand::Immediate(int) => format!("${int}"),
            // stack slots store a positive offset below the frame base
            asm::Operand::Stack(int) => format!("-{int}(%rbp)"),
            asm::Operand::Reg(reg) => Self::convert_register(reg, reg_size),
            // register allocation removes every pseudo-register before this
            // stage runs, so this arm should never be reached
            asm::Operand::Pseudo(_) => {
                return Err(EmitError::internal("pseudo-register survived register allocation"));
            }
        })
    }

    pub(crate) fn convert_register(register: asm::Register, reg_size: usize) -> String {
        match reg_size {
            1 => Self::convert_1_byte_reg(register),
            8 => Self::convert_8_byte_reg(register),
            _ => Self::convert_4_byte_reg(register),
        }
    }

    fn convert_8_byte_reg(register: asm::Register) -> String {
        match register {
            asm::Register::AX => "%rax".to_string(),
            asm::Register::DX => "%rdx".to_string(),
            asm::Register::R10 => "%r10".to_string(),
            asm::Register::R11 => "%r11".to_string(),
        }
    }

    fn convert_4_byte_reg(register: asm::Register) -> String {
        match register {
            asm::Register::AX => "%eax".to_string(),
            asm::Register::DX => "%edx".to_string(),
            asm::Register::R10 => "%r10d".to_string(),
            asm::Register::R11 => "%r11d".to_string(),
        }
    }

    fn convert_1_byte_reg(register: asm::Register) -> String {
        match register {
            asm::Register::AX => "%al".to_string(),
            asm::Register::DX => "%dl".to_string(),
            asm::Register::R10 => "%r10b".to_string(),
            asm::Register::R11 => "%r11b".to_string(),
        }
    }

    pub(crate) fn convert_cond(cond: asm::Cond) -> String {
        match cond {
            asm::Cond::E => "e".to_string(),
            asm::Cond::G => "g".to_string(),
            asm::Cond::L => "l".to_string(),
            asm::Cond::NE => "ne".to_string(),
            asm::Cond::GE => "ge".to_string(),
            asm::Cond::LE => "le".to_string(),
        }
    }

    pub(crate) fn convert_unary_op(operator: asm::UnaryOP) -> String {
        match operator {
            asm::UnaryOP::Neg => "negl".to_string(),
            asm::UnaryOP::Not => "notl".to_string(),
        }
    }

    pub(crate) fn convert_binary_op(operator: asm::BinaryOP) -> String {
        match operator {
            asm::BinaryOP::Add => "addl".to_string(),
            asm::BinaryOP::Sub => "subl".to_string(),
            asm::BinaryOP::Mul => "imull".to_string(),
        }
    }
}

use ir_gen::tacky;
use shared_context::Identifier;

use crate::asm;
use crate::asm::Instruction;
use crate::asm_gen::AsmGen;

impl AsmGen {
    pub(super) fn handle_jump(tar: Identifier) -> Vec<Instruction> {
        vec![asm::Instruction::Jmp(tar)]
    }

    pub(super) fn handle_jump_if_not_zero(pred: tacky::Value, tar: Identifier) -> Vec<Instruction> {
        vec![
            asm::Instruction::Cmp {
                src: asm::Operand::Immediate(0),
                dst: Self::convert_val(&pred),
            },
            asm::Instruction::JmpCC(asm::Cond::NE, tar),
        ]
    }

    pub(super) fn handle_jump_if_zero(pred: tacky::Value, tar: Identifier) -> Vec<Instruction> {
        vec![
            asm::Instruction::Cmp {
                src: asm::Operand::Immediate(0),
                dst: Self::convert_val(&pred),
            },
            asm::Instruction::JmpCC(asm::Cond::E, tar),
        ]
    }

    pub(super) fn handle_label(tar: Identifier) -> Vec<Instruction> {
        vec![asm::Instruction::Label(tar)]
    }
}

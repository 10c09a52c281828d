use std::collections::HashMap;

use crate::asm;
use shared_context::Identifier;

/// Assigns each pseudo-register a stack slot. Slots grow upward from the
/// frame base: the first pseudo seen gets offset 4, and each new one gets
/// `max_offset_so_far + 4`. Doesn't touch `AllocateStack` — the final frame
/// size is handed back to the caller, who owns deciding where that
/// instruction goes.
pub struct RegisterAllocation {
    pseudo_reg_map: HashMap<Identifier, i32>,
    offset: i32,
}

impl RegisterAllocation {
    pub fn new() -> Self {
        Self {
            pseudo_reg_map: HashMap::new(),
            offset: 0,
        }
    }

    /// Replace every pseudo-register operand with a stack address, and
    /// return the total frame size needed to hold them.
    pub fn allocate_registers(&mut self, program: &mut asm::Program) -> i32 {
        for instruction in &mut program.function.instructions {
            self.replace_pseudo_reg(instruction);
        }

        self.offset
    }

    fn replace_pseudo_reg(&mut self, instruction: &mut asm::Instruction) {
        match instruction {
            asm::Instruction::Mov { src, dst } => {
                self.to_stack(src);
                self.to_stack(dst);
            }
            asm::Instruction::Unary { op: _, dst } => {
                self.to_stack(dst);
            }
            asm::Instruction::Binary { op: _, src, dst } => {
                self.to_stack(src);
                self.to_stack(dst);
            }
            asm::Instruction::Cmp { src, dst } => {
                self.to_stack(src);
                self.to_stack(dst);
            }
            asm::Instruction::Idiv(src) => {
                self.to_stack(src);
            }
            asm::Instruction::SetCC(_, dst) => {
                self.to_stack(dst);
            }
            _ => {}
        }
    }

    fn to_stack(&mut self, operand: &mut asm::Operand) {
        if let asm::Operand::Pseudo(id) = operand {
            let slot = match self.pseudo_reg_map.get(id) {
                Some(slot) => *slot,
                None => {
                    self.offset += 4;
                    self.pseudo_reg_map.insert(*id, self.offset);
                    self.offset
                }
            };
            *operand = asm::Operand::Stack(slot);
        }
    }
}

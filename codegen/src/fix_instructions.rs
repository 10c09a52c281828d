use crate::asm;
use crate::asm::{Operand::Reg, Register};

/// Empty struct used as a namespace for instruction fix-up methods.
pub struct InstructionFix;

impl InstructionFix {
    /// Rewrites instructions whose operands violate x86-64 encoding
    /// constraints, and prepends the frame's `AllocateStack` now that
    /// register allocation has settled on a final size.
    pub fn fix_instructions(program: &mut asm::Program, stack_size: i32) {
        let instructions = &mut program.function.instructions;

        let mut new_instructions: Vec<asm::Instruction> = Vec::new();
        new_instructions.push(asm::Instruction::AllocateStack(stack_size));

        for instr in instructions.drain(..) {
            let fix_up = match &instr {
                asm::Instruction::Mov { src, dst } => {
                    Self::fix_mov_instruction(src, dst, &mut new_instructions)
                }
                asm::Instruction::Binary { op, src, dst } => match op {
                    asm::BinaryOP::Add | asm::BinaryOP::Sub => {
                        Self::fix_add_sub_instruction(*op, src, dst, &mut new_instructions)
                    }
                    asm::BinaryOP::Mul => Self::fix_mul_instruction(src, dst, &mut new_instructions),
                },
                asm::Instruction::Idiv(src) => Self::fix_div_instruction(src, &mut new_instructions),
                asm::Instruction::Cmp { src, dst } => {
                    Self::fix_cmp_instruction(src, dst, &mut new_instructions)
                }
                _ => false,
            };

            if !fix_up {
                new_instructions.push(instr);
            }
        }

        *instructions = new_instructions;
    }

    /// `mov` can't take two memory operands; shuttle the source through R10.
    fn fix_mov_instruction(
        src: &asm::Operand,
        dst: &asm::Operand,
        new_instructions: &mut Vec<asm::Instruction>,
    ) -> bool {
        if Self::is_stack(dst) && Self::is_stack(src) {
            new_instructions.push(asm::Instruction::Mov {
                src: *src,
                dst: Reg(Register::R10),
            });
            new_instructions.push(asm::Instruction::Mov {
                src: Reg(Register::R10),
                dst: *dst,
            });
            true
        } else {
            false
        }
    }

    /// `add`/`sub` can't take two memory operands either.
    fn fix_add_sub_instruction(
        op: asm::BinaryOP,
        src: &asm::Operand,
        dst: &asm::Operand,
        new_instructions: &mut Vec<asm::Instruction>,
    ) -> bool {
        if Self::is_stack(dst) && Self::is_stack(src) {
            new_instructions.push(asm::Instruction::Mov {
                src: *src,
                dst: Reg(Register::R10),
            });
            new_instructions.push(asm::Instruction::Binary {
                op,
                src: Reg(Register::R10),
                dst: *dst,
            });
            true
        } else {
            false
        }
    }

    /// `idiv` rejects an immediate or memory operand outright.
    fn fix_div_instruction(
        src: &asm::Operand,
        new_instructions: &mut Vec<asm::Instruction>,
    ) -> bool {
        if matches!(src, asm::Operand::Immediate(_)) || Self::is_stack(src) {
            new_instructions.push(asm::Instruction::Mov {
                src: *src,
                dst: Reg(Register::R10),
            });
            new_instructions.push(asm::Instruction::Idiv(Reg(Register::R10)));
            true
        } else {
            false
        }
    }

    /// `imul` can't write to a memory destination, so it's staged through R11.
    fn fix_mul_instruction(
        src: &asm::Operand,
        dst: &asm::Operand,
        new_instructions: &mut Vec<asm::Instruction>,
    ) -> bool {
        if Self::is_stack(dst) {
            new_instructions.push(asm::Instruction::Mov {
                src: *dst,
                dst: Reg(Register::R11),
            });
            new_instructions.push(asm::Instruction::Binary {
                op: asm::BinaryOP::Mul,
                src: *src,
                dst: Reg(Register::R11),
            });
            new_instructions.push(asm::Instruction::Mov {
                src: Reg(Register::R11),
                dst: *dst,
            });
            true
        } else {
            false
        }
    }

    /// `cmp` can't take two memory operands, and can't take an immediate as
    /// its second (destination-like) operand.
    fn fix_cmp_instruction(
        src: &asm::Operand,
        dst: &asm::Operand,
        new_instructions: &mut Vec<asm::Instruction>,
    ) -> bool {
        if Self::is_stack(dst) && Self::is_stack(src) {
            new_instructions.push(asm::Instruction::Mov {
                src: *src,
                dst: Reg(Register::R10),
            });
            new_instructions.push(asm::Instruction::Cmp {
                src: Reg(Register::R10),
                dst: *dst,
            });
            true
        } else if matches!(dst, asm::Operand::Immediate(_)) {
            new_instructions.push(asm::Instruction::Mov {
                src: *dst,
                dst: Reg(Register::R11),
            });
            new_instructions.push(asm::Instruction::Cmp {
                src: *src,
                dst: Reg(Register::R11),
            });
            true
        } else {
            false
        }
    }

    fn is_stack(op: &asm::Operand) -> bool {
        matches!(op, asm::Operand::Stack(_))
    }
}

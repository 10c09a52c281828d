use fix_instructions::InstructionFix;
use ir_gen::tacky;
use reg_alloc::RegisterAllocation;

// These modules implement different parts of the code generation pipeline.
// Each focuses on a specific transformation step in the backend.
pub mod asm;
mod asm_gen;
mod debugging_printer;
mod fix_instructions;
mod reg_alloc;

// Overview of this stage:
//
// The code generation phase converts Tacky IR into final assembly code.
// It runs in three main passes:
//   1. Generate an assembly-level abstract syntax tree.
//   2. Allocate stack slots for pseudo-registers.
//   3. Fix or rewrite invalid instructions that violate operand constraints,
//      and prepend the frame's stack allocation.

/// Empty struct used as a namespace for the tacky -> asm lowering methods.
pub struct AsmGen;

/// Provides debugging utilities to print assembly with resolved identifiers.
pub struct DebuggingPrinter;

/// Main entry point for the code generation pipeline.
///
/// Takes a Tacky IR program and returns a final assembly program.
pub fn codegen(program_tacky: tacky::Program) -> asm::Program {
    // 1. Convert Tacky IR into an assembly AST (still uses pseudo-registers).
    let mut program_asm = AsmGen::gen_asm(program_tacky);

    // 2. Allocate stack slots for pseudo-registers, and learn the frame size.
    let mut allocator = RegisterAllocation::new();
    let stack_size = allocator.allocate_registers(&mut program_asm);

    // 3. Fix invalid or non-encodable instructions, and reserve the frame.
    InstructionFix::fix_instructions(&mut program_asm, stack_size);

    // Return the final, valid assembly program.
    program_asm
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_context::{Bump, CompilerContext};

    fn compile(src: &str) -> asm::Program {
        let arena = Bump::new();
        let mut ctx = CompilerContext::new(&arena, "test.c", src);
        let lexer = lexer::Lexer::new(src);
        let ast = parser::parse(lexer, &mut ctx).expect("parse failed");
        let tacky = ir_gen::lower_to_tacky(ast, &mut ctx.interner).expect("lowering failed");
        codegen(tacky)
    }

    fn is_stack(op: &asm::Operand) -> bool {
        matches!(op, asm::Operand::Stack(_))
    }

    #[test]
    fn allocates_stack_unconditionally_even_with_no_locals() {
        let program = compile("int main(void) { return 0; }");
        match program.function.instructions.first() {
            Some(asm::Instruction::AllocateStack(size)) => assert_eq!(*size, 0),
            other => panic!("expected AllocateStack(0) first, got {other:?}"),
        }
    }

    #[test]
    fn allocates_stack_for_every_declared_variable() {
        let program = compile("int main(void) { int a = 1; int b = 2; return a + b; }");
        match program.function.instructions.first() {
            Some(asm::Instruction::AllocateStack(size)) => assert_eq!(*size, 8),
            other => panic!("expected AllocateStack(8) first, got {other:?}"),
        }
    }

    #[test]
    fn legalizes_cmp_between_two_stack_slots() {
        let program = compile("int main(void) { int a = 1; int b = 2; return a < b; }");
        for instr in &program.function.instructions {
            if let asm::Instruction::Cmp { src, dst } = instr {
                assert!(!(is_stack(src) && is_stack(dst)), "both operands are stack slots");
            }
        }
    }

    #[test]
    fn legalizes_cmp_with_immediate_destination() {
        let program = compile("int main(void) { int a = 1; return 5 == a; }");
        for instr in &program.function.instructions {
            if let asm::Instruction::Cmp { dst, .. } = instr {
                assert!(!matches!(dst, asm::Operand::Immediate(_)), "cmp dst is an immediate");
            }
        }
    }

    #[test]
    fn legalizes_mul_with_stack_destination() {
        let program = compile("int main(void) { int a = 2; int b = 3; return a * b; }");
        for instr in &program.function.instructions {
            if let asm::Instruction::Binary { op: asm::BinaryOP::Mul, dst, .. } = instr {
                assert!(!is_stack(dst), "imul destination is a stack slot");
            }
        }
    }

    #[test]
    fn div_never_takes_an_immediate_or_stack_operand() {
        let program = compile("int main(void) { int a = 10; return a / 3; }");
        for instr in &program.function.instructions {
            if let asm::Instruction::Idiv(src) = instr {
                assert!(!matches!(src, asm::Operand::Immediate(_)) && !is_stack(src));
            }
        }
    }
}

use crate::tacky;
use shared_context::CompilerContext;

/// Debug-only pretty printer for the `--tacky` driver flag.
pub struct DebuggingPrinter;

impl DebuggingPrinter {
    pub fn print(program: &tacky::Program, ctx: &CompilerContext) {
        println!("Program");
        Self::print_function(&program.function, ctx);
    }

    fn print_function(function: &tacky::FunctionDef, ctx: &CompilerContext) {
        let name = ctx.interner.lookup(function.name.get_symbol());
        println!("  FunctionDef {name}");
        for instr in &function.instructions {
            Self::print_instruction(instr);
        }
    }

    fn print_instruction(instr: &tacky::Instruction) {
        let indent = "    ";
        match instr {
            tacky::Instruction::Return(val) => println!("{indent}Return({val})"),
            tacky::Instruction::Unary { op, src, dst } => {
                println!("{indent}{op:?}(src: {src}, dst: {dst})");
            }
            tacky::Instruction::Binary { op, src1, src2, dst } => {
                println!("{indent}{op:?}(src1: {src1}, src2: {src2}, dst: {dst})");
            }
            tacky::Instruction::Copy { src, dst } => {
                println!("{indent}Copy(src: {src}, dst: {dst})");
            }
            tacky::Instruction::Jump(target) => {
                println!("{indent}Jump({target:?})");
            }
            tacky::Instruction::JumpIfZero(cond, target) => {
                println!("{indent}JumpIfZero(cond: {cond}, tar: {target:?})");
            }
            tacky::Instruction::JumpIfNotZero(cond, target) => {
                println!("{indent}JumpIfNotZero(cond: {cond}, tar: {target:?})");
            }
            tacky::Instruction::Label(label) => {
                println!("{indent}Label({label:?})");
            }
        }
    }
}

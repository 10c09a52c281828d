use crate::DebuggingPrinter;
use crate::asm;
use shared_context::CompilerContext;

impl DebuggingPrinter {
    pub fn print(program: &asm::Program, ctx: &CompilerContext) {
        println!("Program");
        Self::print_function(&program.function, ctx);
    }

    fn print_function(function: &asm::FunctionDef, ctx: &CompilerContext) {
        let name = ctx.interner.lookup(function.name.get_symbol());
        println!("  FunctionDef {name}");
        for instr in &function.instructions {
            Self::print_instruction(instr);
        }
    }

    fn print_instruction(instr: &asm::Instruction) {
        let indent = "    ";
        match instr {
            asm::Instruction::Mov { src, dst } => {
                println!("{indent}Mov(src: {src:?}, dst: {dst:?})");
            }
            asm::Instruction::Unary { op, dst } => {
                println!("{indent}Unary(op: {op:?}, dst: {dst:?})");
            }
            asm::Instruction::Binary { op, src, dst } => {
                println!("{indent}Binary(op: {op:?}, src: {src:?}, dst: {dst:?})");
            }
            asm::Instruction::Cmp { src, dst } => {
                println!("{indent}Cmp(src: {src:?}, dst: {dst:?})");
            }
            asm::Instruction::Idiv(src) => {
                println!("{indent}Idiv(src: {src:?})");
            }
            asm::Instruction::Cdq => {
                println!("{indent}Cdq");
            }
            asm::Instruction::Jmp(label) => {
                println!("{indent}Jmp({label:?})");
            }
            asm::Instruction::JmpCC(cond, label) => {
                println!("{indent}JmpCC(cond: {cond:?}, label: {label:?})");
            }
            asm::Instruction::SetCC(cond, dst) => {
                println!("{indent}SetCC(cond: {cond:?}, dst: {dst:?})");
            }
            asm::Instruction::Label(label) => {
                println!("{indent}Label({label:?})");
            }
            asm::Instruction::AllocateStack(size) => {
                println!("{indent}AllocateStack({size:?})");
            }
            asm::Instruction::Ret => {
                println!("{indent}Ret");
            }
        }
    }
}

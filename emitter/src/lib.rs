// Assembly-tree -> text writer. Targets macOS conventions: function symbols
// get a leading underscore, the function label is written with a space
// before its colon, and local labels are bare `L`-prefixed (no `.`, which is
// the ELF/Linux convention the teacher's on-disk emitter used).

use codegen::asm;
use shared_context::interner::Interner;
use std::io;

mod write_instructions;

/// Either an I/O failure writing to the output stream, or an
/// unreachable-by-construction case found while converting the assembly
/// tree to text (e.g. a pseudo-register that survived register
/// allocation). Kept as a `Result::Err` rather than a `panic!` so a
/// malformed tree can't crash the process.
#[derive(Debug)]
pub enum EmitError {
    Io(io::Error),
    Internal(String),
}

impl EmitError {
    pub(crate) fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl std::fmt::Display for EmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Internal(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for EmitError {}

impl From<io::Error> for EmitError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

pub struct Emitter<'a> {
    program: asm::Program,
    interner: &'a Interner<'a>,
}

impl<'a> Emitter<'a> {
    pub fn new(program: asm::Program, interner: &'a Interner<'a>) -> Self {
        Self { program, interner }
    }

    pub fn write_program(&self, out: &mut impl io::Write) -> Result<(), EmitError> {
        self.write_function_def(&self.program.function, out)?;
        Ok(())
    }

    fn write_function_def(&self, function: &asm::FunctionDef, out: &mut impl io::Write) -> Result<(), EmitError> {
        let name = self.format_identifier(function.name);
        writeln!(out, "\t.globl _{name}")?;
        writeln!(out, "_{name} :")?;
        writeln!(out, "\tpushq\t%rbp")?;
        writeln!(out, "\tmovq\t%rsp, %rbp")?;

        for instr in &function.instructions {
            self.write_instruction(*instr, out)?;
        }

        Ok(())
    }

    pub(crate) fn format_identifier(&self, identifier: shared_context::Identifier) -> &'a str {
        self.interner.lookup(identifier.get_symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_context::{Bump, CompilerContext};

    fn emit(src: &str) -> String {
        let arena = Bump::new();
        let mut ctx = CompilerContext::new(&arena, "test.c", src);
        let lex = lexer::Lexer::new(src);
        let ast = parser::parse(lex, &mut ctx).expect("parse failed");
        let tacky = ir_gen::lower_to_tacky(ast, &mut ctx.interner).expect("lowering failed");
        let asm_program = codegen::codegen(tacky);

        let emitter = Emitter::new(asm_program, &ctx.interner);
        let mut out = Vec::new();
        emitter.write_program(&mut out).expect("write failed");
        String::from_utf8(out).expect("emitted non-utf8 output")
    }

    #[test]
    fn emits_macos_function_symbol_with_leading_underscore() {
        let asm = emit("int main(void) { return 0; }");
        assert!(asm.contains(".globl _main"));
        assert!(asm.contains("_main :"));
    }

    #[test]
    fn emits_frame_prologue_and_epilogue() {
        let asm = emit("int main(void) { return 0; }");
        assert!(asm.contains("pushq\t%rbp"));
        assert!(asm.contains("movq\t%rsp, %rbp"));
        assert!(asm.contains("movq\t%rbp, %rsp"));
        assert!(asm.contains("popq\t%rbp"));
        assert!(asm.contains("ret"));
    }

    #[test]
    fn emits_bare_l_prefixed_local_labels() {
        let asm = emit("int main(void) { return 1 && 0; }");
        assert!(asm.contains("\tjmp\tL"));
        assert!(!asm.contains(".L"));
    }

    #[test]
    fn emits_negative_stack_offsets_below_rbp() {
        let asm = emit("int main(void) { int a = 1; int b = 2; return a + b; }");
        assert!(asm.contains("-4(%rbp)"));
        assert!(asm.contains("-8(%rbp)"));
    }
}

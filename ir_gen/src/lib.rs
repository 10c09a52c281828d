// IR generator: lowers the parsed AST into the flattened "Tacky"
// three-address-code representation that codegen consumes.

pub mod tacky;
use parser::ast;
use shared_context::{Identifier, interner::Interner};

mod gen_expressions;
mod gen_statements;
pub mod print_ir;

/// An unreachable-by-construction case reached during lowering, e.g. a
/// short-circuit operator surviving into the plain binary-op path. Never
/// raised by a well-formed tree; kept as a `Result::Err` rather than a
/// `panic!` so a malformed tree can't crash the process.
#[derive(Debug)]
pub struct InternalError {
    message: String,
}

impl InternalError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl std::fmt::Display for InternalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for InternalError {}

/// Entry point: consumes an AST and produces a tacky program.
pub fn lower_to_tacky(program: ast::Program, interner: &mut Interner) -> Result<tacky::Program, InternalError> {
    let mut ir_gen = IRgen::new(interner);
    ir_gen.gen_tacky(program)
}

/// Owns the per-compilation counter used to generate fresh temporary
/// variable and label names. A single `IRgen` is created per compilation
/// and dropped once lowering finishes.
pub struct IRgen<'src, 'ctx> {
    var_counter: usize,
    interner: &'ctx mut Interner<'src>,
}

impl<'src, 'ctx> IRgen<'src, 'ctx> {
    pub fn new(interner: &'ctx mut Interner<'src>) -> Self {
        Self {
            var_counter: 0,
            interner,
        }
    }

    /// Creates a fresh temporary variable (`0`, `1`, `2`, …).
    fn make_temp_var(&mut self) -> tacky::Value {
        let name = self.var_counter.to_string();
        self.var_counter += 1;
        let symbol = self.interner.intern(&name);
        tacky::Value::Var(Identifier::new(symbol, 0))
    }

    /// Creates a fresh label with the given prefix, e.g. `make_label("false")`
    /// produces `_false3`.
    fn make_label(&mut self, prefix: &str) -> Identifier {
        let name = format!("_{prefix}{}", self.var_counter);
        self.var_counter += 1;
        let symbol = self.interner.intern(&name);
        Identifier::new(symbol, 0)
    }

    pub fn gen_tacky(&mut self, program: ast::Program) -> Result<tacky::Program, InternalError> {
        let function = self.gen_function_def(program.function)?;
        Ok(tacky::Program::new(function))
    }

    fn gen_function_def(&mut self, function: ast::FunctionDef) -> Result<tacky::FunctionDef, InternalError> {
        let identifier = function.name.get_identifier();

        let mut instructions = Vec::new();
        self.gen_function_block(function.body, &mut instructions)?;

        Ok(tacky::FunctionDef::new(identifier, instructions))
    }

    /// Lowers the function body, appending an implicit `return 0` if control
    /// can fall off the end without an explicit `return` statement.
    fn gen_function_block(
        &mut self,
        block: ast::Block,
        instructions: &mut Vec<tacky::Instruction>,
    ) -> Result<(), InternalError> {
        let mut ends_in_return = false;
        for item in block.items {
            ends_in_return = matches!(
                &item,
                ast::BlockItem::S(stmt) if matches!(stmt.kind, ast::StatementKind::Return(_))
            );
            self.gen_block_item(item, instructions)?;
        }

        if !ends_in_return {
            instructions.push(tacky::Instruction::Return(tacky::Value::Constant(0)));
        }
        Ok(())
    }

    fn gen_block_item(
        &mut self,
        item: ast::BlockItem,
        instructions: &mut Vec<tacky::Instruction>,
    ) -> Result<(), InternalError> {
        match item {
            ast::BlockItem::D(decl) => self.gen_declaration(decl, instructions),
            ast::BlockItem::S(stmt) => self.gen_statement(stmt, instructions),
        }
    }

    fn gen_declaration(
        &mut self,
        decl: ast::Declaration,
        instructions: &mut Vec<tacky::Instruction>,
    ) -> Result<(), InternalError> {
        if let Some(init) = decl.init {
            let value = self.gen_expression(init, instructions)?;
            instructions.push(tacky::Instruction::Copy {
                src: value,
                dst: tacky::Value::Var(decl.name.get_identifier()),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_context::{Bump, CompilerContext};
    use tacky::Instruction;

    fn lower(src: &str) -> tacky::Program {
        let arena = Bump::new();
        let mut ctx = CompilerContext::new(&arena, "test.c", src);
        let lexer = lexer::Lexer::new(src);
        let program = parser::parse(lexer, &mut ctx).expect("expected successful parse");
        lower_to_tacky(program, &mut ctx.interner).expect("expected successful lowering")
    }

    #[test]
    fn appends_implicit_return_zero() {
        let tacky = lower("int main(void) { int x = 1; }");
        assert!(matches!(
            tacky.function.instructions.last(),
            Some(Instruction::Return(tacky::Value::Constant(0)))
        ));
    }

    #[test]
    fn explicit_return_is_not_duplicated() {
        let tacky = lower("int main(void) { return 5; }");
        let returns = tacky
            .function
            .instructions
            .iter()
            .filter(|i| matches!(i, Instruction::Return(_)))
            .count();
        assert_eq!(returns, 1);
    }

    #[test]
    fn short_circuit_and_emits_two_jump_if_zero(){
        let tacky = lower("int main(void) { return 1 && 2; }");
        let jz_count = tacky
            .function
            .instructions
            .iter()
            .filter(|i| matches!(i, Instruction::JumpIfZero(_, _)))
            .count();
        assert_eq!(jz_count, 2);
    }
}

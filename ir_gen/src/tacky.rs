// The compiler's three-address-code intermediate representation ("Tacky"):
// a flattened, instruction-based form that sits between the AST and the
// assembly tree, with every intermediate value named explicitly.

mod instructions;
pub use instructions::{BinaryOP, Instruction, UnaryOP, Value};
use shared_context::Identifier;

/// `Program(function)` — this subset compiles exactly one function.
pub struct Program {
    pub function: FunctionDef,
}

impl Program {
    pub fn new(function: FunctionDef) -> Self {
        Self { function }
    }
}

pub struct FunctionDef {
    pub name: Identifier,
    pub instructions: Vec<Instruction>,
}

impl FunctionDef {
    pub fn new(name: Identifier, instructions: Vec<Instruction>) -> Self {
        Self { name, instructions }
    }
}

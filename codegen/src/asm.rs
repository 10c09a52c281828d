// The assembly-level tree: still target-independent in the sense that
// pseudo-registers haven't been assigned real locations yet, but otherwise
// shaped like the x86-64 instructions the emitter will print.

use shared_context::Identifier;

/// `Program(function)` — one function, matching the source language subset.
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

#[derive(Clone, Copy, Debug)]
pub enum Instruction {
    Mov { src: Operand, dst: Operand },
    Unary { op: UnaryOP, dst: Operand },
    Binary { op: BinaryOP, src: Operand, dst: Operand },
    Cmp { src: Operand, dst: Operand },
    Idiv(Operand),
    Cdq,
    Jmp(Identifier),
    JmpCC(Cond, Identifier),
    SetCC(Cond, Operand),
    Label(Identifier),
    AllocateStack(i32),
    Ret,
}

#[derive(Clone, Copy, Debug)]
pub enum Cond {
    E,
    NE,
    G,
    GE,
    L,
    LE,
}

#[derive(Clone, Copy, Debug)]
pub enum Operand {
    Reg(Register),
    Pseudo(Identifier),
    Stack(i32),
    Immediate(i32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Register {
    AX,
    DX,
    R10,
    R11,
}

#[derive(Clone, Copy, Debug)]
pub enum BinaryOP {
    Add,
    Sub,
    Mul,
}

#[derive(Clone, Copy, Debug)]
pub enum UnaryOP {
    Not,
    Neg,
}

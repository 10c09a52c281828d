use crate::ast::*;
use shared_context::CompilerContext;

/// Debug-only pretty printer for the `--parse` driver flag.
pub struct DebuggingPrinter;

impl DebuggingPrinter {
    pub fn print(program: &Program, ctx: &CompilerContext) {
        println!("Program(");
        Self::print_function(&program.function, 4, ctx);
        println!(")");
    }

    fn print_function(function: &FunctionDef, indent: usize, ctx: &CompilerContext) {
        let pad = " ".repeat(indent);
        let name = ctx.interner.lookup(function.name.get_identifier().get_symbol());
        println!("{pad}Function(");
        println!("{pad}    name=\"{name}\",");
        println!("{pad}    body=");
        Self::print_block(&function.body, indent + 8, ctx);
        println!("{pad})");
    }

    fn print_block(block: &Block, indent: usize, ctx: &CompilerContext) {
        for item in &block.items {
            Self::print_block_item(item, indent, ctx);
        }
    }

    fn print_block_item(item: &BlockItem, indent: usize, ctx: &CompilerContext) {
        match item {
            BlockItem::D(decl) => Self::print_declaration(decl, indent, ctx),
            BlockItem::S(stmt) => Self::print_statement(stmt, indent, ctx),
        }
    }

    fn print_declaration(decl: &Declaration, indent: usize, ctx: &CompilerContext) {
        let pad = " ".repeat(indent);
        let name = ctx.interner.lookup(decl.name.get_identifier().get_symbol());
        println!("{pad}Declare({name})");
        if let Some(init) = &decl.init {
            Self::print_expr(init, indent + 4, ctx);
        }
    }

    fn print_statement(stmt: &Statement, indent: usize, ctx: &CompilerContext) {
        let pad = " ".repeat(indent);
        match &stmt.kind {
            StatementKind::Return(expr) => {
                println!("{pad}Return(");
                Self::print_expr(expr, indent + 4, ctx);
                println!("{pad})");
            }
            StatementKind::ExprStatement(expr) => {
                Self::print_expr(expr, indent, ctx);
            }
            StatementKind::Null => {
                println!("{pad}Null");
            }
        }
    }

    fn print_expr(expr: &Expression, indent: usize, ctx: &CompilerContext) {
        let pad = " ".repeat(indent);
        match &expr.kind {
            ExpressionKind::Constant(value) => println!("{pad}Constant({value})"),
            ExpressionKind::Var(name) => {
                let name = ctx.interner.lookup(name.get_identifier().get_symbol());
                println!("{pad}Var({name})");
            }
            ExpressionKind::Unary { operator, operand } => {
                println!("{pad}Unary({operator:?})");
                Self::print_expr(operand, indent + 4, ctx);
            }
            ExpressionKind::Binary {
                operator,
                operand1,
                operand2,
            } => {
                println!("{pad}Binary({operator:?})");
                Self::print_expr(operand1, indent + 4, ctx);
                Self::print_expr(operand2, indent + 4, ctx);
            }
            ExpressionKind::Assignment { lvalue, rvalue } => {
                println!("{pad}Assign");
                Self::print_expr(lvalue, indent + 4, ctx);
                Self::print_expr(rvalue, indent + 4, ctx);
            }
        }
    }
}

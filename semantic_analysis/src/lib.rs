use parser::ast::{BlockItem, Declaration, Expression, ExpressionKind, Program, Statement, StatementKind};
use shared_context::source_map::SourceMap;

pub mod semantic_error;

use semantic_error::{ErrorType, SemanticErr};

/// Walks the AST checking that every assignment's left-hand side is a plain
/// variable. This subset's grammar makes that the only semantic error a
/// syntactically valid program can still contain — there is a single scope
/// (the function body) so no identifier-resolution pass is needed, and
/// there is only one type so no type-checking pass is needed either.
pub fn analyze(program: &Program, source_map: &SourceMap) -> Result<(), SemanticErr> {
    for item in &program.function.body.items {
        check_block_item(item, source_map)?;
    }
    Ok(())
}

fn check_block_item(item: &BlockItem, source_map: &SourceMap) -> Result<(), SemanticErr> {
    match item {
        BlockItem::D(decl) => check_declaration(decl, source_map),
        BlockItem::S(stmt) => check_statement(stmt, source_map),
    }
}

fn check_declaration(decl: &Declaration, source_map: &SourceMap) -> Result<(), SemanticErr> {
    match &decl.init {
        Some(expr) => check_expression(expr, source_map),
        None => Ok(()),
    }
}

fn check_statement(stmt: &Statement, source_map: &SourceMap) -> Result<(), SemanticErr> {
    match &stmt.kind {
        StatementKind::Return(expr) | StatementKind::ExprStatement(expr) => {
            check_expression(expr, source_map)
        }
        StatementKind::Null => Ok(()),
    }
}

fn check_expression(expr: &Expression, source_map: &SourceMap) -> Result<(), SemanticErr> {
    match &expr.kind {
        ExpressionKind::Constant(_) | ExpressionKind::Var(_) => Ok(()),
        ExpressionKind::Unary { operand, .. } => check_expression(operand, source_map),
        ExpressionKind::Binary {
            operand1, operand2, ..
        } => {
            check_expression(operand1, source_map)?;
            check_expression(operand2, source_map)
        }
        ExpressionKind::Assignment { lvalue, rvalue } => {
            if !matches!(lvalue.kind, ExpressionKind::Var(_)) {
                return Err(SemanticErr::new(
                    ErrorType::InvalidLeftValue(lvalue.span),
                    source_map,
                ));
            }
            check_expression(lvalue, source_map)?;
            check_expression(rvalue, source_map)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_context::{Bump, CompilerContext};

    fn check(src: &str) -> Result<(), String> {
        let arena = Bump::new();
        let mut ctx = CompilerContext::new(&arena, "test.c", src);
        let lexer = lexer::Lexer::new(src);
        let program = parser::parse(lexer, &mut ctx).expect("expected successful parse");
        analyze(&program, &ctx.source_map).map_err(|e| e.to_string())
    }

    #[test]
    fn accepts_assignment_to_variable() {
        assert!(check("int main(void) { int x = 0; x = 1; return x; }").is_ok());
    }

    #[test]
    fn rejects_assignment_to_non_variable() {
        assert!(check("int main(void) { int x = 0; 1 = x; return x; }").is_err());
    }

    #[test]
    fn rejects_assignment_to_constant_expression() {
        assert!(check("int main(void) { int x = 0; (x + 1) = 2; return x; }").is_err());
    }
}

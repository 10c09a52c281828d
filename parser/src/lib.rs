pub mod ast;
pub mod parser;
pub mod print_ast;

pub use parser::parse_err::ParseErr;
use shared_context::CompilerContext;

/// Parses a full translation unit into a [`ast::Program`].
pub fn parse<'a>(
    lexer: lexer::Lexer<'a>,
    ctx: &mut CompilerContext<'a>,
) -> Result<ast::Program, ParseErr> {
    let mut parser = parser::Parser::new(lexer, ctx);
    parser.parse_program()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ast::{BlockItem, ExpressionKind, StatementKind};
    use shared_context::Bump;

    fn parse_source<'a>(arena: &'a Bump, ctx: &mut CompilerContext<'a>, src: &'a str) -> ast::Program {
        let lexer = lexer::Lexer::new(src);
        parse(lexer, ctx).expect("expected successful parse")
    }

    #[test]
    fn parses_minimal_return() {
        let arena = Bump::new();
        let mut ctx = CompilerContext::new(&arena, "test.c", "int main(void) { return 2; }");
        let program = parse_source(&arena, &mut ctx, "int main(void) { return 2; }");
        assert_eq!(program.function.body.items.len(), 1);
        match &program.function.body.items[0] {
            BlockItem::S(stmt) => match &stmt.kind {
                StatementKind::Return(expr) => {
                    assert!(matches!(expr.kind, ExpressionKind::Constant(2)));
                }
                _ => panic!("expected a return statement"),
            },
            _ => panic!("expected a statement, got a declaration"),
        }
    }

    #[test]
    fn parses_declaration_with_initializer_and_assignment() {
        let arena = Bump::new();
        let src = "int main(void) { int x = 1; x = x + 2; return x; }";
        let mut ctx = CompilerContext::new(&arena, "test.c", src);
        let program = parse_source(&arena, &mut ctx, src);
        assert_eq!(program.function.body.items.len(), 3);
        assert!(matches!(program.function.body.items[0], BlockItem::D(_)));
    }

    #[test]
    fn rejects_missing_semicolon() {
        let arena = Bump::new();
        let src = "int main(void) { return 1 }";
        let mut ctx = CompilerContext::new(&arena, "test.c", src);
        let lexer = lexer::Lexer::new(src);
        assert!(parse(lexer, &mut ctx).is_err());
    }
}

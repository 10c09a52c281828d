use crate::files::*;
use emitter::Emitter;
use shared_context::Bump;
use shared_context::CompilerContext;
use std::{error::Error, fs};

/// lex the program then exit without starting the other stages
pub fn lexer_stage(file_path: &str, file_name: &str) -> Result<(), Box<dyn Error>> {
    let input_string = fs::read_to_string(file_path)?;
    let arena = Bump::new();
    let ctx = CompilerContext::new(&arena, file_name, &input_string);
    let mut lexer = lexer::Lexer::new(&input_string);

    while let Some(tok) = lexer.next(&ctx.source_map) {
        let tok = tok?;
        println!("matched string: {}, token type: {:?}", tok.get_lexeme(), tok.get_token());
    }

    Ok(())
}

pub fn parser_stage(file_path: &str, file_name: &str) -> Result<(), Box<dyn Error>> {
    let input_string = fs::read_to_string(file_path)?;
    let arena = Bump::new();
    let mut ctx = CompilerContext::new(&arena, file_name, &input_string);

    let lexer = lexer::Lexer::new(&input_string);
    let program_ast = parser::parse(lexer, &mut ctx)?;
    semantic_analysis::analyze(&program_ast, &ctx.source_map)?;

    parser::print_ast::DebuggingPrinter::print(&program_ast, &ctx);

    Ok(())
}

pub fn tacky_stage(file_path: &str, file_name: &str) -> Result<(), Box<dyn Error>> {
    let input_string = fs::read_to_string(file_path)?;
    let arena = Bump::new();
    let mut ctx = CompilerContext::new(&arena, file_name, &input_string);

    let lexer = lexer::Lexer::new(&input_string);
    let program_ast = parser::parse(lexer, &mut ctx)?;
    semantic_analysis::analyze(&program_ast, &ctx.source_map)?;

    let program_tacky = ir_gen::lower_to_tacky(program_ast, &mut ctx.interner)?;
    ir_gen::print_ir::DebuggingPrinter::print(&program_tacky, &ctx);

    Ok(())
}

pub fn codegen_stage(file_path: &str, file_name: &str) -> Result<(), Box<dyn Error>> {
    let input_string = fs::read_to_string(file_path)?;
    let arena = Bump::new();
    let mut ctx = CompilerContext::new(&arena, file_name, &input_string);

    let lexer = lexer::Lexer::new(&input_string);
    let program_ast = parser::parse(lexer, &mut ctx)?;
    semantic_analysis::analyze(&program_ast, &ctx.source_map)?;

    let program_tacky = ir_gen::lower_to_tacky(program_ast, &mut ctx.interner)?;
    let program_asm = codegen::codegen(program_tacky);
    codegen::DebuggingPrinter::print(&program_asm, &ctx);

    Ok(())
}

/// run the full pipeline and write the resulting assembly to a `.s` file
/// next to the source, returning its path
pub fn emit_assembly(file_path: &str, file_name: &str) -> Result<String, Box<dyn Error>> {
    let input_string = fs::read_to_string(file_path)?;
    let arena = Bump::new();
    let mut ctx = CompilerContext::new(&arena, file_name, &input_string);

    let lexer = lexer::Lexer::new(&input_string);
    let program_ast = parser::parse(lexer, &mut ctx)?;
    semantic_analysis::analyze(&program_ast, &ctx.source_map)?;

    let program_tacky = ir_gen::lower_to_tacky(program_ast, &mut ctx.interner)?;
    let program_asm = codegen::codegen(program_tacky);

    let asm_file_name = format!("{}.s", remove_file_extension(file_name));
    let output_path = set_file_name(file_path, &asm_file_name);

    let mut output_file = fs::File::create(&output_path)?;
    Emitter::new(program_asm, &ctx.interner).write_program(&mut output_file)?;

    Ok(output_path)
}

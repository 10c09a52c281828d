use clap::Parser;
use colored::Colorize;
use std::process;

mod files;
mod stages;

use files::*;

#[derive(Parser)]
#[command(about = "compiles a restricted subset of C to x86-64 assembly")]
struct Cli {
    /// lex the program and print the token stream, then stop
    #[arg(long, group = "stage")]
    lex: bool,

    /// lex and parse the program and print the AST, then stop
    #[arg(long, group = "stage")]
    parse: bool,

    /// run the pipeline through Tacky IR generation and print it, then stop
    #[arg(long, group = "stage")]
    tacky: bool,

    /// run the pipeline through assembly generation and print it, then stop
    #[arg(long, group = "stage")]
    codegen: bool,

    /// emit the `.s` assembly file but don't assemble or link it
    #[arg(short = 'S', group = "stage")]
    emit_assembly_only: bool,

    file_path: std::path::PathBuf,
}

fn main() {
    let args = Cli::parse();
    let file_path = args.file_path.to_string_lossy().into_owned();

    if let Err(err) = run(&args, &file_path) {
        eprintln!("{}: {}", "error".red().bold(), err);
        process::exit(1);
    }
}

fn run(args: &Cli, file_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let preprocessed_path = pre_process_file(file_path);
    let file_name = get_file_name(file_path);
    let result = dispatch(args, &preprocessed_path, file_name);
    delete_file(&preprocessed_path);
    result
}

fn dispatch(args: &Cli, preprocessed_path: &str, file_name: &str) -> Result<(), Box<dyn std::error::Error>> {
    if args.lex {
        return stages::lexer_stage(preprocessed_path, file_name);
    }
    if args.parse {
        return stages::parser_stage(preprocessed_path, file_name);
    }
    if args.tacky {
        return stages::tacky_stage(preprocessed_path, file_name);
    }
    if args.codegen {
        return stages::codegen_stage(preprocessed_path, file_name);
    }

    let assembly_path = stages::emit_assembly(preprocessed_path, file_name)?;

    if args.emit_assembly_only {
        return Ok(());
    }

    let executable_path = remove_file_extension(&assembly_path);
    compile_assembly_file(&assembly_path, executable_path);
    delete_file(&assembly_path);

    Ok(())
}

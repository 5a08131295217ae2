use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use bumpalo::Bump;
use clap::Parser;
use miette::{IntoDiagnostic, Result, WrapErr};
use tally::render_error;
use tally_core::{
    api::{Engine, EngineOptions},
    scanner::{self, TokenKind},
};
use tracing::debug;

/// Tally - evaluate `let` declarations of integer arithmetic
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Evaluate a tally program and print every declared variable", long_about = None)]
struct Args {
    /// Print the token stream (for debugging)
    #[arg(long)]
    debug_tokens: bool,

    /// Print the parsed declarations with explicit grouping (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// Program text to evaluate instead of reading a file
    #[arg(short, long, conflicts_with = "path")]
    expression: Option<String>,

    /// Program file to evaluate (`-` or nothing reads stdin)
    path: Option<PathBuf>,
}

fn read_program(args: &Args) -> Result<String> {
    if let Some(expr) = &args.expression {
        return Ok(expr.clone());
    }

    match &args.path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to read {}", path.display())),
        _ => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .into_diagnostic()
                .wrap_err("failed to read program from stdin")?;
            Ok(source)
        }
    }
}

fn print_tokens(source: &str) {
    // Scan errors are reported by the compile step that follows.
    let Ok(tokens) = scanner::scan(source) else {
        return;
    };

    println!("=== Tokens ===");
    for token in &tokens {
        match token.kind {
            TokenKind::Eof => println!("{:>4}  {}", token.line, token.kind),
            _ => println!(
                "{:>4}  {:<24} {:?}",
                token.line,
                token.kind.to_string(),
                token.lexeme(source)
            ),
        }
    }
    println!();
}

fn interpret(source: &str, args: &Args) -> bool {
    let arena = Bump::new();
    let engine = Engine::new(EngineOptions::default());

    if args.debug_tokens {
        print_tokens(source);
    }

    let program = match engine.compile(&arena, source) {
        Ok(program) => program,
        Err(e) => {
            render_error(&e);
            return false;
        }
    };

    if args.debug_parse {
        println!("=== Parsed declarations ===");
        for decl in program.decls {
            println!("{}", decl);
        }
        println!();
    }

    match engine.execute(&program) {
        Ok(bindings) => {
            for binding in &bindings {
                println!("{}", binding);
            }
            true
        }
        Err(e) => {
            render_error(&e);
            false
        }
    }
}

fn init_logging() -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt};

    // Use TALLY_LOG or RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_env("TALLY_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging()?;

    let source = read_program(&args)?;
    debug!(bytes = source.len(), "read program");

    if interpret(&source, &args) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

use std::fs;

use clap::{Parser, Subcommand};

use micro_code::error::InterpretError;
use micro_code::interpreter::Interpreter;
use micro_code::parser;

#[derive(Parser)]
#[command(name = "micro-code")]
#[command(about = "Interpreter for a tiny imperative command language", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Выполняет программу
    Run {
        /// Исходник
        code: String,

        /// Файл входных значений, одно целое на строку
        #[arg(short, long)]
        input: Option<String>,

        /// Показать ast перед выполнением
        #[arg(long)]
        show_ast: bool,
    },

    /// Распарсить и показать ast без выполнения
    Parse {
        /// Исходник
        input: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            code,
            input,
            show_ast,
        } => {
            let source = fs::read_to_string(&code)?;
            let inputs = match input {
                Some(path) => read_inputs(&path)?,
                None => Vec::new(),
            };

            let program = parser::parse(&source)?;

            if show_ast {
                println!("=== AST ===");
                println!("{:#?}", program);
            }

            let mut interpreter = Interpreter::new(inputs);
            for value in interpreter.run(&program)? {
                println!("{}", value);
            }
        }
        Commands::Parse { input } => {
            println!("Parsing {}...", input);

            let source = fs::read_to_string(&input)?;

            println!("=== SOURCE ===");
            println!("{}", source);
            println!("=== TOKENS ===");

            let tokens = parser::lexer::tokenize(&source)?;
            for token in &tokens {
                println!("{:?}", token);
            }

            println!("=== AST ===");
            match parser::parse(&source) {
                Ok(program) => {
                    println!("{:#?}", program);
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                }
            }
        }
    }

    Ok(())
}

/// Читает входную последовательность: одно целое на строку,
/// пустые строки пропускаются
fn read_inputs(path: &str) -> Result<Vec<i64>, InterpretError> {
    let text = fs::read_to_string(path)?;
    let mut inputs = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value = line.parse().map_err(|_| InterpretError::InvalidInput {
            line: index + 1,
            value: line.to_string(),
        })?;
        inputs.push(value);
    }

    Ok(inputs)
}

use std::{env, fs::read_to_string, process::ExitCode, time::Instant};

use lilt::{display_error, lexer::lexer::tokenize, parser::parser::parse};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let (file_path, dump_tokens) = match args.len() {
        2 => (args[1].as_str(), false),
        3 if args[2] == "--tokens" => (args[1].as_str(), true),
        _ => {
            eprintln!("usage: lilt <file> [--tokens]");
            return ExitCode::FAILURE;
        }
    };

    let file_name = file_path.rsplit('/').next().unwrap_or(file_path);

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("failed to read {}: {}", file_path, error);
            return ExitCode::FAILURE;
        }
    };

    if dump_tokens {
        let start = Instant::now();
        for token in tokenize(&source) {
            println!("{}", token);
        }
        println!("Tokenized in {:?}", start.elapsed());
    }

    let start = Instant::now();
    let (parser, program) = parse(&source);
    println!("Parsed in {:?}", start.elapsed());

    let program = match program {
        Ok(program) => program,
        Err(error) => {
            display_error(&source, file_name, &error);
            return ExitCode::FAILURE;
        }
    };

    println!(
        "{}: {} statements, {} bindings",
        file_name,
        program.statements.len(),
        parser.scope().len()
    );

    ExitCode::SUCCESS
}

use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use clap::Parser;
use frontend::{
    display_error,
    errors::errors::Error,
    lexer::{
        interchange::{parse_records, write_token_file},
        lexer::{tokenize_with_policy, LexPolicy},
    },
    parser::parser::parse,
};

/// Tokenize a source file and check it against the class grammar.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Source file, or a token file when `--from-tokens` is given
    path: PathBuf,

    /// Read `<line,category,lexeme>` records instead of source text
    #[arg(long)]
    from_tokens: bool,

    /// Write the token stream to this file as `<line,category,lexeme>` records
    #[arg(long, value_name = "PATH")]
    emit_tokens: Option<PathBuf>,

    /// Stop at the first invalid token instead of passing it to the parser
    #[arg(long)]
    strict: bool,

    /// Only tokenize; skip syntax analysis
    #[arg(long)]
    tokens_only: bool,
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn report(error: &Error, content: &str, path: &Path) {
    eprint!("{}", display_error(error, content, path));
}

fn run(args: &Args) -> Result<bool, Error> {
    let content = read_to_string(&args.path).map_err(|err| Error::io(&args.path, err))?;
    let start = Instant::now();

    let tokens = if args.from_tokens {
        let records = parse_records(&content);
        for skipped in &records.skipped {
            eprintln!("Skipping {}", skipped);
        }
        records.tokens
    } else {
        let policy = if args.strict {
            LexPolicy::AbortOnInvalid
        } else {
            LexPolicy::CollectInvalid
        };
        match tokenize_with_policy(&content, policy) {
            Ok(tokens) => tokens,
            Err(error) => {
                report(&error, &content, &args.path);
                return Ok(false);
            }
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    if let Some(out) = &args.emit_tokens {
        write_token_file(out, &tokens)?;
        println!("Tokens written to {}", out.display());
    }

    if args.tokens_only {
        for token in &tokens {
            println!("{}", token);
        }
        return Ok(true);
    }

    let parse_start = Instant::now();
    let result = parse(tokens);
    println!("Parsed in {:?}", parse_start.elapsed());

    if result.accepted {
        println!("Parsing successful");
        return Ok(true);
    }

    for diagnostic in result.diagnostics {
        eprintln!("{}", diagnostic);
        if !args.from_tokens {
            report(&Error::from(diagnostic), &content, &args.path);
        }
    }
    eprintln!("Parsing failed");

    Ok(false)
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("Error: {}", error);
            ExitCode::FAILURE
        }
    }
}

use std::{
    env,
    fs::read_to_string,
    io::{self, Read},
    process::ExitCode,
    time::Instant,
};

use stmtlang::{
    lexer::lexer::Lexer,
    parser::{config::ParserConfig, parser::parse},
};
use tracing::{info, Level};

struct Args {
    file: String,
    max_depth: Option<usize>,
    verbosity: u8,
    show_tree: bool,
    show_idents: bool,
}

fn usage() -> String {
    String::from("usage: stmtlang [-v|-vv] [--tree] [--idents] [--max-depth N] <file | ->")
}

fn parse_args() -> Result<Args, String> {
    let mut file = None;
    let mut max_depth = None;
    let mut verbosity = 0;
    let mut show_tree = false;
    let mut show_idents = false;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-v" => verbosity = 1,
            "-vv" => verbosity = 2,
            "--tree" => show_tree = true,
            "--idents" => show_idents = true,
            "--max-depth" => {
                let value = args.next().ok_or_else(usage)?;
                let depth = value
                    .parse::<usize>()
                    .map_err(|_| format!("invalid --max-depth value: {}", value))?;
                max_depth = Some(depth);
            }
            _ if file.is_none() => file = Some(arg),
            _ => return Err(usage()),
        }
    }

    Ok(Args {
        file: file.ok_or_else(usage)?,
        max_depth,
        verbosity,
        show_tree,
        show_idents,
    })
}

fn read_source(file: &str) -> io::Result<String> {
    if file == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        read_to_string(file)
    }
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::from(2);
        }
    };

    let level = match args.verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let source = match read_source(&args.file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("failed to read {}: {}", args.file, e);
            return ExitCode::from(2);
        }
    };

    let mut config = ParserConfig::default();
    if let Some(depth) = args.max_depth {
        config = config.with_max_depth(depth);
    }

    let start = Instant::now();
    let (parser, result) = parse(Lexer::new(source), config);
    info!("parsed {} in {:?}", args.file, start.elapsed());

    if args.show_idents {
        let mut identifiers: Vec<_> = parser.identifiers().iter().collect();
        identifiers.sort();

        for (name, count) in identifiers {
            println!("{}: {}", name, count);
        }
    }

    match result {
        Ok(tree) => {
            if args.show_tree {
                print!("{}", tree);
            }
            ExitCode::SUCCESS
        }
        Err(failure) => {
            eprintln!("{}", failure);
            ExitCode::FAILURE
        }
    }
}

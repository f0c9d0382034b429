use std::{fs::{self, File}, io::{self, Read, Write}, path::Path, process};

use clap::Parser;
use geodsl::{analyse, Code, CoordinateTable, Grid, TokenStream};

/// Compiles Ukrainian geometry commands into a drawing.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// File with commands, "-" or nothing reads standard input
    input: Option<String>,

    /// Where the exported drawing program is written
    #[arg(short, long, default_value = "drawing.rs")]
    output: String,

    /// Parse and analyze only, export nothing
    #[arg(long)]
    check: bool,

    /// Seed for generated coordinates
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(i32).range(1..))]
    width: i32,

    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(i32).range(1..))]
    height: i32,

    /// Pixels between neighbouring grid lines
    #[arg(long, default_value_t = 40, value_parser = clap::value_parser!(i32).range(1..))]
    spacing: i32,

    /// Print the classified tokens before compiling
    #[arg(long)]
    tokens: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let (text, path) = match read_input(args.input.as_deref()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };

    if args.tokens {
        for t in analyse(&text) {
            println!("{}", t);
        }
    }

    let table = match args.seed {
        Some(seed) => CoordinateTable::seeded(seed),
        None => CoordinateTable::new(),
    };
    let grid = Grid::new(args.width, args.height, args.spacing);
    let ts = TokenStream::new(&text, path);

    let result = if args.check {
        Code::new(ts, Box::new(io::sink()))
            .with_table(table)
            .with_grid(grid)
            .check()
    } else {
        let output: Box<dyn Write> = match File::create(&args.output) {
            Ok(f) => Box::new(f),
            Err(e) => {
                eprintln!("Failed to create {}: {}.", args.output, e);
                process::exit(2);
            }
        };

        Code::new(ts, output)
            .with_table(table)
            .with_grid(grid)
            .compile()
    };

    match result {
        Ok(compilation) => {
            print!("{}", compilation.drawing.tree.tree());
            for e in compilation.errors.iter() {
                println!("{}", e);
            }

            if !args.check {
                log::info!(
                    "{} primitives written to {}",
                    compilation.drawing.primitives.len(), args.output
                );
            }
        },
        Err(e) => {
            eprintln!("Critical: {}", e);
            process::exit(1);
        }
    }
}

fn read_input(input: Option<&str>) -> Result<(String, Option<String>), String> {
    match input {
        None | Some("-") => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)
                .map_err(|e| format!("Error reading standard input: {}", e))?;
            Ok((text, None))
        },
        Some(name) => {
            let path = Path::new(name);
            if !path.exists() {
                return Err(format!("\"{}\" doesn't exist.", name));
            }

            if !path.is_file() {
                return Err(format!("\"{}\" is a directory.", name));
            }

            let text = fs::read_to_string(path)
                .map_err(|e| format!("Error reading input file: {}", e))?;
            Ok((text, Some(name.to_string())))
        }
    }
}

//! codetint - highlight source code as annotated HTML
//!
//! Reads a file (or stdin) and writes highlighted markup to stdout.

use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use tracing::{debug, error, Level};
use tracing_subscriber::EnvFilter;

use codetint::error::{Error, Result};
use codetint::{Config, Highlighter, HtmlDocument, PatternRegistry};

/// What the command line asked for
#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    language: Option<String>,
    html: bool,
    ansi: bool,
    config: Option<PathBuf>,
    file: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Highlight(Options),
    ListLanguages,
    Help,
    Version,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(Level::WARN.into())
                .from_env_lossy(),
        )
        .init();

    if let Err(e) = run() {
        error!(%e, "codetint failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    match parse_args(&args)? {
        Command::Help => print_usage(),
        Command::Version => println!("codetint {}", env!("CARGO_PKG_VERSION")),
        Command::ListLanguages => {
            for name in PatternRegistry::global().list_languages() {
                println!("{}", name);
            }
        }
        Command::Highlight(options) => highlight(options)?,
    }

    Ok(())
}

fn parse_args(args: &[String]) -> Result<Command> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-V" => return Ok(Command::Version),
            "--list-languages" => return Ok(Command::ListLanguages),
            "--html" => options.html = true,
            "--ansi" => options.ansi = true,
            "--language" | "-l" => {
                let value = iter
                    .next()
                    .ok_or_else(|| Error::Usage(format!("{} needs a language id", arg)))?;
                options.language = Some(value.clone());
            }
            "--config" | "-c" => {
                let value = iter
                    .next()
                    .ok_or_else(|| Error::Usage(format!("{} needs a path", arg)))?;
                options.config = Some(PathBuf::from(value));
            }
            "-" => options.file = None,
            other if other.starts_with('-') => {
                return Err(Error::Usage(format!("unknown option: {}", other)));
            }
            path => {
                if options.file.is_some() {
                    return Err(Error::Usage("only one input file is supported".to_string()));
                }
                options.file = Some(PathBuf::from(path));
            }
        }
    }

    if options.html && options.ansi {
        return Err(Error::Usage("--html and --ansi cannot be combined".to_string()));
    }

    Ok(Command::Highlight(options))
}

fn highlight(options: Options) -> Result<()> {
    let config = match &options.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    let input = read_input(options.file.as_ref())?;
    let highlighter = Highlighter::with_config(PatternRegistry::global(), &config);
    let language = options
        .language
        .as_deref()
        .unwrap_or(config.default_language.as_str());
    debug!(language, bytes = input.len(), "highlighting input");

    let output = if options.html {
        let mut document = HtmlDocument::parse(&input);
        highlighter.highlight_all(&mut document);
        document.to_html()
    } else if options.ansi {
        highlighter.highlight_ansi(&input, language, &config.theme())
    } else {
        highlighter.highlight(&input, language)
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => Error::FileNotFound(path.clone()),
            _ => Error::Io(err),
        }),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn print_usage() {
    println!("codetint {} - highlight source code as HTML", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: codetint [OPTIONS] [FILE]");
    println!();
    println!("Reads FILE (or stdin when absent or '-') and writes to stdout.");
    println!();
    println!("Options:");
    println!("  -l, --language ID   Language of the input (default from config, else 'text')");
    println!("      --html          Input is an HTML document; highlight every");
    println!("                      element with a language-<id> class in place");
    println!("      --ansi          Preview with terminal colors instead of HTML");
    println!("  -c, --config PATH   Read settings from PATH instead of ~/.codetint.toml");
    println!("      --list-languages");
    println!("                      List languages with their own keyword sets");
    println!("  -h, --help          Show this help message");
    println!("  -V, --version       Show version information");
    println!();
    println!("Logging goes to stderr; set RUST_LOG=debug for details.");
}

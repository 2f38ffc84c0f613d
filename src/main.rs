//! Local Code - command-line front end

use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use localcode::render::{display_column, TerminalSurface};
use localcode::{Config, EditorError, Result, Session};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let Some(command) = args.get(1) else {
        print_usage();
        return Ok(());
    };

    match command.as_str() {
        "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" => {
            print_version();
            Ok(())
        }
        "highlight" => {
            let path = file_arg(&args, 2)?;
            let mut session = open_session(&path)?;
            let mut surface = TerminalSurface::new(session.config.show_line_numbers);
            session.render_into(&mut surface);
            session.clear_message();
            surface.paint(session.document.text(), &mut io::stdout())?;
            println!();
            Ok(())
        }
        "find" => {
            let path = file_arg(&args, 2)?;
            let term = args
                .get(3)
                .ok_or_else(|| EditorError::Validation("Usage: localcode find <file> <term>".into()))?;
            let mut session = open_session(&path)?;
            let count = session.find(term);
            for &(start, _) in session.find.matches() {
                let (line, col) = session.document.offset_to_position(start);
                let text = session.document.line(line).unwrap_or_default();
                println!("{}:{}:{}: {}", path.display(), line + 1, display_column(text, col) + 1, text);
            }
            println!("{} matches", count);
            Ok(())
        }
        "run" => {
            let path = file_arg(&args, 2)?;
            let mut session = open_session(&path)?;
            if let Some(output) = session.run()? {
                print!("{}", output);
            }
            Ok(())
        }
        "new" => {
            let path = file_arg(&args, 2)?;
            let mut session = Session::new(Config::load())?;
            session.new_file(&path)?;
            if let Some(msg) = session.message() {
                println!("{}", msg);
            }
            Ok(())
        }
        other => Err(EditorError::Validation(format!(
            "Unknown command: {} (try --help)",
            other
        ))),
    }
}

fn file_arg(args: &[String], idx: usize) -> Result<PathBuf> {
    args.get(idx)
        .map(PathBuf::from)
        .ok_or_else(|| EditorError::Validation("Missing file argument (try --help)".into()))
}

fn open_session(path: &Path) -> Result<Session> {
    let mut session = Session::new(Config::load())?;
    session.open_file(path)?;
    Ok(session)
}

fn print_usage() {
    println!("Local Code {} - a minimal source-code editor core", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: localcode <COMMAND> [ARGS]");
    println!();
    println!("Commands:");
    println!("  highlight <file>      Print the file with syntax highlighting");
    println!("  find <file> <term>    List literal matches of <term>");
    println!("  run <file>            Run the file with the configured interpreter");
    println!("  new <file>            Create a file from the new-file template");
    println!();
    println!("Options:");
    println!("  -h, --help            Show this help message");
    println!("  -V, --version         Show version information");
    println!();
    println!("Settings are read from ~/.localcode.toml");
}

fn print_version() {
    println!("Local Code {}", env!("CARGO_PKG_VERSION"));
}

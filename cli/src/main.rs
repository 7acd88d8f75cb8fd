use std::error::Error;
use std::fs;
use std::io::{self, Read};

use clap::Parser;
use serde_json::Value;

#[derive(Parser, Debug)]
#[command(
    name = "jsonvet",
    version,
    about = "Duplicate-key vetting for JSON configuration text"
)]
struct Args {
    /// Input file path. Omit or use '-' to read from stdin.
    input: Option<String>,

    /// Also reject input that is not well-formed JSON.
    #[arg(long)]
    check_syntax: bool,

    /// Suppress the OK line on clean input.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();
    match run(&args) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("ERROR  {err}");
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<i32, Box<dyn Error>> {
    let (text, source) = read_input(args.input.as_deref())?;

    if args.check_syntax {
        if let Err(err) = serde_json::from_str::<Value>(&text) {
            eprintln!("{source}: not valid JSON: {err}");
            return Ok(1);
        }
    }

    if jsonvet::has_duplicate_keys(&text) {
        eprintln!(
            "{source}: duplicate keys detected; saving would silently keep only the last occurrence of each"
        );
        return Ok(2);
    }

    if !args.quiet {
        println!("{source}: no duplicate keys");
    }
    Ok(0)
}

fn read_input(arg: Option<&str>) -> Result<(String, String), Box<dyn Error>> {
    match arg {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok((buf, "<stdin>".to_string()))
        }
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|err| format!("{path}: {err}"))?;
            Ok((text, path.to_string()))
        }
    }
}

//! throwme CLI — inspect the HTTP error taxonomy from the terminal.
//!
//! Usage:
//! ```bash
//! # Print the taxonomy table
//! throwme list
//!
//! # Build a named-kind error with its default message
//! throwme build --kind not_found
//!
//! # Build with an explicit message, output as JSON
//! throwme build --kind validation --message "Email is invalid" --json
//!
//! # Build a custom error (message and status required)
//! throwme build --kind custom --status 418 --message "Custom Alert"
//! ```

use std::env;
use std::process;

use throwme_core::{throw, ErrorKind, HttpError};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "list" => cmd_list(&args[2..]),
        "build" => cmd_build(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("throwme {}", env!("CARGO_PKG_VERSION"));
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    println!("throwme {}", env!("CARGO_PKG_VERSION"));
    println!("Tagged HTTP errors from the terminal\n");
    println!("USAGE:");
    println!("    throwme <COMMAND>\n");
    println!("COMMANDS:");
    println!("    list      Print the taxonomy table");
    println!("    build     Construct an error and print it");
    println!("    version   Print version");
    println!("    help      Print this help\n");
    println!("BUILD FLAGS:");
    println!("    --kind <KIND>     Error kind (e.g. not_found, custom)  [required]");
    println!("    --message <MSG>   Message (named kinds default it; custom requires it)");
    println!("    --status <CODE>   Status code (custom only)");
    println!("    --json            Output as JSON");
}

fn cmd_list(args: &[String]) {
    let as_json = args.iter().any(|a| a == "--json");

    if as_json {
        let table: Vec<serde_json::Value> = ErrorKind::ALL
            .iter()
            .map(|k| {
                serde_json::json!({
                    "kind": k.as_str(),
                    "statusCode": k.status_code(),
                    "defaultMessage": k.default_message(),
                })
            })
            .collect();
        match serde_json::to_string_pretty(&table) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("JSON serialization error: {e}");
                process::exit(1);
            }
        }
        return;
    }

    println!("{:<22} {:<8} DEFAULT MESSAGE", "KIND", "STATUS");
    for kind in ErrorKind::ALL {
        println!(
            "{:<22} {:<8} {}",
            kind.as_str(),
            kind.status_code(),
            kind.default_message()
        );
    }
}

fn cmd_build(args: &[String]) {
    let mut kind_tag: Option<&str> = None;
    let mut message: Option<String> = None;
    let mut status: Option<u16> = None;
    let mut as_json = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--kind" => {
                i += 1;
                kind_tag = args.get(i).map(|s| s.as_str());
            }
            "--message" => {
                i += 1;
                message = args.get(i).cloned();
            }
            "--status" => {
                i += 1;
                status = args.get(i).and_then(|s| s.parse().ok());
                if status.is_none() {
                    eprintln!("Error: --status expects an integer status code");
                    process::exit(1);
                }
            }
            "--json" => as_json = true,
            flag => {
                eprintln!("Unknown flag: {flag}");
                process::exit(1);
            }
        }
        i += 1;
    }

    let tag = match kind_tag {
        Some(t) => t,
        None => {
            eprintln!("Error: --kind is required");
            process::exit(1);
        }
    };

    let err = if tag == "custom" {
        let message = match message {
            Some(m) => m,
            None => {
                eprintln!("Error: --kind custom requires --message");
                process::exit(1);
            }
        };
        let status = match status {
            Some(s) => s,
            None => {
                eprintln!("Error: --kind custom requires --status");
                process::exit(1);
            }
        };
        throw::custom(message, status)
    } else {
        let kind: ErrorKind = match tag.parse() {
            Ok(k) => k,
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        };
        if status.is_some() {
            eprintln!("Error: --status is only valid with --kind custom");
            process::exit(1);
        }
        throw::of(kind, message.unwrap_or_default())
    };

    print_error(&err, as_json);
}

fn print_error(err: &HttpError, as_json: bool) {
    if as_json {
        match serde_json::to_string_pretty(err) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("JSON serialization error: {e}");
                process::exit(1);
            }
        }
    } else {
        println!("{err}");
        match err.kind() {
            Some(kind) => println!("  Kind:        {kind}"),
            None => println!("  Kind:        custom"),
        }
        println!("  Status:      {}", err.status_code());
        println!("  Operational: {}", err.is_operational());
        println!("  Origin:      {}", err.origin());
    }
}

//! jshape CLI — driving adapter for the jshape shape matcher.
//!
//! Subcommands:
//! - `eval <schema> <value> [--explain]` — match a value file against a schema file
//! - `check <schema>` — validate a schema file loads without errors
//! - `tags` — print recognized type tags

use std::process;

use jshape::prelude::*;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "eval" => cmd_eval(&args[2..]),
        "check" => cmd_check(&args[2..]),
        "tags" => cmd_tags(),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("error: unknown command \"{other}\"");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Commands
// ═══════════════════════════════════════════════════════════════════════════════

fn cmd_eval(args: &[String]) -> Result<(), String> {
    if args.len() < 2 {
        return Err("eval requires a schema file and a value file".into());
    }

    let explain = args[2..].iter().any(|a| a == "--explain");

    let schema = load_schema(&args[0])?;
    let value = load_value(&args[1])?;

    let trace = schema.matches_with_trace(&value);
    if trace.matched() {
        println!("match");
        return Ok(());
    }

    println!("no match");
    if explain {
        for mismatch in trace.mismatches() {
            println!("  {mismatch}");
        }
    }
    process::exit(1);
}

fn cmd_check(args: &[String]) -> Result<(), String> {
    if args.is_empty() {
        return Err("check requires a schema file path".into());
    }

    let schema = load_schema(&args[0])?;

    println!("Schema valid: {schema}");
    Ok(())
}

#[allow(clippy::unnecessary_wraps)] // Uniform return type for all commands
fn cmd_tags() -> Result<(), String> {
    println!("Recognized type tags:");
    for tag in TypeTag::ALL {
        if tag.is_decodable() {
            println!("  {tag}");
        } else {
            println!("  {tag} (never carried by a decoded JSON value)");
        }
    }

    println!("\nModifiers:");
    println!("  *        matches any value, including null/absent");
    println!("  <tag>?   also accepts null/absent");

    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════════
// File loading
// ═══════════════════════════════════════════════════════════════════════════════

fn load_schema(path: &str) -> Result<Schema, String> {
    let content =
        std::fs::read_to_string(path).map_err(|e| format!("failed to read \"{path}\": {e}"))?;

    let schema: Schema = if is_json(path) {
        serde_json::from_str(&content).map_err(|e| format!("JSON parse error: {e}"))?
    } else {
        // Default to YAML (handles .yaml and .yml)
        serde_yaml::from_str(&content).map_err(|e| format!("YAML parse error: {e}"))?
    };

    schema
        .validate()
        .map_err(|e| format!("schema invalid: {e}"))?;
    Ok(schema)
}

fn load_value(path: &str) -> Result<serde_json::Value, String> {
    let content =
        std::fs::read_to_string(path).map_err(|e| format!("failed to read \"{path}\": {e}"))?;

    if is_json(path) {
        serde_json::from_str(&content).map_err(|e| format!("JSON parse error: {e}"))
    } else {
        serde_yaml::from_str(&content).map_err(|e| format!("YAML parse error: {e}"))
    }
}

fn is_json(path: &str) -> bool {
    std::path::Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

// ═══════════════════════════════════════════════════════════════════════════════
// Usage
// ═══════════════════════════════════════════════════════════════════════════════

fn print_usage() {
    eprintln!(
        "jshape — structural shape matcher for decoded JSON values

USAGE:
    jshape eval <schema-file> <value-file> [--explain]
    jshape check <schema-file>
    jshape tags

Schema and value files may be JSON (.json) or YAML (anything else).
`eval` exits 0 on match, 1 on no-match; `--explain` prints one line
per failing entry."
    );
}

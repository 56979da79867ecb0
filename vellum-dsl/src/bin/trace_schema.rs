/// Schema DSL Tracer - Shows the flow from source text to ParseResult
///
/// Usage: cargo run --bin trace_schema <schema-file> [expected-category]

use std::fs;
use std::process;
use vellum_dsl::{parse, Category, Lexer};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --bin trace_schema <schema-file> [expected-category]");
        eprintln!();
        eprintln!("Example:");
        eprintln!("  cargo run --bin trace_schema schemas/user_registered.schema event");
        process::exit(1);
    }

    let path = &args[1];

    let expected = match args.get(2) {
        Some(raw) => match raw.parse::<Category>() {
            Ok(category) => Some(category),
            Err(e) => {
                eprintln!("❌ {}", e);
                process::exit(1);
            }
        },
        None => None,
    };

    let source = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("❌ Failed to read {}: {}", path, e);
            process::exit(1);
        }
    };

    println!("╔═══════════════════════════════════════════════════════════════");
    println!("║ SCHEMA DSL TRACER");
    println!("╚═══════════════════════════════════════════════════════════════\n");

    println!("📝 INPUT:");
    println!("{}", source);
    println!();

    println!("🔤 TOKENS:");
    println!("─────────────────────────────────────────────────────────────");
    for token in Lexer::new(&source).tokenize() {
        println!(
            "  {:>3}:{:<3} {:?}",
            token.span.start.line, token.span.start.column, token.kind
        );
    }
    println!();

    println!("🌳 PARSE RESULT:");
    println!("─────────────────────────────────────────────────────────────");
    let result = parse(&source, expected);
    println!(
        "{}",
        serde_json::to_string_pretty(&result).expect("serialize ParseResult")
    );
    println!();

    if result.success {
        println!("✅ Parse succeeded!");
    } else {
        println!("❌ {}", result.errors[0]);
        process::exit(1);
    }
}

//! Basic logger usage example
//!
//! Demonstrates the default logger, labels, metadata and level filtering.
//!
//! Run with: cargo run --example basic_usage

use cli_logger::prelude::*;

fn main() {
    println!("=== CLI Logger - Basic Usage Example ===\n");

    // Default logger: threshold info, colorized labels, console output
    println!("1. Logging at different levels:");
    cli_logger::debug().msg("This debug message is hidden");
    cli_logger::info().msg("This is an info message");
    cli_logger::warning().msg("This is a warning message");
    cli_logger::error().msg("This is an error message (stderr)");
    cli_logger::print().msg("Print output has no label and is never filtered");

    println!("\n2. Labels and metadata:");
    cli_logger::info()
        .label("http")
        .str("method", "GET")
        .str("status", "200")
        .msg("request served");
    cli_logger::info().msgf(format_args!("listening on port {}", 8080));

    println!("\n3. Changing the threshold:");
    cli_logger::set_max_level(Level::Debug);
    cli_logger::debug().msg("Debug messages are visible now");

    println!("\n4. A separate plain logger:");
    let logger = Logger::builder()
        .max_level(Level::Warning)
        .formatter(CliFormatter::new(CliFormatterOptions { colorize: false }))
        .build();
    logger.info().msg("hidden by this logger's threshold");
    logger.warning().str("free", "3%").msg("disk almost full");

    println!("\n=== Example completed successfully! ===");
}

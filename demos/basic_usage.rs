//! Basic logger usage example
//!
//! Builds a logger from a `LogConfig` that binds both encoders to stdout, so
//! every entry shows up as a console line followed by its JSON form.
//!
//! Run with: cargo run --example basic_usage

use std::time::Duration;
use teelog::prelude::*;
use teelog::{info, warn};

fn main() -> Result<()> {
    println!("=== teelog - Basic Usage Example ===\n");

    let config = LogConfig::from_json_str(
        r#"{
            "dev": false,
            "level": "debug",
            "encoder": ["console", "json"],
            "encode": {"time": "iso8601", "level": "capitalColor", "duration": "string"},
            "outputs": ["stdout"]
        }"#,
    )?;
    let logger = Logger::new("basic_usage", &config)?;

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");
    logger.dev_panic("Development-only panic, tolerated outside development");

    println!("\n2. Formatting and multi-value messages:");
    let port = 8080;
    info!(logger, "Server listening on port {}", port);
    logger.info(Concat(&[&"retry ", &2, &" of ", &5]));

    println!("\n3. Structured fields:");
    logger.log_with_fields(
        LogLevel::Info,
        "Request served",
        Fields::new()
            .with_field("path", "/health")
            .with_field("status", 200)
            .with_field("elapsed", Duration::from_millis(12)),
    );

    println!("\n4. Raising the threshold at runtime:");
    logger.set_level(LogLevel::Warn);
    logger.info("Info message (hidden)");
    warn!(logger, "Warning message (visible)");

    logger.sync()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}

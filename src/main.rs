//! Swagger From Routes - Command-line tool for generating API documentation.
//!
//! This binary generates an OpenAPI 2.0 (Swagger) document from an exported
//! snapshot of a web application's route table: registered URIs, verbs, handler
//! metadata, validation rules and middleware.
//!
//! # Usage
//!
//! ```bash
//! swagger-from-routes [OPTIONS] <MANIFEST_PATH>
//! ```
//!
//! # Examples
//!
//! Generate YAML documentation:
//! ```bash
//! swagger-from-routes ./routes.yaml -o swagger.yaml
//! ```
//!
//! Generate JSON documentation for the /api routes only:
//! ```bash
//! swagger-from-routes ./routes.yaml -f json --filter /api -o swagger.json
//! ```
//!
//! Enable verbose logging:
//! ```bash
//! swagger-from-routes ./routes.yaml -v
//! ```

use anyhow::Result;
use clap::Parser;
use log::info;
use swagger_from_routes::cli;

fn main() -> Result<()> {
    // Parse once up front so the verbose flag can pick the log level before
    // logger initialization
    let args_for_verbose = cli::CliArgs::parse();

    let log_level = if args_for_verbose.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("Swagger From Routes starting...");

    let args = cli::parse_args_from_parsed(args_for_verbose)?;

    cli::run(args)?;

    info!("Swagger document generation completed successfully");

    Ok(())
}

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{debug, info};
use std::path::PathBuf;

/// Swagger From Routes - Generate OpenAPI 2.0 documentation from a web application's route table
#[derive(Parser, Debug)]
#[command(name = "swagger-from-routes")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the route manifest file (a JSON or YAML export of the route table)
    #[arg(value_name = "MANIFEST_PATH")]
    pub manifest_path: PathBuf,

    /// Output format (yaml or json)
    #[arg(short = 'f', long = "format", value_enum, default_value = "yaml")]
    pub output_format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_path: Option<PathBuf>,

    /// Only document routes whose URI starts with this literal prefix
    #[arg(long = "filter", value_name = "PREFIX")]
    pub route_filter: Option<String>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// YAML format
    Yaml,
    /// JSON format
    Json,
}

/// Parse command line arguments
pub fn parse_args() -> Result<CliArgs> {
    let args = CliArgs::parse();
    parse_args_from_parsed(args)
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    // Validate manifest path exists
    if !args.manifest_path.exists() {
        anyhow::bail!(
            "Manifest path does not exist: {}",
            args.manifest_path.display()
        );
    }

    // Validate manifest path is a file
    if !args.manifest_path.is_file() {
        anyhow::bail!(
            "Manifest path is not a file: {}",
            args.manifest_path.display()
        );
    }

    info!("Manifest path: {}", args.manifest_path.display());
    info!("Output format: {:?}", args.output_format);
    if let Some(ref output) = args.output_path {
        info!("Output file: {}", output.display());
    } else {
        info!("Output: stdout");
    }
    if let Some(ref filter) = args.route_filter {
        info!("Route filter: {}", filter);
    } else {
        info!("Route filter: none");
    }

    Ok(args)
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    use crate::generator::DocumentGenerator;
    use crate::manifest::Manifest;
    use crate::serializer::{serialize_json, serialize_yaml, write_to_file};

    info!("Starting Swagger document generation...");

    // Step 1: Load the route manifest
    info!("Loading route manifest...");
    let manifest = Manifest::load(&args.manifest_path)?;

    let routes = manifest.routes();
    info!("Found {} routes", routes.len());

    if routes.is_empty() {
        log::warn!("No routes found in the manifest");
    }

    // Step 2: Materialize the handler registry and alias map
    info!("Resolving {} registered handlers...", manifest.handlers.len());
    let registry = manifest.handler_registry();

    // Step 3: Generate the document
    info!("Generating Swagger document...");
    let mut generator =
        DocumentGenerator::new(&manifest.config, &registry, &manifest.middleware_aliases);
    if let Some(filter) = &args.route_filter {
        generator = generator.with_route_filter(filter.clone());
    }

    let document = generator.generate(&routes)?;
    info!("Swagger document built successfully");

    // Step 4: Serialize to requested format
    info!("Serializing to {:?} format...", args.output_format);
    let content = match args.output_format {
        OutputFormat::Yaml => serialize_yaml(&document)?,
        OutputFormat::Json => serialize_json(&document)?,
    };

    // Step 5: Output to file or stdout
    if let Some(output_path) = &args.output_path {
        info!("Writing output to: {}", output_path.display());
        write_to_file(&content, output_path)?;
        info!(
            "Successfully wrote Swagger document to {}",
            output_path.display()
        );
    } else {
        println!("{}", content);
    }

    // Step 6: Display summary
    info!("Generation complete!");
    info!("Summary:");
    info!("  - Routes in manifest: {}", routes.len());
    info!("  - Paths documented: {}", document.paths.len());
    info!(
        "  - Operations documented: {}",
        document.paths.values().map(|item| item.len()).sum::<usize>()
    );

    Ok(())
}

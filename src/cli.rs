use clap::Parser;
use npm_sbom::application::dto::OutputFormat;
use npm_sbom::sbom_generation::domain::ComponentType;
use std::path::PathBuf;

/// Generate CycloneDX SBOMs for npm projects
#[derive(Parser, Debug)]
#[command(name = "npm-sbom")]
#[command(version)]
#[command(
    about = "Generate CycloneDX SBOMs for npm projects from a resolved package tree",
    long_about = "Generate CycloneDX 1.3 SBOMs for npm projects.\n\n\
                  The resolved package tree is produced by `npm ls --json --all --long`; \
                  integrity hashes missing from it are looked up in package-lock.json."
)]
pub struct Args {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Resolved package tree (defaults to <DIR>/package-tree.json)
    #[arg(long, value_name = "FILE")]
    pub tree: Option<PathBuf>,

    /// Output format: json or xml
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Component type of the root package (application, framework, library, ...)
    #[arg(short = 't', long = "type", value_name = "COMPONENT_TYPE")]
    pub component_type: Option<ComponentType>,

    /// Do not generate a serial number
    #[arg(long)]
    pub no_serial_number: bool,

    /// Do not embed license texts found in package directories
    #[arg(long)]
    pub no_license_text: bool,

    /// Additional CycloneDX XML document whose components are merged in
    /// Can be specified multiple times: -a vendor.xml -a firmware.xml
    #[arg(short, long = "additional-bom", value_name = "FILE")]
    pub additional_bom: Vec<PathBuf>,

    /// Omit the serial number and timestamp and sort components, for reproducible output
    /// (BOM_REPRODUCIBLE accepts 1/0, true/false, yes/no, on/off)
    #[arg(
        long,
        env = "BOM_REPRODUCIBLE",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub reproducible: bool,

    /// Document version (must be at least 1)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub bom_version: Option<u32>,

    /// Path to a config file (defaults to <DIR>/npm-sbom.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show debug diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

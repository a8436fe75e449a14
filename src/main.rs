mod cli;
mod config;

use cli::Args;
use config::{discover_config, load_config_from_path, ConfigFile};
use npm_sbom::adapters::outbound::console::StderrProgressReporter;
use npm_sbom::adapters::outbound::filesystem::FileSystemReader;
use npm_sbom::adapters::outbound::metadata::PackageManifestExtractor;
use npm_sbom::application::dto::{OutputFormat, SbomRequest};
use npm_sbom::application::factories::{PresenterFactory, PresenterType};
use npm_sbom::application::use_cases::{GenerateSbomUseCase, RenderSbomUseCase};
use npm_sbom::ports::outbound::RenderOptions;
use npm_sbom::sbom_generation::domain::ComponentType;
use npm_sbom::shared::error::{ExitCode, SbomError};
use npm_sbom::shared::Result;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Effective settings after merging CLI flags, config file and defaults
#[derive(Debug, Clone, PartialEq)]
struct RunSettings {
    format: OutputFormat,
    component_type: ComponentType,
    include_serial_number: bool,
    include_license_text: bool,
    render_options: RenderOptions,
    additional_boms: Vec<PathBuf>,
    bom_version: u32,
}

impl RunSettings {
    /// CLI flags win over config values, which win over defaults
    ///
    /// Relative additional BOM paths from the config file are resolved
    /// against the project directory.
    fn resolve(args: &Args, config: Option<&ConfigFile>, project_path: &Path) -> Result<Self> {
        let default_config = ConfigFile::default();
        let config = config.unwrap_or(&default_config);

        let format = match args.format {
            Some(format) => format,
            None => config.output_format()?.unwrap_or_default(),
        };
        let component_type = match args.component_type {
            Some(component_type) => component_type,
            None => config.root_component_type()?.unwrap_or_default(),
        };

        let include_serial_number =
            !args.no_serial_number && config.include_serial_number.unwrap_or(true);
        let include_license_text =
            !args.no_license_text && config.include_license_text.unwrap_or(true);
        let reproducible = args.reproducible || config.reproducible.unwrap_or(false);

        let additional_boms = if !args.additional_bom.is_empty() {
            args.additional_bom.clone()
        } else {
            config
                .additional_boms
                .iter()
                .flatten()
                .map(|path| project_path.join(path))
                .collect()
        };

        Ok(Self {
            format,
            component_type,
            include_serial_number,
            include_license_text,
            render_options: RenderOptions { reproducible },
            additional_boms,
            bom_version: args.bom_version.or(config.bom_version).unwrap_or(1),
        })
    }
}

fn run(args: Args) -> Result<()> {
    // Validate project directory
    let project_path = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    validate_project_path(&project_path)?;

    // Load config file (explicit path or auto-discovered)
    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&project_path)?,
    };
    let settings = RunSettings::resolve(&args, config.as_ref(), &project_path)?;
    tracing::debug!(?settings, "resolved settings");

    // Build request
    let mut request = SbomRequest::builder(&project_path)
        .root_component_type(settings.component_type)
        .include_serial_number(settings.include_serial_number)
        .include_license_text(settings.include_license_text)
        .bom_version(settings.bom_version);
    if let Some(tree) = &args.tree {
        request = request.tree_path(tree);
    }

    // Create use cases with injected adapters
    let generate = GenerateSbomUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        PackageManifestExtractor::new(),
        StderrProgressReporter::new(),
    );
    let render = RenderSbomUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());

    let response = generate.execute(request.build()?)?;
    let output = render.execute(
        &response.bom,
        settings.format,
        settings.render_options,
        &settings.additional_boms,
    )?;

    // Present output
    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&output)?;

    Ok(())
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| SbomError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Project path is a symbolic link".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("npm-sbom").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_validate_project_path_valid_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_project_path(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_validate_project_path_nonexistent() {
        let err = validate_project_path(Path::new("/nonexistent/path/that/does/not/exist"))
            .unwrap_err();
        assert!(format!("{}", err).contains("Directory does not exist"));
    }

    #[test]
    fn test_validate_project_path_file_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("package.json");
        fs::write(&file_path, "{}").unwrap();

        let err = validate_project_path(&file_path).unwrap_err();
        assert!(format!("{}", err).contains("Not a directory"));
    }

    #[test]
    fn test_resolve_defaults() {
        let settings = RunSettings::resolve(&parse(&[]), None, Path::new(".")).unwrap();

        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.component_type, ComponentType::Library);
        assert!(settings.include_serial_number);
        assert!(settings.include_license_text);
        assert!(!settings.render_options.reproducible);
        assert!(settings.additional_boms.is_empty());
        assert_eq!(settings.bom_version, 1);
    }

    #[test]
    fn test_resolve_config_values() {
        let config = ConfigFile {
            format: Some("xml".to_string()),
            component_type: Some("application".to_string()),
            include_serial_number: Some(false),
            reproducible: Some(true),
            additional_boms: Some(vec![PathBuf::from("ext.xml")]),
            bom_version: Some(5),
            ..ConfigFile::default()
        };

        let settings =
            RunSettings::resolve(&parse(&[]), Some(&config), Path::new("project")).unwrap();

        assert_eq!(settings.format, OutputFormat::Xml);
        assert_eq!(settings.component_type, ComponentType::Application);
        assert!(!settings.include_serial_number);
        assert!(settings.render_options.reproducible);
        assert_eq!(settings.additional_boms, vec![PathBuf::from("project/ext.xml")]);
        assert_eq!(settings.bom_version, 5);
    }

    #[test]
    fn test_resolve_cli_overrides_config() {
        let config = ConfigFile {
            format: Some("xml".to_string()),
            component_type: Some("application".to_string()),
            additional_boms: Some(vec![PathBuf::from("config.xml")]),
            bom_version: Some(5),
            ..ConfigFile::default()
        };
        let args = parse(&[
            "-f",
            "json",
            "-t",
            "framework",
            "-a",
            "cli.xml",
            "--bom-version",
            "2",
        ]);

        let settings = RunSettings::resolve(&args, Some(&config), Path::new(".")).unwrap();

        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.component_type, ComponentType::Framework);
        assert_eq!(settings.additional_boms, vec![PathBuf::from("cli.xml")]);
        assert_eq!(settings.bom_version, 2);
    }

    #[test]
    fn test_resolve_negative_flags_override_config() {
        let config = ConfigFile {
            include_serial_number: Some(true),
            include_license_text: Some(true),
            ..ConfigFile::default()
        };
        let args = parse(&["--no-serial-number", "--no-license-text"]);

        let settings = RunSettings::resolve(&args, Some(&config), Path::new(".")).unwrap();

        assert!(!settings.include_serial_number);
        assert!(!settings.include_license_text);
    }
}

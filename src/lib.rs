//! npm-sbom - CycloneDX SBOM generation for npm projects
//!
//! This library turns a resolved npm package tree (the output of
//! `npm ls --json --all --long`) into a CycloneDX 1.3 Software Bill of
//! Materials, written as JSON or XML, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use npm_sbom::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create use cases with injected adapters
//! let generate = GenerateSbomUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     PackageManifestExtractor::new(),
//!     StderrProgressReporter::new(),
//! );
//! let render = RenderSbomUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
//!
//! // Execute
//! let request = SbomRequest::builder(".").build()?;
//! let response = generate.execute(request)?;
//!
//! // Format output
//! let output = render.execute(&response.bom, OutputFormat::Xml, RenderOptions::default(), &[])?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{CycloneDxJsonFormatter, CycloneDxXmlFormatter};
    pub use crate::adapters::outbound::metadata::PackageManifestExtractor;
    pub use crate::application::dto::{OutputFormat, SbomRequest, SbomResponse};
    pub use crate::application::use_cases::{GenerateSbomUseCase, RenderSbomUseCase};
    pub use crate::ports::inbound::SbomGenerationPort;
    pub use crate::ports::outbound::{
        BomDocumentReader, LockfileReader, MarkupRenderer, MetadataExtractor, OutputPresenter,
        PackageTreeReader, ProgressReporter, RenderOptions, SbomFormatter,
    };
    pub use crate::sbom_generation::domain::{
        Bom, Component, ComponentType, Dependency, LockfileContents, MarkupElement, PackageRecord,
        PackageUrl,
    };
    pub use crate::sbom_generation::policies::ReproducibleOrdering;
    pub use crate::sbom_generation::services::{
        BomAssembler, BomMerger, ComponentMaterializer, GraphWalker,
    };
    pub use crate::shared::Result;
}

//! SBOM generation core: domain model, services and policies.
//!
//! Nothing in here performs I/O; adapters feed package trees and extracted
//! metadata in, formatters read the assembled [`domain::Bom`] out.

pub mod domain;
pub mod policies;
pub mod services;

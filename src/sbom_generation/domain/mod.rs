pub mod bom;
pub mod bom_metadata;
pub mod component;
pub mod dependency;
pub mod external_reference;
pub mod hash;
pub mod license_choice;
pub mod lockfile;
pub mod markup;
pub mod organizational_entity;
pub mod package_record;
pub mod package_url;
pub mod swid;
pub mod validation;

pub use bom::{Bom, SCHEMA_VERSION};
pub use bom_metadata::{Metadata, Tool};
pub use component::{Component, ComponentScope, ComponentType};
pub use dependency::Dependency;
pub use external_reference::{ExternalReference, ExternalReferenceType};
pub use hash::{Hash, HashAlgorithm};
pub use license_choice::{AttachedText, License, LicenseChoice, LicenseId};
pub use lockfile::LockfileContents;
pub use markup::{MarkupElement, MarkupNode};
pub use organizational_entity::{OrganizationalContact, OrganizationalEntity};
pub use package_record::{DependencyEntry, PackageRecord};
pub use package_url::{PackageUrl, NPM_ECOSYSTEM};
pub use swid::Swid;

/// Use cases module containing application business logic orchestration
mod generate_sbom;
mod render_sbom;

pub use generate_sbom::GenerateSbomUseCase;
pub use render_sbom::RenderSbomUseCase;

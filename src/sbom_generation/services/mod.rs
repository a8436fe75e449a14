mod bom_assembler;
mod bom_merger;
mod component_materializer;
mod graph_walker;

pub use bom_assembler::{AssemblyOptions, BomAssembler, TOOL_NAME, TOOL_VENDOR};
pub use bom_merger::BomMerger;
pub use component_materializer::{ComponentMaterializer, ExtractedMetadata};
pub use graph_walker::{GraphWalkOutcome, GraphWalker, NO_NAME_PACKAGE};

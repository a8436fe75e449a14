use crate::shared::Result;

/// OutputPresenter port for delivering the rendered BOM
///
/// Implemented for stdout and for a target file; the BOM is the only thing
/// ever written to stdout.
pub trait OutputPresenter {
    /// Delivers the rendered document
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written
    fn present(&self, content: &str) -> Result<()>;
}

//! Rendering errors

use std::path::PathBuf;

/// All the ways producing an output document can fail
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// (Save) The document could not be written to `path`
    #[error("Failed to save svg file : {}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RenderError {
    /// Path of the file the failing operation targeted.
    pub fn path(&self) -> &std::path::Path {
        match self {
            RenderError::Save { path, .. } => path,
        }
    }
}

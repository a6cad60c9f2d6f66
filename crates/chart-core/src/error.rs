// File: crates/chart-core/src/error.rs
// Summary: Error type for chart layout and rendering.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("chart has no categories")]
    NoCategories,

    #[error("series `{label}` has {got} values, expected {expected} (one per category)")]
    SeriesLength { label: String, got: usize, expected: usize },

    #[error("series `{label}` has {got} bottoms, expected {expected}")]
    BottomsLength { label: String, got: usize, expected: usize },

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("encode PNG failed")]
    Encode,

    #[error("failed to read back rendered pixels")]
    ReadPixels,

    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RenderError>;

use crate::presentation::error::RenderError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Failed to create output directory '{0}'")]
    OutputDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to write dashboard files to '{0}'")]
    OutputWrite(PathBuf, #[source] std::io::Error),
}

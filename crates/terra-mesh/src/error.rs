use std::fmt;

use thiserror::Error;

/// External collaborators the generator needs at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    SeedSource,
    RenderTarget,
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collaborator::SeedSource => f.write_str("seed source"),
            Collaborator::RenderTarget => f.write_str("render target"),
        }
    }
}

#[derive(Error, Debug)]
pub enum TerrainError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Collaborator unavailable: {0}")]
    CollaboratorUnavailable(Collaborator),

    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TerrainError>;

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("fleet registry unavailable: {0}")]
    Unavailable(String),
}

/// The external collaborator holding the current robot registry. The
/// dispatcher fetches one raw snapshot per request, before the selector
/// runs; records come back untrusted and are validated individually.
pub trait FleetRegistry {
    fn fetch(&mut self) -> Result<Vec<Value>, RegistryError>;
}

/// In-memory registry serving a fixed snapshot. Used by tests and local
/// demos.
pub struct StaticRegistry {
    pub records: Vec<Value>,
}

impl FleetRegistry for StaticRegistry {
    fn fetch(&mut self) -> Result<Vec<Value>, RegistryError> {
        Ok(self.records.clone())
    }
}

use serde::Serialize;

/// Health-check response payload.
#[derive(Debug, Clone, Serialize)]
pub struct Health {
    pub status: &'static str,
}

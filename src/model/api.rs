use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned for every failed request.
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct ErrorDto {
    /// Machine-readable error kind, e.g. `InvalidPayloadKind`.
    pub kind: String,
    /// Human-readable detail.
    pub error: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct HealthDto {
    pub status: String,
}

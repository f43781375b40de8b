use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Current state of a named sequence.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CounterDto {
    pub name: String,
    /// Last issued value, 0 when nothing has been issued yet.
    pub value: u64,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The signed-in guest as exposed to the pages.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    pub guest_id: i32,
    pub full_name: String,
    pub email: String,
}

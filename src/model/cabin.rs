use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CabinDto {
    pub id: i32,
    pub name: String,
    pub max_capacity: i32,
    pub price: i32,
    pub discount: i32,
    pub description: String,
    pub image: Option<String>,
}

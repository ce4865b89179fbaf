use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuestDto {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    #[serde(rename = "nationalID")]
    pub national_id: Option<String>,
    pub nationality: Option<String>,
    pub country_flag: Option<String>,
}

/// Profile form as submitted by the account page.
///
/// `nationality` carries both the country name and its flag as `"{name}%{flag}"`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateGuestForm {
    #[serde(rename = "nationalID", default)]
    pub national_id: String,
    #[serde(default)]
    pub nationality: String,
}

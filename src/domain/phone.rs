//! Phone entity and its request/response shapes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Phone owned by a persisted user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    pub id: i64,
    /// Owning user
    pub user_id: Uuid,
    pub number: String,
    pub city_code: String,
    pub country_code: String,
}

/// Phone built during registration, owned by its `NewUser` until saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPhone {
    pub number: String,
    pub city_code: String,
    pub country_code: String,
}

/// Phone as submitted in a registration request
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PhoneRequest {
    #[validate(length(min = 1, message = "Phone number is required"))]
    #[schema(example = "12345678")]
    pub number: String,
    #[serde(rename = "citycode")]
    #[validate(length(min = 1, message = "Phone city code is required"))]
    #[schema(example = "1")]
    pub city_code: String,
    #[serde(rename = "countrycode")]
    #[validate(length(min = 1, message = "Phone country code is required"))]
    #[schema(example = "57")]
    pub country_code: String,
}

/// Phone as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PhoneResponse {
    pub number: String,
    #[serde(rename = "citycode")]
    pub city_code: String,
    #[serde(rename = "countrycode")]
    pub country_code: String,
}

impl From<&PhoneRequest> for NewPhone {
    fn from(request: &PhoneRequest) -> Self {
        Self {
            number: request.number.clone(),
            city_code: request.city_code.clone(),
            country_code: request.country_code.clone(),
        }
    }
}

impl From<Phone> for PhoneResponse {
    fn from(phone: Phone) -> Self {
        Self {
            number: phone.number,
            city_code: phone.city_code,
            country_code: phone.country_code,
        }
    }
}

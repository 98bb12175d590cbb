//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::{
    CreateUserRequest, CreateUserResponse, PhoneRequest, PhoneResponse, UserResponse,
};

/// OpenAPI documentation for the Users Manager
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users Manager",
        version = "0.1.0",
        description = "User registration with phone numbers and identity token issuance",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        user_handler::create_user,
        user_handler::get_user,
    ),
    components(
        schemas(
            CreateUserRequest,
            CreateUserResponse,
            UserResponse,
            PhoneRequest,
            PhoneResponse,
        )
    ),
    tags(
        (name = "Users", description = "User registration and lookup")
    )
)]
pub struct ApiDoc;

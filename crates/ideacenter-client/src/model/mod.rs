// Model types for IdeaCenter API requests and responses

pub mod auth;
pub mod common;
pub mod idea;
pub mod user;

pub use auth::{AuthRequest, AuthResponse};
pub use common::ApiResponse;
pub use idea::{Idea, IdeaRequest};
pub use user::UserCreateRequest;

// ideacenter-client: typed HTTP client for the IdeaCenter API

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod http;
pub mod model;

pub use client::IdeaCenterClient;
pub use config::IdeaCenterClientConfig;
pub use error::{ClientError, Result};
pub use http::{HttpReply, IdeaCenterHttpClient};
pub use reqwest::StatusCode;

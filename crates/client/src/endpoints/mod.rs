//! REST API endpoint implementations.

mod auth;
mod cluster;
mod request;
mod resources;
mod secrets;

pub use auth::login;
pub use cluster::{cluster_path, get_cluster_connection_info};
pub use request::send_request;
pub use resources::get_json;
pub use secrets::{get_secret_password, secret_path};

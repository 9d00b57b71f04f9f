pub mod auth;
pub mod db;
pub mod github;
pub mod utils;

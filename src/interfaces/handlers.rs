pub mod about;
pub mod auth;
pub mod contact;
pub mod home;
pub mod projects;
pub mod skills;
pub mod system;

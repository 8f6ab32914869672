pub mod admin;
pub mod auth;
pub mod contact_me;
pub mod gallery;
pub mod home;
pub mod system;

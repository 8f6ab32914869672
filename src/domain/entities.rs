pub mod contact_me;
pub mod dashboard;
pub mod download_stat;
pub mod event;
pub mod photo;
pub mod user;

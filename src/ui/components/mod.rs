pub mod common;
pub mod home;

pub mod home;
pub mod investors;

pub mod config;
pub mod data;
pub mod format;
pub mod list_params;
pub mod service_error;

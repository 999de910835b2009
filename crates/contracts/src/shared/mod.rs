pub mod delete_flow;
pub mod list_query;
pub mod record_source;

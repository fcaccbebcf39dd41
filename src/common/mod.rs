pub mod app_state;
pub mod models;
pub mod pg_store;
pub mod server_error;
pub mod store;

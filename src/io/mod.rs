pub mod config_io;
pub mod manifest_io;
pub mod store_io;

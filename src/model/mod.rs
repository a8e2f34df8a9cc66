pub mod catalog;
pub mod config;
pub mod filter;
pub mod library;
pub mod nav;
pub mod node;

pub use catalog::*;
pub use config::*;
pub use filter::*;
pub use library::*;
pub use nav::*;
pub use node::*;

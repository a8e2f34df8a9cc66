pub mod check;
pub mod hierarchy;
pub mod links;
pub mod paper;
pub mod tokens;
pub mod view;

pub use check::{IntegrityReport, check_catalog, check_integrity};
pub use hierarchy::build_tree;
pub use view::compute_view;

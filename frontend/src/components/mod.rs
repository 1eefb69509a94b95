pub mod categorize;
pub mod header;
pub mod summary;
pub mod trends;

pub use header::Header;

pub mod use_categorize;
pub mod use_summary;
pub mod use_trends;

pub use use_categorize::use_categorize;
pub use use_summary::use_summary;
pub use use_trends::use_trends;

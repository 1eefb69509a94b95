pub mod categorize_page;
pub mod category_controls;
pub mod transaction_table;

pub use categorize_page::CategorizePage;

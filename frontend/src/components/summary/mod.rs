pub mod pivot_table;
pub mod summary_page;

pub use summary_page::SummaryPage;

pub mod trend_chart;
pub mod trends_page;

pub use trends_page::TrendsPage;

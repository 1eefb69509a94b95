pub mod api;
pub mod config;
pub mod logging;
pub mod request_sequence;

pub use api::ApiClient;
pub use logging::Logger;
pub use request_sequence::RequestSequence;

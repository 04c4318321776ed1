pub mod config;
pub mod date_utils;
pub mod generation;
pub mod logging;
pub mod storage;

pub use generation::study_client;
pub use logging::Logger;
pub use storage::BrowserStore;

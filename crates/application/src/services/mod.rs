pub mod dispatcher;

pub use dispatcher::{ScanDispatcher, ScanSummary};

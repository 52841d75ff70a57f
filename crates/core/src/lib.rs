pub mod error;
pub mod event;
pub mod history;
pub mod units;

pub use error::{MonitorError, Result};
pub use event::{MemoryUsage, Message};
pub use history::History;

pub mod session;

pub use session::{GameRecord, SessionMetrics};

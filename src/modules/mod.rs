pub mod diagnostics;
pub mod probe;
pub mod provision;

pub use self::probe::model::{ProbeOutcome, ProbeResult, ProbeSpec};
pub use self::provision::model::{AccountRecord, AccountSpec};

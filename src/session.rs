mod error;
mod execute;
mod io;
mod report;
mod spec;

#[cfg(test)]
mod tests;

pub use error::{Result, SessionError};
pub use execute::run_session;
pub use io::{load_script, save_report};
pub use report::{SessionReport, StepReport};
pub use spec::{SessionScript, SessionStep};

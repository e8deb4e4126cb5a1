mod job;
mod removal;

pub use job::{Completion, JobPhase, RemovalJob};
pub use removal::{BackgroundRemoval, HttpRemovalService};

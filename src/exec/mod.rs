// Child-process plumbing: run a tool to completion, probe a tool's version.

pub mod probe;
pub mod run;
pub mod types;

pub use probe::probe;
pub use run::run;
pub use types::{ToolCommand, ToolOutput};

mod types;
mod walk;

pub use types::{FileSet, Language};
pub use walk::discover;

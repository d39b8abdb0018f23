mod log;

pub use log::{CommitMessageSource, GitLog};

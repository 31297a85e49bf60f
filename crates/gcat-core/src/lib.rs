pub mod error;

pub mod args;
pub mod concat;
pub mod options;
pub mod render;
pub mod source;
pub mod transcode;

pub use crate::args::{parse_args, Invocation, Plan};
pub use crate::concat::{run, RunSummary};
pub use crate::error::{CatError, Result};
pub use crate::options::OptionSet;
pub use crate::transcode::{transcode, TranscodeState};

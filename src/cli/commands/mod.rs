//! One module per subcommand, re-exported as plain functions.

mod log;
mod options;
mod progress;

pub use log::log;
pub use options::options;
pub use progress::progress;

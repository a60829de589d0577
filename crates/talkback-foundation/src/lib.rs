pub mod config;
pub mod error;
pub mod paths;
pub mod subprocess;
pub mod task;

pub use config::*;
pub use error::*;
pub use paths::*;
pub use subprocess::*;
pub use task::*;

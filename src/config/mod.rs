// This module re-exports important pieces for convenience,
// so we can "use crate::config::*" easily.
pub mod logging;
pub mod node;
pub mod refresh;
pub mod types;

pub use logging::*;
pub use node::*;
pub use refresh::*;
pub use types::*;

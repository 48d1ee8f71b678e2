//! App layer - central state management and command processing
//!
//! The App actor receives UI events, network responses and config changes,
//! updates state, and emits network commands and render state.

pub mod state;
pub mod actor;
pub mod commands;
pub mod console;
pub mod notify;
pub mod settings;
pub mod status;

pub use state::AppState;
pub use actor::AppActor;

//! Network layer - backend HTTP calls
//!
//! The Network actor receives call commands and sends back responses.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
pub use client::ApiClient;

//! # ASBOT Console
//!
//! A terminal dashboard for an ASBOT status/control backend.
//!
//! ## Features
//! - Persisted backend URL with a settings dialog
//! - One-shot status check, re-run whenever the URL changes
//! - JSON/binary backend calls with normalized errors
//! - Ad-hoc GET console with JSON highlighting and file downloads
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use config::ConfigStore;
pub use error::{ApiError, ApiResult};
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{ApiResponse, HttpMethod, RequestBody};
pub use network::{ApiClient, NetworkActor};

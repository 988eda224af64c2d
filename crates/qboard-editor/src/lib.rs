//! qboard Editor Session
//!
//! Owns the board the user is editing and sequences simulation requests
//! against it. All edits go through the placement engine; each accepted
//! edit produces a [`SimulationTicket`], and results that arrive for an
//! outdated board are discarded.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use qboard_editor::EditorSession;
//! use qboard_adapter_http::HttpSimulator;
//! use qboard_ir::GateToken;
//!
//! let mut session = EditorSession::new(Arc::new(HttpSimulator::new()?));
//! let ticket = session.place_token(0, 0, GateToken::H)?;
//! session.spawn_simulation(ticket);
//! let outcome = session.next_result().await;
//! let chart = session.dataset()?;
//! ```

pub mod error;
pub mod session;

pub use error::{EditorError, EditorResult};
pub use session::{EditorSession, Outcome, SimulationTicket, Snapshot};

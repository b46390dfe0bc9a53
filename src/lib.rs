//! Core library surface for the Deskmate TUI application.
//!
//! The public modules exposed here provide an intentionally small API so the
//! `bin` target as well as potential external tooling can reuse the same
//! pieces: the JSON-backed contact store, its display-side view, the pure
//! calculator functions, and the interactive shell that ties them together.
pub mod age;
pub mod bmi;
pub mod convert;
pub mod error;
pub mod models;
pub mod store;
pub mod ui;
pub mod view;

/// The persistence layer `main.rs` boots from.
pub use store::ContactStore;

/// The primary domain type other layers manipulate.
pub use models::Contact;

/// The interactive application entry point and state container.
pub use ui::{run_app, App};

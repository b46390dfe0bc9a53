//! Binary entry point that glues the JSON-backed contact store to the TUI.
//! The bootstrapping pipeline is short: load (or create) the contact file,
//! hydrate the initial app state, and drive the Ratatui event loop until the
//! user exits.
use deskmate::{run_app, App, ContactStore};

/// Load persistence and launch the Ratatui event loop.
///
/// Returning a `Result` bubbles up fatal initialization problems (for example
/// an unreadable or corrupt contact file) to the terminal instead of crashing
/// silently.
fn main() -> anyhow::Result<()> {
    let store = ContactStore::open()?;
    let mut app = App::new(store);
    run_app(&mut app)
}

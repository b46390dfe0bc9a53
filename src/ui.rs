//! Terminal user interface. The submodules split the concerns the way the
//! code is actually exercised: `app` owns state and key handling, `forms`
//! holds per-panel input state, `terminal` drives the event loop, and
//! `helpers` carries the small drawing utilities shared between them.

mod app;
mod forms;
mod helpers;
mod terminal;

pub use app::App;
pub use terminal::run_app;

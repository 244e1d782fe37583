//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the library, the view
//! state and the playback controller.

mod model;

pub use model::*;

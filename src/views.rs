//! View state for the two presentations of the library.
//!
//! `catalog` is the genre-card browser, `browse` the searchable, paginated
//! listing of every song. Both only read the `Library`; anything that changes
//! playback or the active view is returned to the caller as an action.

mod browse;
mod catalog;

pub use browse::*;
pub use catalog::*;

//! Library module: the generated song catalog.
//!
//! `model` holds the song/genre types and the immutable `Library`
//! collection, `generate` builds the shuffled sample library from the fixed
//! per-genre pools in `pools`.

mod generate;
mod model;
mod pools;

pub use generate::*;
pub use model::*;

#[cfg(test)]
mod tests;

//! In-memory student roster and its line-delimited backing file.

mod error;
mod roster;
mod store;

pub use error::StoreError;
pub use roster::Roster;
pub use store::{load, save};

pub mod audit;
pub mod entries;
pub mod state;

pub use entries::{EntryStore, IdMatch};

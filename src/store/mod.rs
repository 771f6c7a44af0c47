//! Note storage: the repository trait and its directory-backed implementation

mod dir_store;
mod repository;

pub use dir_store::DirStore;
pub use repository::{NoteStore, StoreResult};

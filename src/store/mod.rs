//! # Record Store
//!
//! In-memory, process-lifetime storage for todo records.
//!
//! - [`TodoStore`]: the shared map and its four operations
//! - [`Record`]: one stored entry
//! - [`TodoList`]: the `{"todos": [...]}` listing encoding
//! - [`StoreError`]: explicit not-found outcome

mod errors;
mod listing;
mod record;
mod todo_store;

pub use errors::{StoreError, StoreResult};
pub use listing::TodoList;
pub use record::Record;
pub use todo_store::TodoStore;

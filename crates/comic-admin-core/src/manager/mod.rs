//! Entity Manager
//!
//! One generic manager serves every entity kind. `ManagerState` is the
//! synchronous part (list, dialog, draft, loading, error); `actions` runs a
//! backend call followed by the full refetch and hands the outcome back to
//! the state.

mod actions;
mod backend;
pub mod mock;
mod state;

pub use actions::{load, remove, save, ActionError, Stage};
pub use backend::CrudBackend;
pub use mock::{Call, MockBackend};
pub use state::ManagerState;

pub mod filters;
pub mod session;
pub mod state_machine;

pub use filters::LockerFilters;
pub use session::{AssignLockerSession, FetchTicket, LoadState};
pub use state_machine::{ClickOutcome, Selection, SelectionState, SelectionStateMachine};

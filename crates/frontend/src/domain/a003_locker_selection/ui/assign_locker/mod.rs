//! Assign Locker modal
//!
//! MVVM:
//! - view_model.rs: session signal, fetch orchestration, commands
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::AssignLockerModal;
pub use view_model::AssignLockerViewModel;

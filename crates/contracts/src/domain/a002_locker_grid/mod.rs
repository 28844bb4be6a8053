pub mod layout;

pub use layout::{layout, GridCell, GridLayout, DEFAULT_GRID_COLUMNS};

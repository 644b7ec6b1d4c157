//! View state for the two screens, independent of any front end.

pub mod detail;
pub mod list;

pub use detail::{DetailScreen, MapView, Marker};
pub use list::{filter_states, ListScreen, StateRow};

pub const LOADING_INDICATOR: &str = "Loading...";

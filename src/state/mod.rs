//! State module for tracking inspection progress
//!
//! # Components
//!
//! - `InspectionState`: where one inspection is in the fetch, analyze,
//!   summarize sequence, and which transitions are legal

mod inspection_state;

// Re-export main types
pub use inspection_state::InspectionState;

//! Nova UI — egui panels, palettes and the per-frame UI state.
//!
//! Panels render and report actions; they never touch the store directly.
//! The app layer applies each action to the console.

pub mod panels;
pub mod state;
pub mod theme;

#[cfg(test)]
mod tests;

//! View components
//!
//! Each component renders one region of the main screen.

pub mod content;
pub mod drawer;
pub mod footer;
pub mod header;
pub mod logs;
pub mod overlay;

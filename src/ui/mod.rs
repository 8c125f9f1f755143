// Module declarations
pub mod activity;
pub mod app;
pub mod context_menu;
pub mod drawer;
pub mod modal;
pub mod router;
pub mod sidebar;
pub mod splash;
pub mod state;
pub mod views;
// Re-exports for external use
pub use app::{App, run};

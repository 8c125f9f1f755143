//! Perfice UI state and storage layer, with the terminal client built on top of it.

pub mod cli_messages;
pub mod config;
pub mod consts;
pub mod events;
pub mod logging;
pub mod math;
pub mod model;
pub mod services;
pub mod session;
pub mod storage;
pub mod store;
pub mod ui;

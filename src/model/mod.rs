//! Typed records shared between the UI state, the services and the terminal views.

pub mod analytics;
pub mod dropdown;
pub mod dynamic_input;
pub mod icon;
pub mod integration;
pub mod segmented;

use std::rc::Rc;

/// A zero-argument callback bound to a UI element.
pub type Action = Rc<dyn Fn()>;

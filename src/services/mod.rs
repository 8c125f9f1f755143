//! Services that keep small pieces of application state in local storage.

pub mod history;
pub mod ignore;
pub mod preferences;

pub use history::{AnalyticsHistoryEntry, AnalyticsHistoryService};
pub use ignore::{CorrelationIgnoreService, IgnoredCorrelation, SimpleTimeScopeType};
pub use preferences::{Preferences, WeekStart};

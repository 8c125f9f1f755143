pub mod cli_consts {
    //! Application Constants
    //!
    //! Storage keys, UI limits and configuration defaults, grouped by area.

    // =============================================================================
    // ROUTING
    // =============================================================================

    /// Route shown when the routing stack is empty.
    pub const ROOT_ROUTE: &str = "/";

    // =============================================================================
    // LOCAL STORAGE KEYS
    // =============================================================================
    // Keys match the web client so a storage file can be shared with it.

    /// Significant correlations and when they were first seen.
    pub const HISTORY_STORE_KEY: &str = "correlations_history";

    /// Correlations hidden by the user.
    pub const IGNORED_CORRELATIONS_STORE_KEY: &str = "ignored_correlations";

    /// Dark mode flag, stored as "true" or "false".
    pub const DARK_MODE_KEY: &str = "darkMode";

    /// First day of the week, stored as a number.
    pub const WEEK_START_KEY: &str = "week_start";

    // =============================================================================
    // FILES
    // =============================================================================

    /// Directory under the user's home holding config and storage.
    pub const APP_DIR_NAME: &str = ".perfice";

    pub const CONFIG_FILE_NAME: &str = "config.json";

    pub const STORAGE_FILE_NAME: &str = "storage.json";

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Number of correlations listed on the analytics screen.
    pub const NEWEST_CORRELATIONS_LIMIT: usize = 10;

    /// Decimals shown for correlation coefficients and progress values.
    pub const DISPLAY_DECIMALS: usize = 2;

    /// Terminal poll interval for input events (milliseconds)
    pub const INPUT_POLL_INTERVAL_MS: u64 = 100;

    /// How long the splash screen is shown (seconds)
    pub const SPLASH_DURATION_SECS: u64 = 2;

    // =============================================================================
    // ANALYTICS DEFAULTS
    // =============================================================================

    /// Correlations weaker than this are not kept in the history.
    pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.4;

    /// A coefficient moving by more than this counts as a new correlation.
    pub const DEFAULT_CHANGE_THRESHOLD: f64 = 0.1;
}

pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard,
    //! organized by functional area for clarity and maintainability.

    // =============================================================================
    // ACTIVITY LOG CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the snapshot channel between the refresh timer and the UI.
    pub const SNAPSHOT_QUEUE_SIZE: usize = 8;

    // =============================================================================
    // REFRESH CONFIGURATION
    // =============================================================================

    /// Metrics refresh timer configuration
    pub mod refresh {
        /// Period between two randomized metric snapshots (seconds)
        pub const DEFAULT_INTERVAL_SECS: u64 = 10;

        /// How long the splash screen stays up before the dashboard opens (seconds)
        pub const SPLASH_SECS: u64 = 2;

        /// Key polling interval of the UI loop (milliseconds)
        pub const UI_POLL_MS: u64 = 100;
    }

    /// Uniform draw ranges for each headline metric, as `(low, high)`.
    pub mod snapshot_ranges {
        pub const REVENUE: (f64, f64) = (100_000.0, 150_000.0);
        pub const USERS: (f64, f64) = (8_000.0, 10_000.0);
        pub const CONVERSIONS: (f64, f64) = (1_200.0, 1_700.0);
        pub const GROWTH_RATE: (f64, f64) = (10.0, 20.0);
    }

    // =============================================================================
    // EXPORT CONFIGURATION
    // =============================================================================

    pub mod export {
        /// Prefix of every exported CSV file name
        pub const FILE_PREFIX: &str = "campaign-performance-";

        /// Column labels of the CSV header row, in column order
        pub const HEADERS: [&str; 8] = [
            "Campaign Name",
            "Status",
            "Impressions",
            "Clicks",
            "Conversions",
            "CTR (%)",
            "CPC ($)",
            "Spend ($)",
        ];
    }
}

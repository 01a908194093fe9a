//! Logging setup.

use env_logger::Env;

/// Filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_FILTER: &str = "warn,Daybook=info,hyper=warn,reqwest=warn";

/// Installs the global logger. `RUST_LOG` wins over `default_filter`.
pub fn init(default_filter: &str) {
    let filter = if default_filter.trim().is_empty() {
        DEFAULT_FILTER
    } else {
        default_filter
    };

    // A second call (e.g. from tests) is not an error worth surfacing
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(filter))
        .format_timestamp_secs()
        .try_init();
}

//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system with an explicit filter string (e.g. `"info"`
/// or `"wire_gizmos=trace"`).
///
/// `RUST_LOG` still takes precedence when it is set. Calling this more than
/// once is harmless; later calls are ignored.
pub fn init_with_filter(filter: &str) {
    let env = env_logger::Env::default().default_filter_or(filter);
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Initialize logging with the filter from `config.log_level`
pub fn init_from_config(config: &crate::config::GizmoConfig) {
    init_with_filter(&config.log_level);
    debug!("Logging initialized with filter '{}'", config.log_level);
}

//! Startup banner
//!
//! Console lines announcing the server, its environment and address.

use crate::config::Config;

/// Banner lines in display order.
pub fn startup_banner(config: &Config) -> Vec<String> {
    let mut lines = vec![
        format!("Serving Stockroom v{}", env!("CARGO_PKG_VERSION")),
        format!("Environment: {}", config.environment),
    ];

    if config.is_development() {
        lines.push(
            "WARNING: This is a development server. Do not use it in a production deployment."
                .to_string(),
        );
    }

    lines.push(format!(
        "Debug mode: {}",
        if config.debug { "on" } else { "off" }
    ));
    lines.push(format!(
        "Running on http://{}/ (Press CTRL+C to quit)",
        config.socket_addr()
    ));
    lines
}

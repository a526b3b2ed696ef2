// 📝 Logging - tracing subscriber for the driver
//
// Logs go to stderr so stdout carries only the account report.
// RUST_LOG overrides the default filter.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "bank_accounts=debug,info"
    } else {
        "bank_accounts=warn"
    }
}

pub fn init_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        for verbose in [false, true] {
            assert!(EnvFilter::try_new(default_filter(verbose)).is_ok());
        }
    }
}

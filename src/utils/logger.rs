use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` wins; otherwise the crate logs at info, or debug when verbose.
fn scrape_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "dining_scrape=debug,info"
    } else {
        "dining_scrape=info"
    }
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(scrape_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

/// JSON lines with span context, for when runs are shipped to a log
/// collector (cron, container). Field names stay flat so per-request
/// `identifier`/`attempt` fields are queryable.
pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(scrape_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(true)
                .with_target(verbose),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_follows_verbosity() {
        assert_eq!(default_directive(false), "dining_scrape=info");
        assert_eq!(default_directive(true), "dining_scrape=debug,info");
    }
}

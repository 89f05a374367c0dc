use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &str = "slack_sweeper=info";
const VERBOSE_DIRECTIVES: &str = "slack_sweeper=debug";

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks between info and debug for this
/// crate. Calling it twice is harmless.
pub fn init_logging(verbose: bool) {
    let default = if verbose { VERBOSE_DIRECTIVES } else { DEFAULT_DIRECTIVES };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Compact log lines at `INFO` unless `RUST_LOG` says otherwise.
pub fn configure_logger() {
    let env_log = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let subscriber = FmtSubscriber::builder()
        .compact()
        .with_file(false)
        .with_env_filter(env_log);

    if let Err(err) = tracing::subscriber::set_global_default(subscriber.finish()) {
        eprintln!("Failed to install log subscriber: {err}");
    }
}

//! Log sink setup
//!
//! The pipeline only emits through `tracing` macros; where those events go
//! is configured here, once, by whichever binary hosts the client. Filter
//! precedence: `VERACITY_LOG`, then `RUST_LOG`, then `info`.

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install the global fmt subscriber.
///
/// Safe to call more than once: if a subscriber is already installed (a
/// test harness, an embedding application), the existing one wins.
pub fn init_tracing() {
    let filter = std::env::var("VERACITY_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(
            |_| EnvFilter::new("info"),
            |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("info")),
        );

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        // A subscriber installed earlier keeps precedence.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
    }
}

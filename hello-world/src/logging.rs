//! Diagnostics for the hello-world binary.
//!
//! Diagnostics go to stderr only so the stdout contract seen by the calling
//! script runner never changes, whatever `RUST_LOG` says.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber.
///
/// Silent unless `RUST_LOG` enables something above `warn`. The emitters log
/// under the `hello_world` target: section boundaries, the pause length, and
/// the color picked for each line.
///
/// ```bash
/// RUST_LOG=hello_world=debug hello-world 2>trace.log
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

use url_shortener::config::{self, Environment};
use url_shortener::server;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    init_tracing(config.env);

    config.print_summary();

    server::run(config).await
}

/// Installs the global subscriber. `RUST_LOG` overrides the environment's
/// default level.
fn init_tracing(env: Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(env.default_log_level()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if env.json_logs() {
        builder.json().init();
    } else {
        builder.init();
    }
}

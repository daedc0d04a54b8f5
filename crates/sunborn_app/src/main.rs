mod app;
mod config;
mod effects;
mod logging;
mod render;

use std::path::Path;

use sunborn_logging::sunborn_info;

fn main() -> anyhow::Result<()> {
    let config = config::load_or_default(Path::new(config::CONFIG_FILENAME));
    logging::initialize(config.log_destination);
    sunborn_info!(
        "sunborn_app starting (lists: {} / {}, reveal delay {}ms)",
        config.allowlist_a,
        config.allowlist_b,
        config.reveal_delay_ms
    );
    app::run(config)
}

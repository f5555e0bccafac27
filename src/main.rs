mod config;    // brings `config.rs` in as `crate::config`
mod protocol;  // brings `protocol.rs` in as `crate::protocol`
mod session;   // brings `session.rs` in as `crate::session`
mod transport; // brings `transport.rs` in as `crate::transport`

use anyhow::{Context, bail};
use tracing::{debug, info};
use tracing_subscriber::{self, EnvFilter};

use crate::session::{RacePhase, RaceSession};
use crate::transport::StdioTransport;

fn main() -> anyhow::Result<()> {
    let debug_flag = std::env::args()
        .skip(1)
        .any(|arg| arg == "-d" || arg == "--debug");

    let settings = config::load_settings().context("loading configuration")?;
    let debug = debug_flag || settings.debug;

    let default_level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    // Protocol lines own stdout; everything human-readable goes to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(default_level.into()))
        .with_writer(std::io::stderr)
        .init();
    if debug {
        debug!("debug mode activated");
    }

    let mut session =
        RaceSession::start(StdioTransport::new()).context("race setup failed")?;
    match session.run() {
        RacePhase::Finished => {
            info!("race finished successfully");
            Ok(())
        }
        phase => bail!("race ended in phase {phase:?}"),
    }
}

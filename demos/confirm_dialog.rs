//! Builds a confirmation dialog and a conversation filter, then prints the payloads
//!
//! Run with `RUST_LOG=blockkit=debug` to see validation traces.

use blockkit::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let confirm = Confirm::builder(
        Text::plain("Archive channel?")?,
        Text::markdown("Members will lose access to *#launch*.")?,
        Text::plain("Archive")?,
        Text::plain("Keep it")?,
    )
    .style("danger")
    .create()?;
    println!("{}", serde_json::to_string_pretty(&confirm)?);

    let filter = Filter::builder()
        .include(["public", "private"])
        .exclude_bot_users(true)
        .create()?;
    println!("{}", serde_json::to_string_pretty(&filter)?);

    // An invalid object reports every problem at once
    let rejected = Confirm::builder(
        Text::plain("t".repeat(101))?,
        Text::markdown("body")?,
        Text::plain("Yes")?,
        Text::plain("No")?,
    )
    .style("secondary")
    .create();

    if let Err(err) = rejected {
        tracing::warn!("{}", err);
        println!("{}", serde_json::to_string_pretty(&err.details())?);
    }

    Ok(())
}

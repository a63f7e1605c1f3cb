//! Binary crate for the `wttrbar` waybar widget.
//!
//! Invoked on a timer by waybar. Prints exactly one line of JSON on stdout
//! per invocation and always exits 0; the failure document is itself valid
//! output, so the bar never sees a broken refresh.

use tracing_subscriber::EnvFilter;

use wttrbar_core::WttrClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the JSON contract; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("wttrbar v{} refreshing", env!("CARGO_PKG_VERSION"));

    let client = WttrClient::new();
    let doc = wttrbar_core::run(&client).await;

    println!("{}", serde_json::to_string(&doc)?);

    Ok(())
}

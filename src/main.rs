#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), journal_dashboard::server::ServerError> {
    tracing_subscriber::fmt::init();

    journal_dashboard::server::serve()
        .await
        .inspect_err(|e| tracing::error!(error = %e, "journal dashboard stopped"))
}

// The WASM bundle is built from the library; the binary only matters with `ssr`.
#[cfg(not(feature = "ssr"))]
fn main() {}

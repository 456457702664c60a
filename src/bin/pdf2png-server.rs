//! CLI binary for pdf2png-server.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ServerConfig` and runs the serve loop.

use anyhow::{Context, Result};
use clap::Parser;
use pdf2png_server::{serve, ConvertConfig, ServerConfig};
use std::net::{IpAddr, SocketAddr};
use tracing_subscriber::EnvFilter;

/// HTTP service converting uploaded PDFs into per-page PNG data URIs.
#[derive(Debug, Parser)]
#[command(name = "pdf2png-server", version, about)]
struct Cli {
    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0", env = "PDF2PNG_HOST")]
    host: IpAddr,

    /// Port to listen on.
    #[arg(long, default_value_t = 8000, env = "PDF2PNG_PORT")]
    port: u16,

    /// Rasterisation resolution in DPI (72–600).
    #[arg(long, default_value_t = 300, env = "PDF2PNG_DPI")]
    dpi: u32,

    /// Maximum accepted upload size in bytes.
    #[arg(
        long,
        default_value_t = 100 * 1024 * 1024,
        env = "PDF2PNG_MAX_UPLOAD_BYTES"
    )]
    max_upload_bytes: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let convert = ConvertConfig::builder()
        .dpi(cli.dpi)
        .build()
        .context("invalid conversion settings")?;

    let config = ServerConfig {
        bind: SocketAddr::new(cli.host, cli.port),
        max_upload_bytes: cli.max_upload_bytes,
        convert,
    };

    serve(config).await.context("server exited with error")
}

//! Wallet Verifier
//!
//! Command line front end: reads the verification link, connects to the
//! configured wallet provider, signs the challenge and reports the server's
//! verdict.

use std::process::ExitCode;

use clap::Parser;

use wallet_verifier::config::Config;
use wallet_verifier::session::{token_from_link, SessionState};
use wallet_verifier::view::Console;
use wallet_verifier::Widget;

/// Verify ownership of a wallet address
#[derive(Debug, Parser)]
#[command(name = "wallet-verifier", version, about)]
struct Cli {
    /// Verification link received from the server (its `token` parameter is used)
    link: Option<String>,

    /// Verification token, overrides the one in the link
    #[arg(long)]
    token: Option<String>,

    /// Wallet provider JSON-RPC endpoint, overrides WALLET_RPC_URL
    #[arg(long)]
    wallet_rpc_url: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::from_env();
    if let Some(url) = cli.wallet_rpc_url {
        config.wallet_rpc_url = Some(url);
    }

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let token = cli
        .token
        .or_else(|| cli.link.as_deref().and_then(token_from_link));

    tracing::info!(
        endpoint = %config.verify_endpoint(),
        wallet_rpc_url = ?config.wallet_rpc_url,
        has_token = token.is_some(),
        "Starting wallet verification"
    );

    let widget = Widget::from_config(config, token, Console::new(std::io::stdout()));

    widget.load().await;

    if widget.connect().await == SessionState::Disconnected {
        return ExitCode::FAILURE;
    }

    match widget.sign_and_verify().await {
        SessionState::Verified => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

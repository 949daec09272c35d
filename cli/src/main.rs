//! drip — command-line driver for the testnet faucet.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use drip_client::ClaimClient;
use drip_form::{FaucetConfig, FormController};
use drip_types::ClaimKind;

#[derive(Parser)]
#[command(name = "drip", about = "Testnet faucet claim client")]
struct Cli {
    /// Wallet address to receive the disbursement.
    #[arg(env = "DRIP_ADDRESS", default_value = "")]
    address: String,

    /// What to claim: "token", "token-seed", or "nft-seed".
    #[arg(long, default_value = "token", env = "DRIP_KIND")]
    kind: String,

    /// Base URL of the claim service.
    /// When a config file is provided, defaults to the file's value.
    #[arg(long, env = "DRIP_BASE_URL")]
    base_url: Option<String>,

    /// Verification token issued by the challenge widget, for faucets
    /// configured to require human verification.
    #[arg(long, env = "DRIP_VERIFICATION_TOKEN")]
    verification_token: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "info", env = "DRIP_LOG_LEVEL")]
    log_level: String,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn parse_kind(s: &str) -> ClaimKind {
    match s.to_lowercase().as_str() {
        "token-seed" | "seed" => ClaimKind::TokenSeed,
        "nft-seed" | "nft" => ClaimKind::NftSeed,
        _ => ClaimKind::BaseToken,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    drip_utils::init_tracing(&cli.log_level);

    let file_config: Option<FaucetConfig> = if let Some(ref config_path) = cli.config {
        match FaucetConfig::from_toml_file(&config_path.display().to_string()) {
            Ok(cfg) => {
                tracing::info!("Loaded config from {}", config_path.display());
                Some(cfg)
            }
            Err(e) => {
                tracing::warn!("Failed to load config file: {e}, using CLI defaults");
                None
            }
        }
    } else {
        None
    };

    let config = if let Some(file_cfg) = file_config {
        FaucetConfig {
            base_url: cli.base_url.clone().unwrap_or(file_cfg.base_url),
            log_level: cli.log_level.clone(),
            ..file_cfg
        }
    } else {
        FaucetConfig {
            base_url: cli
                .base_url
                .clone()
                .unwrap_or_else(|| FaucetConfig::default().base_url),
            log_level: cli.log_level.clone(),
            ..Default::default()
        }
    };

    let kind = parse_kind(&cli.kind);
    tracing::info!(
        "drip testnet {} faucet — claim service at {}",
        kind.display_mode().as_str(),
        config.base_url
    );

    let client = ClaimClient::new(
        &config.base_url,
        Duration::from_secs(config.request_timeout_secs),
        Duration::from_secs(config.connect_timeout_secs),
    )?;

    let prefill = (!cli.address.is_empty()).then(|| cli.address.clone());
    let mut controller = FormController::new(&config, prefill);
    controller.set_claim_kind(kind);

    if let Some(error) = controller.address_error() {
        anyhow::bail!("invalid wallet address: {error}");
    }

    if controller.verification_required() {
        match cli.verification_token {
            Some(token) => controller.on_challenge_completed(Some(token)),
            None => anyhow::bail!(
                "this faucet requires human verification; pass --verification-token"
            ),
        }
    }

    if !controller.submit(&client).await {
        anyhow::bail!("submission refused; check the address and verification token");
    }

    match controller.presenter().display() {
        Some(verdict) if verdict.is_success => {
            println!("OK: {}", verdict.message);
        }
        Some(verdict) => {
            println!("FAILED (code {}): {}", verdict.code, verdict.message);
            std::process::exit(1);
        }
        None => {
            // The service answered with an empty message; nothing to render.
            if !controller.presenter().current().is_success {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

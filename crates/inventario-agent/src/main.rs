mod collect;
mod config;

use anyhow::Result;
use inventario_common::types::{DadosComputador, RespostaStatus};
use tokio::signal;
use tokio::time::{interval, Duration};
use tracing_subscriber::EnvFilter;

use crate::collect::SnapshotCollector;
use crate::config::AgentConfig;

async fn report(
    client: &reqwest::Client,
    endpoint: &str,
    token: &str,
    dados: &DadosComputador,
) -> Result<()> {
    let response = client
        .post(endpoint)
        .bearer_auth(token)
        .json(dados)
        .send()
        .await?;

    let status = response.status();
    let resposta: RespostaStatus = response.json().await?;
    if !status.is_success() {
        anyhow::bail!("server returned {status}: {}", resposta.mensagem);
    }

    tracing::info!(hostname = %dados.hostname, mensagem = %resposta.mensagem, "Inventory reported");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("inventario_agent=info".parse()?),
        )
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/agent.toml".to_string());
    let config = AgentConfig::load(&config_path)?;
    let endpoint = config.inventario_endpoint();

    let mut collector = SnapshotCollector::new();
    let client = reqwest::Client::new();

    tracing::info!(
        server = %config.server_url,
        interval_secs = config.collection_interval_secs,
        run_once = config.run_once,
        "inventario-agent starting"
    );

    if config.run_once {
        let dados = collector.collect()?;
        report(&client, &endpoint, &config.token, &dados).await?;
        return Ok(());
    }

    let mut tick = interval(Duration::from_secs(config.collection_interval_secs));
    loop {
        tokio::select! {
            _ = tick.tick() => {
                match collector.collect() {
                    Ok(dados) => {
                        tracing::debug!(hostname = %dados.hostname, "Snapshot collected");
                        if let Err(e) = report(&client, &endpoint, &config.token, &dados).await {
                            // No buffering: the next tick sends a fresh snapshot
                            tracing::warn!(error = %e, "Failed to report inventory");
                        }
                    }
                    Err(e) => tracing::warn!(error = %e, "Snapshot collection failed"),
                }
            }
            _ = signal::ctrl_c() => {
                tracing::info!("Shutting down gracefully");
                break;
            }
        }
    }

    Ok(())
}

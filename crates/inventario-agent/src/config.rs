use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AgentConfig {
    /// Base URL of the inventory server, e.g. `http://10.0.0.5:8000`.
    pub server_url: String,
    /// Static bearer token shared with the server.
    pub token: String,
    #[serde(default = "default_collection_interval")]
    pub collection_interval_secs: u64,
    /// Collect and report a single snapshot, then exit (cron mode).
    #[serde(default)]
    pub run_once: bool,
}

fn default_collection_interval() -> u64 {
    3600
}

impl AgentConfig {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        anyhow::ensure!(
            config.collection_interval_secs > 0,
            "collection_interval_secs must be positive"
        );
        Ok(config)
    }

    /// Full submission endpoint built from `server_url`.
    pub fn inventario_endpoint(&self) -> String {
        format!("{}/api/inventario", self.server_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_handles_trailing_slash() {
        let config = AgentConfig {
            server_url: "http://10.0.0.5:8000/".to_string(),
            token: "t".to_string(),
            collection_interval_secs: 3600,
            run_once: false,
        };
        assert_eq!(
            config.inventario_endpoint(),
            "http://10.0.0.5:8000/api/inventario"
        );
    }

    #[test]
    fn defaults_apply_when_omitted() {
        let config: AgentConfig = toml::from_str(
            "server_url = \"http://localhost:8000\"\ntoken = \"abc\"\n",
        )
        .unwrap();
        assert_eq!(config.collection_interval_secs, 3600);
        assert!(!config.run_once);
    }
}

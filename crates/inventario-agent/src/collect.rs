use anyhow::Result;
use inventario_common::types::DadosComputador;
use sysinfo::System;

const BYTES_PER_GB: f64 = (1024u64 * 1024 * 1024) as f64;

/// Builds the machine snapshot reported to the server.
pub struct SnapshotCollector {
    system: System,
}

impl SnapshotCollector {
    pub fn new() -> Self {
        let mut system = System::new();
        system.refresh_memory();
        system.refresh_cpu_all();
        Self { system }
    }

    /// Collects the current machine state.
    ///
    /// # Errors
    ///
    /// Returns an error if the hostname cannot be determined; a submission
    /// without its natural key would be rejected by the server anyway.
    pub fn collect(&mut self) -> Result<DadosComputador> {
        self.system.refresh_memory();

        let hostname = System::host_name()
            .ok_or_else(|| anyhow::anyhow!("could not determine hostname"))?;

        let sistema_operacional = System::long_os_version()
            .or_else(System::name)
            .unwrap_or_else(|| std::env::consts::OS.to_string());

        let usuario = std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .ok();

        let memoria_gb = match self.system.total_memory() {
            0 => None,
            bytes => Some(round2(bytes as f64 / BYTES_PER_GB)),
        };

        let processador = self
            .system
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty());

        Ok(DadosComputador {
            hostname,
            sistema_operacional,
            usuario,
            memoria_gb,
            processador,
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_keeps_two_decimals() {
        assert_eq!(round2(15.8763), 15.88);
        assert_eq!(round2(16.0), 16.0);
        assert_eq!(round2(0.004), 0.0);
    }

    #[test]
    fn collect_produces_required_fields() {
        let mut collector = SnapshotCollector::new();
        let dados = collector.collect().unwrap();
        assert!(!dados.hostname.is_empty());
        assert!(!dados.sistema_operacional.is_empty());
        if let Some(gb) = dados.memoria_gb {
            assert!(gb > 0.0);
        }
    }
}

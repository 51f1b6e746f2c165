use chrono::Utc;
use inventario_common::types::{Computador, DadosComputador};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue::Set, EntityTrait, Order, PaginatorTrait, QueryOrder};

use crate::entities::computador::{self, Column as ComputadorCol, Entity as ComputadorEntity};
use crate::error::Result;
use crate::store::InventoryStore;

fn model_to_computador(m: computador::Model) -> Computador {
    Computador {
        hostname: m.hostname,
        sistema_operacional: m.sistema_operacional,
        usuario: m.usuario,
        memoria_gb: m.memoria_gb,
        processador: m.processador,
        ultima_coleta: m.ultima_coleta.with_timezone(&Utc),
    }
}

impl InventoryStore {
    /// Inserts or refreshes the row for `dados.hostname`.
    ///
    /// A single conflict-on-key statement: concurrent submissions for the
    /// same hostname are resolved by the database, never by a read-then-write
    /// in application code. `ultima_coleta` is stamped here on every write.
    pub async fn upsert_computador(&self, dados: &DadosComputador) -> Result<()> {
        let now = Utc::now().fixed_offset();
        let am = computador::ActiveModel {
            hostname: Set(dados.hostname.clone()),
            sistema_operacional: Set(dados.sistema_operacional.clone()),
            usuario: Set(dados.usuario.clone()),
            memoria_gb: Set(dados.memoria_gb),
            processador: Set(dados.processador.clone()),
            ultima_coleta: Set(now),
        };
        ComputadorEntity::insert(am)
            .on_conflict(
                OnConflict::column(ComputadorCol::Hostname)
                    .update_column(ComputadorCol::SistemaOperacional)
                    .update_column(ComputadorCol::Usuario)
                    .update_column(ComputadorCol::MemoriaGb)
                    .update_column(ComputadorCol::Processador)
                    .update_column(ComputadorCol::UltimaColeta)
                    .to_owned(),
            )
            .exec_without_returning(self.db())
            .await?;
        Ok(())
    }

    /// All records, most recently collected first.
    pub async fn listar_por_coleta(&self) -> Result<Vec<Computador>> {
        let rows = ComputadorEntity::find()
            .order_by(ComputadorCol::UltimaColeta, Order::Desc)
            .all(self.db())
            .await?;
        Ok(rows.into_iter().map(model_to_computador).collect())
    }

    /// The latest record per hostname, ordered by hostname.
    ///
    /// `hostname` is the primary key, so this is the same row set as the
    /// recency listing in a different order; the upsert keeps the table at
    /// one row per host.
    pub async fn listar_por_hostname(&self) -> Result<Vec<Computador>> {
        let rows = ComputadorEntity::find()
            .order_by(ComputadorCol::Hostname, Order::Asc)
            .all(self.db())
            .await?;
        Ok(rows.into_iter().map(model_to_computador).collect())
    }

    /// Number of inventoried hosts.
    pub async fn contar(&self) -> Result<u64> {
        Ok(ComputadorEntity::find().count(self.db()).await?)
    }
}

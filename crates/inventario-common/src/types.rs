use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payload que um agente envia em `POST /api/inventario`.
///
/// `hostname` e `sistema_operacional` são obrigatórios; os demais campos são
/// opcionais e sobrescrevem o valor anterior quando presentes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DadosComputador {
    /// Nome da máquina; chave natural do inventário.
    pub hostname: String,
    pub sistema_operacional: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usuario: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memoria_gb: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processador: Option<String>,
}

/// Um registro do inventário, uma linha por hostname.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Computador {
    pub hostname: String,
    pub sistema_operacional: String,
    pub usuario: Option<String>,
    pub memoria_gb: Option<f64>,
    pub processador: Option<String>,
    /// Carimbado pelo servidor a cada gravação.
    pub ultima_coleta: DateTime<Utc>,
}

/// Resultado de uma operação da API.
///
/// # Examples
///
/// ```
/// use inventario_common::types::StatusResposta;
///
/// assert_eq!(StatusResposta::Sucesso.to_string(), "sucesso");
/// assert!(StatusResposta::Erro != StatusResposta::Sucesso);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StatusResposta {
    Sucesso,
    Erro,
}

impl std::fmt::Display for StatusResposta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusResposta::Sucesso => write!(f, "sucesso"),
            StatusResposta::Erro => write!(f, "erro"),
        }
    }
}

/// Envelope `{status, mensagem}` devolvido pelo `POST /api/inventario` e por
/// todas as respostas de erro.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RespostaStatus {
    pub status: StatusResposta,
    pub mensagem: String,
}

/// Resposta de `GET /api/computadores`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RespostaComputadores {
    pub computadores: Vec<Computador>,
}

/// Resposta de `GET /api/historico`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RespostaHistorico {
    pub historico: Vec<Computador>,
}

/// Resposta de `GET /api/ativos`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RespostaAtivos {
    pub ativos: Vec<Computador>,
}

/// Resposta da raiz pública `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RespostaRaiz {
    pub mensagem: String,
}

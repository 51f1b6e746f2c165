pub mod inventario;
pub mod system;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use inventario_common::types::{RespostaStatus, StatusResposta};
use inventario_storage::StorageError;

/// Errors a handler can surface to the client.
///
/// Every variant maps to a real HTTP status code; the transport never reports
/// success for a failed operation. The `{status, mensagem}` body shape is the
/// same as the success envelope, for wire compatibility with the deployed
/// agents.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("campo obrigatório vazio: {0}")]
    CampoVazio(&'static str),
    #[error("memoria_gb não pode ser negativa")]
    MemoriaNegativa,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::CampoVazio(_) | ApiError::MemoriaNegativa => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn mensagem(&self) -> String {
        match self {
            // Driver details are logged at the handler, never sent to callers
            ApiError::Storage(_) => "Erro ao acessar o banco de dados".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error_response(self.status_code(), &self.mensagem())
    }
}

/// `{status: "erro", mensagem}` with the given HTTP status.
pub fn error_response(status: StatusCode, mensagem: &str) -> Response {
    (
        status,
        Json(RespostaStatus {
            status: StatusResposta::Erro,
            mensagem: mensagem.to_string(),
        }),
    )
        .into_response()
}

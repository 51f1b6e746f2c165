use axum::Json;
use inventario_common::types::RespostaRaiz;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::state::AppState;

/// Nome do serviço devolvido pela raiz pública.
pub const NOME_SERVICO: &str = "API Inventário de Computadores";

/// Routes that require no authentication.
pub fn rotas_publicas() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(raiz))
}

/// Identifica o serviço. Único endpoint acessível sem token.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Identificação do serviço", body = RespostaRaiz)
    ),
    tag = "Sistema"
)]
async fn raiz() -> Json<RespostaRaiz> {
    Json(RespostaRaiz {
        mensagem: NOME_SERVICO.to_string(),
    })
}

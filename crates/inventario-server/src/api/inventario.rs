use axum::extract::State;
use axum::{Extension, Json};
use inventario_common::types::{
    DadosComputador, RespostaAtivos, RespostaComputadores, RespostaHistorico, RespostaStatus,
    StatusResposta,
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::api::ApiError;
use crate::logging::TraceId;
use crate::state::AppState;

/// Routes behind the bearer-token middleware.
pub fn rotas_protegidas() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(receber_inventario))
        .routes(routes!(listar_computadores))
        .routes(routes!(listar_historico))
        .routes(routes!(listar_ativos))
}

fn validar(dados: &DadosComputador) -> Result<(), ApiError> {
    if dados.hostname.trim().is_empty() {
        return Err(ApiError::CampoVazio("hostname"));
    }
    if dados.sistema_operacional.trim().is_empty() {
        return Err(ApiError::CampoVazio("sistema_operacional"));
    }
    if dados.memoria_gb.is_some_and(|gb| gb < 0.0) {
        return Err(ApiError::MemoriaNegativa);
    }
    Ok(())
}

/// Recebe o inventário enviado por um agente e grava no banco.
/// Uma submissão para um hostname já conhecido sobrescreve o registro
/// existente; nunca cria uma segunda linha.
#[utoipa::path(
    post,
    path = "/api/inventario",
    request_body = DadosComputador,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dados gravados", body = RespostaStatus),
        (status = 401, description = "Não autorizado", body = RespostaStatus),
        (status = 422, description = "Payload inválido", body = RespostaStatus),
        (status = 500, description = "Falha de persistência", body = RespostaStatus)
    ),
    tag = "Inventário"
)]
async fn receber_inventario(
    Extension(trace_id): Extension<TraceId>,
    State(state): State<AppState>,
    Json(dados): Json<DadosComputador>,
) -> Result<Json<RespostaStatus>, ApiError> {
    validar(&dados)?;

    state.store.upsert_computador(&dados).await.map_err(|e| {
        tracing::error!(
            trace_id = %trace_id,
            hostname = %dados.hostname,
            error = %e,
            "Failed to upsert inventory record"
        );
        ApiError::from(e)
    })?;

    tracing::info!(trace_id = %trace_id, hostname = %dados.hostname, "Inventory received");

    Ok(Json(RespostaStatus {
        status: StatusResposta::Sucesso,
        mensagem: "Dados recebidos".to_string(),
    }))
}

/// Lista todos os computadores, do coletado mais recentemente para o mais
/// antigo.
#[utoipa::path(
    get,
    path = "/api/computadores",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Inventário completo", body = RespostaComputadores),
        (status = 401, description = "Não autorizado", body = RespostaStatus),
        (status = 500, description = "Falha de persistência", body = RespostaStatus)
    ),
    tag = "Inventário"
)]
async fn listar_computadores(
    Extension(trace_id): Extension<TraceId>,
    State(state): State<AppState>,
) -> Result<Json<RespostaComputadores>, ApiError> {
    let computadores = state.store.listar_por_coleta().await.map_err(|e| {
        tracing::error!(trace_id = %trace_id, error = %e, "Failed to list inventory");
        ApiError::from(e)
    })?;
    Ok(Json(RespostaComputadores { computadores }))
}

/// Histórico de coletas. Como o upsert mantém uma linha por hostname, o
/// conteúdo é o mesmo de `/api/computadores`.
#[utoipa::path(
    get,
    path = "/api/historico",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Histórico de coletas", body = RespostaHistorico),
        (status = 401, description = "Não autorizado", body = RespostaStatus),
        (status = 500, description = "Falha de persistência", body = RespostaStatus)
    ),
    tag = "Inventário"
)]
async fn listar_historico(
    Extension(trace_id): Extension<TraceId>,
    State(state): State<AppState>,
) -> Result<Json<RespostaHistorico>, ApiError> {
    let historico = state.store.listar_por_coleta().await.map_err(|e| {
        tracing::error!(trace_id = %trace_id, error = %e, "Failed to list history");
        ApiError::from(e)
    })?;
    Ok(Json(RespostaHistorico { historico }))
}

/// Registro mais recente de cada hostname, em ordem alfabética.
#[utoipa::path(
    get,
    path = "/api/ativos",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Computadores ativos", body = RespostaAtivos),
        (status = 401, description = "Não autorizado", body = RespostaStatus),
        (status = 500, description = "Falha de persistência", body = RespostaStatus)
    ),
    tag = "Inventário"
)]
async fn listar_ativos(
    Extension(trace_id): Extension<TraceId>,
    State(state): State<AppState>,
) -> Result<Json<RespostaAtivos>, ApiError> {
    let ativos = state.store.listar_por_hostname().await.map_err(|e| {
        tracing::error!(trace_id = %trace_id, error = %e, "Failed to list active hosts");
        ApiError::from(e)
    })?;
    Ok(Json(RespostaAtivos { ativos }))
}

use axum::middleware;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::state::AppState;
use crate::{api, auth, logging};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "API Inventário",
        description = "API de coleta de inventário de computadores",
    ),
    tags(
        (name = "Sistema", description = "Identificação do serviço"),
        (name = "Inventário", description = "Coleta e consulta do inventário")
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            utoipa::openapi::security::SecurityScheme::Http(utoipa::openapi::security::Http::new(
                utoipa::openapi::security::HttpAuthScheme::Bearer,
            )),
        );
    }
}

/// Assembles the HTTP application: public root, `/api` routes behind the
/// bearer middleware, the CORS policy and Swagger UI at `/docs`.
pub fn build_http_app(state: AppState) -> Router {
    let (public_router, public_spec) = api::system::rotas_publicas().split_for_parts();
    let (protected_router, protected_spec) = api::inventario::rotas_protegidas().split_for_parts();

    let mut spec = ApiDoc::openapi();
    spec.merge(public_spec);
    spec.merge(protected_spec);

    let cors = match &state.config.cors_allowed_origin {
        // Origin was parsed at startup; only this origin may call from a browser
        Some(origin) => CorsLayer::new()
            .allow_origin(origin.clone())
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    public_router
        .merge(protected_router.layer(middleware::from_fn_with_state(
            state.clone(),
            auth::bearer_auth_middleware,
        )))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/v1/openapi.json", spec))
        .layer(cors)
        .layer(middleware::from_fn(logging::request_logging))
}

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod cli;
pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod models;
pub mod services;

use crate::config::AppState;

// A tabela rota→handler, uma só e canônica. CORS totalmente aberto, como na
// fonte; sem autenticação por cabeçalho.
pub fn app(state: AppState) -> Router {
    let rotas_auth = Router::new()
        .route("/login/advogado", post(handlers::auth::login_advogado))
        .route("/login/cliente", post(handlers::auth::login_cliente))
        .route("/advogado", post(handlers::auth::cadastrar_advogado));

    let rotas_clientes = Router::new()
        .route(
            "/clientes",
            post(handlers::clientes::cadastrar_cliente).get(handlers::clientes::listar_clientes),
        )
        .route(
            "/cliente/{identificador}/processos",
            get(handlers::clientes::processos_do_cliente),
        );

    let rotas_processos = Router::new()
        .route("/processos", post(handlers::processos::cadastrar_processo))
        .route("/processos/vincular", post(handlers::processos::vincular))
        .route("/processos/{id}", delete(handlers::processos::excluir))
        .route(
            "/advogado/{identificadorA}/processos",
            get(handlers::processos::listar_por_advogado),
        );

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .merge(rotas_auth)
        .merge(rotas_clientes)
        .merge(rotas_processos)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

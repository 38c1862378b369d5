use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::error::AppError, config::AppState, models::advogado::Advogado,
    models::cliente::Cliente,
};

// A fonte trata string vazia como campo ausente; `required` sozinho só
// barra null, daí o `length` junto.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginPayload {
    #[validate(
        required(message = "Email e senha são obrigatórios"),
        length(min = 1, message = "Email e senha são obrigatórios")
    )]
    #[schema(example = "carla@adv.com")]
    pub email: Option<String>,

    #[validate(
        required(message = "Email e senha são obrigatórios"),
        length(min = 1, message = "Email e senha são obrigatórios")
    )]
    pub senha: Option<String>,
}

// POST /login/advogado
#[utoipa::path(
    post,
    path = "/login/advogado",
    tag = "Auth",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Login bem-sucedido", body = Advogado),
        (status = 400, description = "Email ou senha ausentes"),
        (status = 401, description = "Email ou senha incorretos")
    )
)]
pub async fn login_advogado(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let advogado = app_state
        .auth_service
        .login_advogado(
            payload.email.as_deref().unwrap_or_default(),
            payload.senha.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok(Json(json!({
        "success": true,
        "message": "Login bem-sucedido",
        "advogado": advogado,
    })))
}

// POST /login/cliente
#[utoipa::path(
    post,
    path = "/login/cliente",
    tag = "Auth",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Login bem-sucedido", body = Cliente),
        (status = 400, description = "Email ou senha ausentes"),
        (status = 401, description = "Email ou senha incorretos")
    )
)]
pub async fn login_cliente(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let cliente = app_state
        .auth_service
        .login_cliente(
            payload.email.as_deref().unwrap_or_default(),
            payload.senha.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok(Json(json!({
        "success": true,
        "message": "Login bem-sucedido",
        "cliente": cliente,
    })))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CadastrarAdvogadoPayload {
    #[validate(
        required(message = "Campo obrigatório: email"),
        email(message = "E-mail inválido")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "Campo obrigatório: senha"),
        length(min = 1, message = "Campo obrigatório: senha")
    )]
    pub senha: Option<String>,
}

// POST /advogado — auto-cadastro mínimo usado para semear contas.
#[utoipa::path(
    post,
    path = "/advogado",
    tag = "Auth",
    request_body = CadastrarAdvogadoPayload,
    responses(
        (status = 201, description = "Advogado cadastrado com sucesso"),
        (status = 400, description = "Campos obrigatórios ausentes"),
        (status = 409, description = "E-mail já cadastrado")
    )
)]
pub async fn cadastrar_advogado(
    State(app_state): State<AppState>,
    Json(payload): Json<CadastrarAdvogadoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    tracing::info!(email = payload.email.as_deref(), "cadastro de advogado");

    app_state
        .auth_service
        .cadastrar_advogado(
            payload.email.as_deref().unwrap_or_default(),
            payload.senha.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Advogado cadastrado com sucesso",
        })),
    ))
}

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::{datas::data_br_para_iso, error::AppError},
    config::AppState,
    models::processo::{ProcessoDoAdvogado, StatusProcesso},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CadastrarProcessoPayload {
    #[validate(
        required(message = "Campo obrigatório: assunto"),
        length(min = 1, message = "Campo obrigatório: assunto")
    )]
    #[schema(example = "Cobrança indevida")]
    pub assunto: Option<String>,

    // Conjunto fechado; ausente vira Pendente.
    pub status: Option<StatusProcesso>,

    #[validate(
        required(message = "Campo obrigatório: numprocesso"),
        length(min = 1, message = "Campo obrigatório: numprocesso")
    )]
    #[schema(example = "0001234-56.2024.8.26.0100")]
    pub numprocesso: Option<String>,

    pub comarca: Option<String>,

    #[serde(rename = "identificadorA")]
    #[validate(required(message = "Campo obrigatório: identificadorA"))]
    #[schema(example = "ADV-482913")]
    pub identificador_a: Option<String>,

    #[serde(rename = "dataP")]
    #[schema(example = "05/03/2024")]
    pub data_p: Option<String>,
}

// POST /processos
#[utoipa::path(
    post,
    path = "/processos",
    tag = "Processos",
    request_body = CadastrarProcessoPayload,
    responses(
        (status = 201, description = "Processo cadastrado com sucesso"),
        (status = 400, description = "Campos ausentes, data inválida ou advogado não encontrado"),
        (status = 409, description = "Número de processo já cadastrado")
    )
)]
pub async fn cadastrar_processo(
    State(app_state): State<AppState>,
    Json(payload): Json<CadastrarProcessoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    tracing::info!(
        numprocesso = payload.numprocesso.as_deref(),
        identificador_a = payload.identificador_a.as_deref(),
        "cadastro de processo"
    );

    let data_p = data_br_para_iso(payload.data_p.as_deref())?;

    let processo_id = app_state
        .processo_service
        .cadastrar(
            payload.assunto.as_deref().unwrap_or_default(),
            payload.status.unwrap_or_default(),
            payload.numprocesso.as_deref().unwrap_or_default(),
            payload.comarca.as_deref(),
            payload.identificador_a.as_deref().unwrap_or_default(),
            data_p,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Processo cadastrado com sucesso",
            "processoId": processo_id,
        })),
    ))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct VincularPayload {
    #[validate(required(message = "IDs obrigatórios"))]
    pub processo_id: Option<i64>,

    #[validate(required(message = "IDs obrigatórios"))]
    pub cliente_id: Option<i64>,
}

// POST /processos/vincular
#[utoipa::path(
    post,
    path = "/processos/vincular",
    tag = "Processos",
    request_body = VincularPayload,
    responses(
        (status = 200, description = "Vinculado com sucesso"),
        (status = 400, description = "IDs ausentes"),
        (status = 404, description = "Cliente ou processo não encontrado"),
        (status = 409, description = "Par já vinculado")
    )
)]
pub async fn vincular(
    State(app_state): State<AppState>,
    Json(payload): Json<VincularPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    tracing::info!(
        processo_id = payload.processo_id,
        cliente_id = payload.cliente_id,
        "vínculo cliente-processo"
    );

    app_state
        .processo_service
        .vincular(
            payload.processo_id.unwrap_or_default(),
            payload.cliente_id.unwrap_or_default(),
        )
        .await?;

    Ok(Json(json!({
        "success": true,
        "message": "Vinculado com sucesso",
    })))
}

// GET /advogado/{identificadorA}/processos — array puro, fiel à fonte.
#[utoipa::path(
    get,
    path = "/advogado/{identificadorA}/processos",
    tag = "Processos",
    params(
        ("identificadorA" = String, Path, description = "Código externo do advogado")
    ),
    responses(
        (status = 200, description = "Processos do advogado", body = Vec<ProcessoDoAdvogado>)
    )
)]
pub async fn listar_por_advogado(
    State(app_state): State<AppState>,
    Path(identificador_a): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let processos = app_state
        .processo_service
        .listar_por_advogado(&identificador_a)
        .await?;
    Ok(Json(processos))
}

// DELETE /processos/{id}
#[utoipa::path(
    delete,
    path = "/processos/{id}",
    tag = "Processos",
    params(
        ("id" = i64, Path, description = "Id interno do processo")
    ),
    responses(
        (status = 200, description = "Processo removido com sucesso"),
        (status = 404, description = "Processo não encontrado")
    )
)]
pub async fn excluir(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(id, "exclusão de processo");
    app_state.processo_service.excluir(id).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Processo removido com sucesso",
    })))
}

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
    common::{datas::data_br_para_iso, error::AppError, validacao::IDENTIFICADOR_RE},
    config::AppState,
    models::cliente::{ClientePerfil, ClienteResumo},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CadastrarClientePayload {
    // Gerado no lado do chamador (string aleatória de 6 dígitos no painel).
    #[validate(
        required(message = "Campo obrigatório: identificador"),
        regex(
            path = *IDENTIFICADOR_RE,
            message = "Identificador deve ter entre 3 e 20 caracteres alfanuméricos"
        )
    )]
    #[schema(example = "482913")]
    pub identificador: Option<String>,

    #[validate(
        required(message = "Campo obrigatório: nome"),
        length(min = 1, message = "Campo obrigatório: nome")
    )]
    #[schema(example = "Ana")]
    pub nome: Option<String>,

    pub sobrenome: Option<String>,

    // "DD/MM/AAAA"; a conversão acontece no handler, antes do banco.
    #[schema(example = "20/05/1990")]
    pub data_nascimento: Option<String>,

    #[validate(
        required(message = "Campo obrigatório: email"),
        email(message = "E-mail inválido")
    )]
    #[schema(example = "ana@x.com")]
    pub email: Option<String>,

    #[validate(
        required(message = "Campo obrigatório: cpf"),
        length(min = 11, max = 14, message = "CPF inválido")
    )]
    #[schema(example = "11122233344")]
    pub cpf: Option<String>,

    pub celular: Option<String>,

    #[validate(
        required(message = "Campo obrigatório: senha"),
        length(min = 1, message = "Campo obrigatório: senha")
    )]
    pub senha: Option<String>,
}

// POST /clientes
#[utoipa::path(
    post,
    path = "/clientes",
    tag = "Clientes",
    request_body = CadastrarClientePayload,
    responses(
        (status = 201, description = "Cliente cadastrado com sucesso"),
        (status = 400, description = "Campos obrigatórios ausentes ou data inválida"),
        (status = 409, description = "E-mail, CPF ou identificador já em uso")
    )
)]
pub async fn cadastrar_cliente(
    State(app_state): State<AppState>,
    Json(payload): Json<CadastrarClientePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    tracing::info!(
        identificador = payload.identificador.as_deref(),
        email = payload.email.as_deref(),
        "cadastro de cliente"
    );

    let data_nascimento = data_br_para_iso(payload.data_nascimento.as_deref())?;

    let cliente_id = app_state
        .cliente_service
        .cadastrar(
            payload.identificador.as_deref().unwrap_or_default(),
            payload.nome.as_deref().unwrap_or_default(),
            payload.sobrenome.as_deref(),
            data_nascimento,
            payload.email.as_deref().unwrap_or_default(),
            payload.cpf.as_deref().unwrap_or_default(),
            payload.celular.as_deref(),
            payload.senha.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Cliente cadastrado com sucesso",
            "clienteId": cliente_id,
        })),
    ))
}

// GET /clientes — array puro, fiel à fonte.
#[utoipa::path(
    get,
    path = "/clientes",
    tag = "Clientes",
    responses(
        (status = 200, description = "Lista de clientes", body = Vec<ClienteResumo>)
    )
)]
pub async fn listar_clientes(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let clientes = app_state.cliente_service.listar().await?;
    Ok(Json(clientes))
}

// GET /cliente/{identificador}/processos — o padrão do identificador é
// checado antes de qualquer acesso ao banco.
#[utoipa::path(
    get,
    path = "/cliente/{identificador}/processos",
    tag = "Clientes",
    params(
        ("identificador" = String, Path, description = "Código externo do cliente")
    ),
    responses(
        (status = 200, description = "Perfil do cliente e processos vinculados", body = ClientePerfil),
        (status = 400, description = "Identificador inválido"),
        (status = 404, description = "Cliente não encontrado")
    )
)]
pub async fn processos_do_cliente(
    State(app_state): State<AppState>,
    Path(identificador): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !IDENTIFICADOR_RE.is_match(&identificador) {
        return Err(AppError::IdentificadorInvalido);
    }

    let (cliente, processos) = app_state
        .cliente_service
        .processos_do_cliente(&identificador)
        .await?;

    Ok(Json(json!({
        "success": true,
        "cliente": cliente,
        "processos": processos,
    })))
}

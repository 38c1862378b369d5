use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

// Taxonomia de erros da aplicação, com `thiserror` para melhor ergonomia.
// Toda resposta de erro segue o envelope `{ "success": false, "message": ... }`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Data inválida: {0}")]
    DataInvalida(String),

    #[error("Identificador deve ter entre 3 e 20 caracteres alfanuméricos")]
    IdentificadorInvalido,

    #[error("Email ou senha incorretos")]
    CredenciaisInvalidas,

    // O cadastro de processo pré-checa o identificadorA; a fonte responde 400.
    #[error("Advogado não encontrado")]
    AdvogadoNaoEncontrado,

    #[error("Cliente não encontrado")]
    ClienteNaoEncontrado,

    #[error("Processo não encontrado")]
    ProcessoNaoEncontrado,

    #[error("Cliente ou processo não encontrado")]
    ClienteOuProcessoNaoEncontrado,

    #[error("E-mail já cadastrado")]
    EmailJaExiste,

    #[error("CPF já cadastrado")]
    CpfJaExiste,

    #[error("Identificador já cadastrado")]
    IdentificadorJaExiste,

    #[error("Número de processo já cadastrado")]
    NumProcessoJaExiste,

    #[error("Já vinculado")]
    JaVinculado,

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut detalhes = std::collections::HashMap::new();
                for (campo, erros_campo) in errors.field_errors() {
                    let mensagens: Vec<String> = erros_campo
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    detalhes.insert(campo.to_string(), mensagens);
                }
                let body = Json(json!({
                    "success": false,
                    "message": "Um ou mais campos são inválidos",
                    "detalhes": detalhes,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }

            AppError::DataInvalida(data) => (
                StatusCode::BAD_REQUEST,
                format!("Data inválida: {data} (esperado DD/MM/AAAA)"),
            ),
            AppError::IdentificadorInvalido => (
                StatusCode::BAD_REQUEST,
                "Identificador deve ter entre 3 e 20 caracteres alfanuméricos".into(),
            ),
            AppError::CredenciaisInvalidas => {
                (StatusCode::UNAUTHORIZED, "Email ou senha incorretos".into())
            }
            AppError::AdvogadoNaoEncontrado => {
                (StatusCode::BAD_REQUEST, "Advogado não encontrado".into())
            }
            AppError::ClienteNaoEncontrado => {
                (StatusCode::NOT_FOUND, "Cliente não encontrado".into())
            }
            AppError::ProcessoNaoEncontrado => {
                (StatusCode::NOT_FOUND, "Processo não encontrado".into())
            }
            AppError::ClienteOuProcessoNaoEncontrado => (
                StatusCode::NOT_FOUND,
                "Cliente ou processo não encontrado".into(),
            ),
            AppError::EmailJaExiste => (StatusCode::CONFLICT, "Este e-mail já está em uso".into()),
            AppError::CpfJaExiste => (StatusCode::CONFLICT, "Este CPF já está em uso".into()),
            AppError::IdentificadorJaExiste => (
                StatusCode::CONFLICT,
                "Este identificador já está em uso".into(),
            ),
            AppError::NumProcessoJaExiste => (
                StatusCode::CONFLICT,
                "Este número de processo já está cadastrado".into(),
            ),
            AppError::JaVinculado => (StatusCode::CONFLICT, "Já vinculado".into()),

            // Todos os outros erros (DatabaseError, InternalServerError) viram 500.
            // O detalhe vai para o log do servidor; o chamador recebe só a
            // mensagem genérica.
            ref e => {
                tracing::error!("Erro interno do servidor: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Erro no servidor".into())
            }
        };

        let body = Json(json!({ "success": false, "message": message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credenciais_invalidas_viram_401() {
        let resp = AppError::CredenciaisInvalidas.into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn duplicados_viram_409() {
        for err in [
            AppError::EmailJaExiste,
            AppError::CpfJaExiste,
            AppError::NumProcessoJaExiste,
            AppError::JaVinculado,
        ] {
            assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
        }
    }

    #[test]
    fn erro_de_banco_vira_500_generico() {
        let resp = AppError::DatabaseError(sqlx::Error::PoolClosed).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

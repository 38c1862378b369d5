use chrono::NaiveDate;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::cliente::{Cliente, ClientePerfil, ClienteResumo},
};

#[derive(Clone)]
pub struct ClienteRepository {
    pool: PgPool,
}

impl ClienteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn buscar_por_login(
        &self,
        email: &str,
        senha: &str,
    ) -> Result<Option<Cliente>, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>(
            "SELECT id, identificador, nome, sobrenome, email
             FROM cliente
             WHERE email = $1 AND senha = $2",
        )
        .bind(email)
        .bind(senha)
        .fetch_optional(&self.pool)
        .await?;
        Ok(cliente)
    }

    // Converte violação de índice único no erro de conflito específico,
    // distinguindo o campo duplicado pelo nome da constraint.
    #[allow(clippy::too_many_arguments)]
    pub async fn criar(
        &self,
        identificador: &str,
        nome: &str,
        sobrenome: Option<&str>,
        data_nascimento: Option<NaiveDate>,
        email: &str,
        cpf: &str,
        celular: Option<&str>,
        senha: &str,
    ) -> Result<i64, AppError> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO cliente (identificador, nome, sobrenome, data_nascimento, email, cpf, celular, senha)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING id",
        )
        .bind(identificador)
        .bind(nome)
        .bind(sobrenome)
        .bind(data_nascimento)
        .bind(email)
        .bind(cpf)
        .bind(celular)
        .bind(senha)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return match db_err.constraint() {
                        Some("cliente_email_key") => AppError::EmailJaExiste,
                        Some("cliente_cpf_key") => AppError::CpfJaExiste,
                        _ => AppError::IdentificadorJaExiste,
                    };
                }
            }
            AppError::DatabaseError(e)
        })?;
        Ok(id)
    }

    pub async fn listar(&self) -> Result<Vec<ClienteResumo>, AppError> {
        let clientes = sqlx::query_as::<_, ClienteResumo>(
            "SELECT id, nome, sobrenome, advogado_id, celular, data_nascimento, email, cpf
             FROM cliente
             ORDER BY nome",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(clientes)
    }

    pub async fn buscar_perfil_por_identificador(
        &self,
        identificador: &str,
    ) -> Result<Option<ClientePerfil>, AppError> {
        let perfil = sqlx::query_as::<_, ClientePerfil>(
            "SELECT id, nome, sobrenome, email, celular, data_nascimento, cpf, advogado_id
             FROM cliente
             WHERE identificador = $1
             LIMIT 1",
        )
        .bind(identificador)
        .fetch_optional(&self.pool)
        .await?;
        Ok(perfil)
    }

    pub async fn existe(&self, id: i64) -> Result<bool, AppError> {
        let linha: Option<(i64,)> = sqlx::query_as("SELECT id FROM cliente WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(linha.is_some())
    }
}

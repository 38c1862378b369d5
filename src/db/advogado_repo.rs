use sqlx::PgPool;

use crate::{common::error::AppError, models::advogado::Advogado};

// O repositório de advogados, responsável por todas as interações com a
// tabela 'advogado'.
#[derive(Clone)]
pub struct AdvogadoRepository {
    pool: PgPool,
}

impl AdvogadoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Busca pelo par exato email+senha (a fonte guarda senha em texto puro e
    // compara por igualdade; não-objetivo endurecer isso).
    pub async fn buscar_por_login(
        &self,
        email: &str,
        senha: &str,
    ) -> Result<Option<Advogado>, AppError> {
        let advogado = sqlx::query_as::<_, Advogado>(
            "SELECT id, nome, sobrenome, email, oab, celular, identificador_a
             FROM advogado
             WHERE email = $1 AND senha = $2",
        )
        .bind(email)
        .bind(senha)
        .fetch_optional(&self.pool)
        .await?;
        Ok(advogado)
    }

    // Resolve o identificadorA para o id interno; `None` quando não há
    // advogado com esse código.
    pub async fn buscar_id_por_identificador(
        &self,
        identificador_a: &str,
    ) -> Result<Option<i64>, AppError> {
        let id: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM advogado WHERE identificador_a = $1")
                .bind(identificador_a)
                .fetch_optional(&self.pool)
                .await?;
        Ok(id.map(|(id,)| id))
    }

    // Auto-cadastro mínimo de advogado (email + senha).
    pub async fn criar(&self, email: &str, senha: &str) -> Result<i64, AppError> {
        let (id,): (i64,) =
            sqlx::query_as("INSERT INTO advogado (email, senha) VALUES ($1, $2) RETURNING id")
                .bind(email)
                .bind(senha)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    if let Some(db_err) = e.as_database_error() {
                        if db_err.is_unique_violation() {
                            return AppError::EmailJaExiste;
                        }
                    }
                    AppError::DatabaseError(e)
                })?;
        Ok(id)
    }
}

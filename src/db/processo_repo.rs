use chrono::NaiveDate;
use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::processo::{ProcessoDoAdvogado, ProcessoDoClienteRow, StatusProcesso},
};

#[derive(Clone)]
pub struct ProcessoRepository {
    pool: PgPool,
}

impl ProcessoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn criar(
        &self,
        assunto: &str,
        status: StatusProcesso,
        numprocesso: &str,
        comarca: Option<&str>,
        identificador_a: &str,
        data_p: Option<NaiveDate>,
    ) -> Result<i64, AppError> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO processo (assunto, status, numprocesso, comarca, identificador_a, data_p)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(assunto)
        .bind(status)
        .bind(numprocesso)
        .bind(comarca)
        .bind(identificador_a)
        .bind(data_p)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::NumProcessoJaExiste;
                }
            }
            AppError::DatabaseError(e)
        })?;
        Ok(id)
    }

    // Processos do advogado com o nome do cliente vinculado, se houver.
    // Um processo vinculado a N clientes aparece N vezes, como na fonte.
    pub async fn listar_por_advogado(
        &self,
        identificador_a: &str,
    ) -> Result<Vec<ProcessoDoAdvogado>, AppError> {
        let processos = sqlx::query_as::<_, ProcessoDoAdvogado>(
            "SELECT p.id, p.numprocesso, p.assunto, p.status, p.comarca,
                    TO_CHAR(p.data_p, 'DD/MM/YYYY') AS data_p,
                    p.identificador_a,
                    c.nome AS cliente_nome
             FROM processo p
             LEFT JOIN cliente_processo cp ON p.id = cp.processo_id
             LEFT JOIN cliente c ON cp.cliente_id = c.id
             WHERE p.identificador_a = $1
             ORDER BY p.id",
        )
        .bind(identificador_a)
        .fetch_all(&self.pool)
        .await?;
        Ok(processos)
    }

    pub async fn listar_por_cliente(
        &self,
        cliente_id: i64,
    ) -> Result<Vec<ProcessoDoClienteRow>, AppError> {
        let processos = sqlx::query_as::<_, ProcessoDoClienteRow>(
            "SELECT p.numprocesso, p.assunto, p.status, p.comarca,
                    TO_CHAR(p.data_p, 'DD/MM/YYYY') AS data_formatada,
                    a.nome AS advogado_nome,
                    a.sobrenome AS advogado_sobrenome,
                    a.oab
             FROM processo p
             INNER JOIN cliente_processo cp ON p.id = cp.processo_id
             LEFT JOIN advogado a ON p.identificador_a = a.identificador_a
             WHERE cp.cliente_id = $1
             ORDER BY p.data_p DESC NULLS LAST",
        )
        .bind(cliente_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(processos)
    }

    pub async fn existe(&self, id: i64) -> Result<bool, AppError> {
        let linha: Option<(i64,)> = sqlx::query_as("SELECT id FROM processo WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(linha.is_some())
    }

    // Vínculo atômico: a chave composta do banco decide a unicidade do par.
    // Zero linhas afetadas significa que o par já existia.
    pub async fn vincular(&self, cliente_id: i64, processo_id: i64) -> Result<u64, AppError> {
        let resultado = sqlx::query(
            "INSERT INTO cliente_processo (cliente_id, processo_id)
             VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(cliente_id)
        .bind(processo_id)
        .execute(&self.pool)
        .await?;
        Ok(resultado.rows_affected())
    }

    // As duas exclusões rodam no mesmo executor para que o serviço possa
    // envolvê-las numa transação.
    pub async fn excluir_vinculos<'e, E>(&self, executor: E, processo_id: i64) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("DELETE FROM cliente_processo WHERE processo_id = $1")
            .bind(processo_id)
            .execute(executor)
            .await?;
        Ok(())
    }

    pub async fn excluir<'e, E>(&self, executor: E, processo_id: i64) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let resultado = sqlx::query("DELETE FROM processo WHERE id = $1")
            .bind(processo_id)
            .execute(executor)
            .await?;
        Ok(resultado.rows_affected())
    }
}

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::{AdvogadoRepository, ClienteRepository, ProcessoRepository},
    models::processo::{ProcessoDoAdvogado, StatusProcesso},
};

#[derive(Clone)]
pub struct ProcessoService {
    processo_repo: ProcessoRepository,
    advogado_repo: AdvogadoRepository,
    cliente_repo: ClienteRepository,
    pool: PgPool,
}

impl ProcessoService {
    pub fn new(
        processo_repo: ProcessoRepository,
        advogado_repo: AdvogadoRepository,
        cliente_repo: ClienteRepository,
        pool: PgPool,
    ) -> Self {
        Self {
            processo_repo,
            advogado_repo,
            cliente_repo,
            pool,
        }
    }

    // Pré-checa o identificadorA antes do insert; a coluna não tem FK.
    pub async fn cadastrar(
        &self,
        assunto: &str,
        status: StatusProcesso,
        numprocesso: &str,
        comarca: Option<&str>,
        identificador_a: &str,
        data_p: Option<NaiveDate>,
    ) -> Result<i64, AppError> {
        self.advogado_repo
            .buscar_id_por_identificador(identificador_a)
            .await?
            .ok_or(AppError::AdvogadoNaoEncontrado)?;

        let id = self
            .processo_repo
            .criar(assunto, status, numprocesso, comarca, identificador_a, data_p)
            .await?;
        tracing::info!(id, numprocesso, "processo cadastrado");
        Ok(id)
    }

    pub async fn listar_por_advogado(
        &self,
        identificador_a: &str,
    ) -> Result<Vec<ProcessoDoAdvogado>, AppError> {
        self.processo_repo.listar_por_advogado(identificador_a).await
    }

    // 404 se qualquer lado do par não existir; o insert em si é atômico e a
    // chave composta decide a unicidade (zero linhas afetadas = já vinculado).
    pub async fn vincular(&self, processo_id: i64, cliente_id: i64) -> Result<(), AppError> {
        let processo_existe = self.processo_repo.existe(processo_id).await?;
        let cliente_existe = self.cliente_repo.existe(cliente_id).await?;
        if !processo_existe || !cliente_existe {
            return Err(AppError::ClienteOuProcessoNaoEncontrado);
        }

        let afetadas = self.processo_repo.vincular(cliente_id, processo_id).await?;
        if afetadas == 0 {
            return Err(AppError::JaVinculado);
        }
        tracing::info!(processo_id, cliente_id, "vínculo criado");
        Ok(())
    }

    // Exclui os vínculos e o processo na mesma transação: um id inexistente
    // devolve 404 sem mutar nada (rollback no drop da transação).
    pub async fn excluir(&self, processo_id: i64) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        self.processo_repo
            .excluir_vinculos(&mut *tx, processo_id)
            .await?;
        let afetadas = self.processo_repo.excluir(&mut *tx, processo_id).await?;
        if afetadas == 0 {
            return Err(AppError::ProcessoNaoEncontrado);
        }

        tx.commit().await?;
        tracing::info!(processo_id, "processo removido");
        Ok(())
    }
}

use chrono::NaiveDate;

use crate::{
    common::error::AppError,
    db::{ClienteRepository, ProcessoRepository},
    models::{
        cliente::{ClientePerfil, ClienteResumo},
        processo::ProcessoDoCliente,
    },
};

#[derive(Clone)]
pub struct ClienteService {
    cliente_repo: ClienteRepository,
    processo_repo: ProcessoRepository,
}

impl ClienteService {
    pub fn new(cliente_repo: ClienteRepository, processo_repo: ProcessoRepository) -> Self {
        Self {
            cliente_repo,
            processo_repo,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn cadastrar(
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
        let id = self
            .cliente_repo
            .criar(
                identificador,
                nome,
                sobrenome,
                data_nascimento,
                email,
                cpf,
                celular,
                senha,
            )
            .await?;
        tracing::info!(id, identificador, "cliente cadastrado");
        Ok(id)
    }

    pub async fn listar(&self) -> Result<Vec<ClienteResumo>, AppError> {
        self.cliente_repo.listar().await
    }

    // Perfil + processos vinculados; 404 quando o identificador não resolve.
    pub async fn processos_do_cliente(
        &self,
        identificador: &str,
    ) -> Result<(ClientePerfil, Vec<ProcessoDoCliente>), AppError> {
        let perfil = self
            .cliente_repo
            .buscar_perfil_por_identificador(identificador)
            .await?
            .ok_or(AppError::ClienteNaoEncontrado)?;

        let processos = self
            .processo_repo
            .listar_por_cliente(perfil.id)
            .await?
            .into_iter()
            .map(ProcessoDoCliente::from)
            .collect();

        Ok((perfil, processos))
    }
}

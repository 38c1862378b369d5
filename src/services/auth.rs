use crate::{
    common::error::AppError,
    db::{AdvogadoRepository, ClienteRepository},
    models::{advogado::Advogado, cliente::Cliente},
};

// Login por consulta direta email+senha, sem token nem sessão: a tela
// autenticada carrega a linha adiante como parâmetro de navegação.
#[derive(Clone)]
pub struct AuthService {
    advogado_repo: AdvogadoRepository,
    cliente_repo: ClienteRepository,
}

impl AuthService {
    pub fn new(advogado_repo: AdvogadoRepository, cliente_repo: ClienteRepository) -> Self {
        Self {
            advogado_repo,
            cliente_repo,
        }
    }

    pub async fn login_advogado(&self, email: &str, senha: &str) -> Result<Advogado, AppError> {
        self.advogado_repo
            .buscar_por_login(email, senha)
            .await?
            .ok_or(AppError::CredenciaisInvalidas)
    }

    pub async fn login_cliente(&self, email: &str, senha: &str) -> Result<Cliente, AppError> {
        self.cliente_repo
            .buscar_por_login(email, senha)
            .await?
            .ok_or(AppError::CredenciaisInvalidas)
    }

    pub async fn cadastrar_advogado(&self, email: &str, senha: &str) -> Result<i64, AppError> {
        let id = self.advogado_repo.criar(email, senha).await?;
        tracing::info!(id, "advogado cadastrado");
        Ok(id)
    }
}

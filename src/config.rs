use sqlx::{PgPool, postgres::PgPoolOptions};
use std::env;

use crate::{
    db::{AdvogadoRepository, ClienteRepository, ProcessoRepository},
    services::{AuthService, ClienteService, ProcessoService},
};

// O estado compartilhado que será acessível em toda a aplicação. O pool é
// construído uma vez aqui e injetado em todos os handlers; nunca um
// singleton escondido.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub cliente_service: ClienteService,
    pub processo_service: ProcessoService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL deve ser definida"))?;

        // A fonte fixava 10 conexões; aqui o limite vem do ambiente com o
        // mesmo padrão. Aquisição espera na fila em vez de falhar rápido.
        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);

        let db_pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::com_pool(db_pool))
    }

    // Monta o gráfico de dependências a partir de um pool já construído
    // (também usado pelos testes de contrato, com um pool preguiçoso).
    pub fn com_pool(db_pool: PgPool) -> Self {
        let advogado_repo = AdvogadoRepository::new(db_pool.clone());
        let cliente_repo = ClienteRepository::new(db_pool.clone());
        let processo_repo = ProcessoRepository::new(db_pool.clone());

        let auth_service = AuthService::new(advogado_repo.clone(), cliente_repo.clone());
        let cliente_service = ClienteService::new(cliente_repo.clone(), processo_repo.clone());
        let processo_service = ProcessoService::new(
            processo_repo,
            advogado_repo,
            cliente_repo,
            db_pool.clone(),
        );

        Self {
            db_pool,
            auth_service,
            cliente_service,
            processo_service,
        }
    }
}

/// Porta de escuta do servidor (APP_PORT, padrão 3000).
pub fn porta() -> u16 {
    env::var("APP_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(3000)
}

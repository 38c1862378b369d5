use tokio::net::TcpListener;

use lawbridge::config::{self, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve
    // iniciar. Uma falha de conexão durante uma requisição, por outro lado,
    // vira 500 só para aquela requisição.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let app = lawbridge::app(app_state);

    let addr = format!("0.0.0.0:{}", config::porta());
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!(
        "🚀 Servidor escutando em {}",
        listener
            .local_addr()
            .map(|a| a.to_string())
            .unwrap_or(addr)
    );
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}

use clap::Parser;
use lawbridge::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).compact().init();

    let cli = Cli::parse();

    if let Err(e) = lawbridge::cli::run(cli).await {
        eprintln!("Erro: {e}");
        std::process::exit(1);
    }

    Ok(())
}

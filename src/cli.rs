pub mod comandos;
pub mod http;

use clap::{Parser, Subcommand};

// As três telas do aplicativo viram subcomandos: login, painel do advogado e
// painel do cliente, mais os formulários de cadastro.
#[derive(Parser)]
#[command(name = "lawbridge")]
#[command(about = "LawBridge - cliente de terminal para a API de processos")]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "LAWBRIDGE_URL",
        default_value = "http://localhost:3000",
        help = "URL base da API"
    )]
    pub url: String,

    #[command(subcommand)]
    pub comando: Comando,
}

#[derive(Subcommand)]
pub enum Comando {
    #[command(about = "Login de advogado ou cliente")]
    Login {
        #[command(subcommand)]
        cmd: comandos::LoginCmd,
    },

    #[command(about = "Painel do advogado: processos e lista de clientes")]
    PainelAdvogado {
        #[arg(long = "identificador-a", help = "Código externo do advogado")]
        identificador_a: String,
    },

    #[command(about = "Painel do cliente: dados pessoais e processos vinculados")]
    PainelCliente {
        #[arg(long, help = "Código externo do cliente")]
        identificador: String,
    },

    #[command(about = "Cadastrar um cliente (identificador gerado localmente)")]
    CadastrarCliente(comandos::CadastrarClienteArgs),

    #[command(about = "Cadastrar um processo, com vínculo imediato opcional")]
    CadastrarProcesso(comandos::CadastrarProcessoArgs),

    #[command(about = "Excluir um processo e seus vínculos")]
    ExcluirProcesso {
        #[arg(long)]
        id: i64,
    },
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let api = http::ApiClient::new(cli.url.clone());

    match cli.comando {
        Comando::Login { cmd } => comandos::login(&api, cmd).await,
        Comando::PainelAdvogado { identificador_a } => {
            comandos::painel_advogado(&api, &identificador_a).await
        }
        Comando::PainelCliente { identificador } => {
            comandos::painel_cliente(&api, &identificador).await
        }
        Comando::CadastrarCliente(args) => comandos::cadastrar_cliente(&api, args).await,
        Comando::CadastrarProcesso(args) => comandos::cadastrar_processo(&api, args).await,
        Comando::ExcluirProcesso { id } => comandos::excluir_processo(&api, id).await,
    }
}

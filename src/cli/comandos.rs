use std::sync::LazyLock;
use std::time::Duration;

use clap::{Args, Subcommand};
use regex::Regex;
use serde_json::{Value, json};

use crate::cli::http::ApiClient;
use crate::common::validacao::EMAIL_RE;

// Checagem local de forma da data, como nos formulários do aplicativo: só o
// desenho DD/MM/AAAA; o calendário fica por conta do servidor.
static DATA_BR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").expect("regex de data"));

// Identificador gerado no lado do chamador: string aleatória de 6 dígitos,
// como o painel do advogado fazia.
pub fn gerar_identificador() -> String {
    let aleatorio = uuid::Uuid::new_v4().as_u128() % 900_000 + 100_000;
    aleatorio.to_string()
}

#[derive(Subcommand)]
pub enum LoginCmd {
    #[command(about = "Login de advogado")]
    Advogado {
        #[arg(long)]
        email: String,
        #[arg(long)]
        senha: String,
    },
    #[command(about = "Login de cliente")]
    Cliente {
        #[arg(long)]
        email: String,
        #[arg(long)]
        senha: String,
    },
}

fn checar_credenciais(email: &str, senha: &str) -> anyhow::Result<()> {
    if !EMAIL_RE.is_match(email) {
        anyhow::bail!("E-mail inválido");
    }
    if senha.is_empty() {
        anyhow::bail!("Senha é obrigatória");
    }
    Ok(())
}

pub async fn login(api: &ApiClient, cmd: LoginCmd) -> anyhow::Result<()> {
    let (caminho, email, senha, chave) = match &cmd {
        LoginCmd::Advogado { email, senha } => ("/login/advogado", email, senha, "advogado"),
        LoginCmd::Cliente { email, senha } => ("/login/cliente", email, senha, "cliente"),
    };
    checar_credenciais(email, senha)?;

    let resposta = api
        .post(caminho, &json!({ "email": email, "senha": senha }))
        .await?;

    println!("✓ Login bem-sucedido");
    if let Some(conta) = resposta.get(chave) {
        println!("{}", serde_json::to_string_pretty(conta)?);
    }
    Ok(())
}

// O painel do advogado busca os processos e a lista de clientes ao mesmo
// tempo, como a tela original fazia na montagem.
pub async fn painel_advogado(api: &ApiClient, identificador_a: &str) -> anyhow::Result<()> {
    let caminho_processos = format!("/advogado/{identificador_a}/processos");
    let (processos, clientes) = tokio::join!(
        api.get(&caminho_processos),
        api.get("/clientes"),
    );
    let processos = processos?;
    let clientes = clientes?;

    println!("== Processos ==");
    for p in processos.as_array().map(Vec::as_slice).unwrap_or_default() {
        println!(
            "#{} {} | {} | {} | cliente: {}",
            p["id"],
            texto(&p["numprocesso"]),
            texto(&p["assunto"]),
            texto(&p["status"]),
            p.get("cliente_nome")
                .and_then(Value::as_str)
                .unwrap_or("—"),
        );
    }

    println!("\n== Clientes ==");
    for c in clientes.as_array().map(Vec::as_slice).unwrap_or_default() {
        println!(
            "#{} {} {} | {} | CPF {}",
            c["id"],
            texto(&c["nome"]),
            c.get("sobrenome").and_then(Value::as_str).unwrap_or(""),
            texto(&c["email"]),
            texto(&c["cpf"]),
        );
    }
    Ok(())
}

pub async fn painel_cliente(api: &ApiClient, identificador: &str) -> anyhow::Result<()> {
    let resposta = api
        .get_com_timeout(
            &format!("/cliente/{identificador}/processos"),
            Duration::from_secs(10),
        )
        .await
        .map_err(|e| anyhow::anyhow!("{e}\nTente novamente executando o mesmo comando."))?;

    if let Some(cliente) = resposta.get("cliente") {
        println!(
            "{} {} | {}",
            texto(&cliente["nome"]),
            cliente
                .get("sobrenome")
                .and_then(Value::as_str)
                .unwrap_or(""),
            texto(&cliente["email"]),
        );
    }

    println!("\n== Processos vinculados ==");
    let processos = resposta
        .get("processos")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    if processos.is_empty() {
        println!("Nenhum processo vinculado.");
    }
    for p in &processos {
        println!(
            "{} | {} | [{}] | {} | {} (OAB {})",
            texto(&p["numero_processo"]),
            texto(&p["assunto"]),
            texto(&p["status"]),
            texto(&p["data"]),
            texto(&p["advogado_responsavel"]["nome"]),
            texto(&p["advogado_responsavel"]["oab"]),
        );
    }
    Ok(())
}

#[derive(Args)]
pub struct CadastrarClienteArgs {
    #[arg(long)]
    pub nome: String,
    #[arg(long)]
    pub sobrenome: Option<String>,
    #[arg(long, help = "Data de nascimento DD/MM/AAAA")]
    pub data_nascimento: Option<String>,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub cpf: String,
    #[arg(long)]
    pub celular: Option<String>,
    #[arg(long)]
    pub senha: String,
}

pub async fn cadastrar_cliente(api: &ApiClient, args: CadastrarClienteArgs) -> anyhow::Result<()> {
    if !EMAIL_RE.is_match(&args.email) {
        anyhow::bail!("E-mail inválido");
    }
    if let Some(data) = &args.data_nascimento {
        if !DATA_BR_RE.is_match(data) {
            anyhow::bail!("Data de nascimento deve estar no formato DD/MM/AAAA");
        }
    }

    let identificador = gerar_identificador();
    let resposta = api
        .post(
            "/clientes",
            &json!({
                "identificador": identificador,
                "nome": args.nome,
                "sobrenome": args.sobrenome,
                "data_nascimento": args.data_nascimento,
                "email": args.email,
                "cpf": args.cpf,
                "celular": args.celular,
                "senha": args.senha,
            }),
        )
        .await?;

    println!(
        "✓ Cliente cadastrado (id {}, identificador {identificador})",
        resposta.get("clienteId").cloned().unwrap_or(Value::Null)
    );
    Ok(())
}

#[derive(Args)]
pub struct CadastrarProcessoArgs {
    #[arg(long)]
    pub assunto: String,
    #[arg(long)]
    pub numprocesso: String,
    #[arg(long = "identificador-a")]
    pub identificador_a: String,
    #[arg(long)]
    pub comarca: Option<String>,
    #[arg(long, help = "Data do processo DD/MM/AAAA")]
    pub data_p: Option<String>,
    #[arg(long, help = "Pendente, Andamento ou Concluído")]
    pub status: Option<String>,
    #[arg(long, help = "Vincula o processo a este cliente logo após o cadastro")]
    pub cliente_id: Option<i64>,
}

pub async fn cadastrar_processo(
    api: &ApiClient,
    args: CadastrarProcessoArgs,
) -> anyhow::Result<()> {
    if let Some(data) = &args.data_p {
        if !DATA_BR_RE.is_match(data) {
            anyhow::bail!("Data deve estar no formato DD/MM/AAAA");
        }
    }

    let resposta = api
        .post(
            "/processos",
            &json!({
                "assunto": args.assunto,
                "numprocesso": args.numprocesso,
                "identificadorA": args.identificador_a,
                "comarca": args.comarca,
                "dataP": args.data_p,
                "status": args.status,
            }),
        )
        .await?;

    let processo_id = resposta.get("processoId").and_then(Value::as_i64);
    println!(
        "✓ Processo cadastrado (id {})",
        processo_id.map(|id| id.to_string()).unwrap_or_default()
    );

    // Vínculo imediato opcional, como no formulário do painel.
    if let (Some(cliente_id), Some(processo_id)) = (args.cliente_id, processo_id) {
        api.post(
            "/processos/vincular",
            &json!({ "processo_id": processo_id, "cliente_id": cliente_id }),
        )
        .await?;
        println!("✓ Vinculado ao cliente {cliente_id}");
    }
    Ok(())
}

pub async fn excluir_processo(api: &ApiClient, id: i64) -> anyhow::Result<()> {
    api.delete(&format!("/processos/{id}")).await?;
    println!("✓ Processo {id} removido");
    Ok(())
}

fn texto(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => "—".to_string(),
        outro => outro.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::validacao::IDENTIFICADOR_RE;

    #[test]
    fn identificador_gerado_tem_seis_digitos_e_passa_no_padrao_do_backend() {
        for _ in 0..100 {
            let id = gerar_identificador();
            assert_eq!(id.len(), 6, "{id}");
            assert!(id.chars().all(|c| c.is_ascii_digit()), "{id}");
            assert!(IDENTIFICADOR_RE.is_match(&id), "{id}");
        }
    }

    #[test]
    fn checagem_local_de_data_olha_apenas_a_forma() {
        assert!(DATA_BR_RE.is_match("31/02/2024"));
        assert!(!DATA_BR_RE.is_match("5/3/2024"));
        assert!(!DATA_BR_RE.is_match("2024-03-05"));
    }

    #[test]
    fn credenciais_vazias_falham_antes_da_rede() {
        assert!(checar_credenciais("ana@x.com", "").is_err());
        assert!(checar_credenciais("ana@x", "abc").is_err());
        assert!(checar_credenciais("ana@x.com", "abc").is_ok());
    }
}

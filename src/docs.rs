use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::login_advogado,
        handlers::auth::login_cliente,
        handlers::auth::cadastrar_advogado,

        // --- Clientes ---
        handlers::clientes::cadastrar_cliente,
        handlers::clientes::listar_clientes,
        handlers::clientes::processos_do_cliente,

        // --- Processos ---
        handlers::processos::cadastrar_processo,
        handlers::processos::vincular,
        handlers::processos::listar_por_advogado,
        handlers::processos::excluir,
    ),
    components(
        schemas(
            handlers::auth::LoginPayload,
            handlers::auth::CadastrarAdvogadoPayload,
            handlers::clientes::CadastrarClientePayload,
            handlers::processos::CadastrarProcessoPayload,
            handlers::processos::VincularPayload,
            models::advogado::Advogado,
            models::cliente::Cliente,
            models::cliente::ClienteResumo,
            models::cliente::ClientePerfil,
            models::processo::StatusProcesso,
            models::processo::ProcessoDoAdvogado,
            models::processo::ProcessoDoCliente,
            models::processo::AdvogadoResponsavel,
        )
    ),
    tags(
        (name = "Auth", description = "Login de advogados e clientes"),
        (name = "Clientes", description = "Cadastro e consulta de clientes"),
        (name = "Processos", description = "Cadastro, vínculo e exclusão de processos"),
    ),
    info(
        title = "LawBridge API",
        description = "Gestão de processos entre advogados e clientes"
    )
)]
pub struct ApiDoc;

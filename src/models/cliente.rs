use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// Eco do login do cliente (sem senha).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Cliente {
    pub id: i64,
    #[schema(example = "482913")]
    pub identificador: String,
    pub nome: String,
    pub sobrenome: Option<String>,
    pub email: String,
}

// Linha da listagem GET /clientes. O `advogado_id` aqui é sempre o id
// numérico (nulo quando o cliente não tem advogado fixo); ver DESIGN.md
// sobre a ambiguidade das duas variantes da fonte.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ClienteResumo {
    pub id: i64,
    pub nome: String,
    pub sobrenome: Option<String>,
    pub advogado_id: Option<i64>,
    pub celular: Option<String>,
    pub data_nascimento: Option<NaiveDate>,
    pub email: String,
    pub cpf: String,
}

// Cabeçalho da resposta GET /cliente/{identificador}/processos.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ClientePerfil {
    pub id: i64,
    pub nome: String,
    pub sobrenome: Option<String>,
    pub email: String,
    pub celular: Option<String>,
    pub data_nascimento: Option<NaiveDate>,
    pub cpf: String,
    pub advogado_id: Option<i64>,
}

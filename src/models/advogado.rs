use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// A linha ecoada no login nunca carrega a coluna `senha`: o SELECT do
// repositório simplesmente não a projeta.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Advogado {
    pub id: i64,
    pub nome: Option<String>,
    pub sobrenome: Option<String>,
    pub email: String,
    pub oab: Option<String>,
    pub celular: Option<String>,

    // No banco a coluna é snake_case; na fiação o nome histórico é mantido.
    #[serde(rename = "identificadorA")]
    #[sqlx(rename = "identificador_a")]
    #[schema(example = "ADV-482913")]
    pub identificador_a: Option<String>,
}

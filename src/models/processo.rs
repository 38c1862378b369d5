use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// Mapeia o CREATE TYPE status_processo do banco. Conjunto fechado, sem
// regras de transição: qualquer um dos três valores é aceito no cadastro.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "status_processo")]
pub enum StatusProcesso {
    #[default]
    Pendente,
    Andamento,
    #[sqlx(rename = "Concluído")]
    #[serde(rename = "Concluído")]
    Concluido,
}

// Linha da listagem GET /advogado/{identificadorA}/processos: o processo com
// o nome do cliente vinculado (LEFT JOIN, nulo quando não há vínculo).
// `data_p` já sai formatada DD/MM/AAAA pelo TO_CHAR da consulta.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ProcessoDoAdvogado {
    pub id: i64,
    pub numprocesso: String,
    pub assunto: String,
    pub status: StatusProcesso,
    pub comarca: Option<String>,
    #[serde(rename = "dataP")]
    #[sqlx(rename = "data_p")]
    #[schema(example = "05/03/2024")]
    pub data_p: Option<String>,
    #[serde(rename = "identificadorA")]
    #[sqlx(rename = "identificador_a")]
    pub identificador_a: String,
    pub cliente_nome: Option<String>,
}

// Linha crua da consulta de processos de um cliente; vira `ProcessoDoCliente`
// com os fallbacks textuais aplicados no serviço.
#[derive(Debug, Clone, FromRow)]
pub struct ProcessoDoClienteRow {
    pub numprocesso: String,
    pub assunto: String,
    pub status: StatusProcesso,
    pub comarca: Option<String>,
    pub data_formatada: Option<String>,
    pub advogado_nome: Option<String>,
    pub advogado_sobrenome: Option<String>,
    pub oab: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdvogadoResponsavel {
    #[schema(example = "Carla Souza")]
    pub nome: String,
    #[schema(example = "123456/SP")]
    pub oab: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProcessoDoCliente {
    pub numero_processo: String,
    pub assunto: String,
    pub status: StatusProcesso,
    pub comarca: String,
    #[schema(example = "05/03/2024")]
    pub data: String,
    pub advogado_responsavel: AdvogadoResponsavel,
}

impl From<ProcessoDoClienteRow> for ProcessoDoCliente {
    fn from(row: ProcessoDoClienteRow) -> Self {
        let nome = match (row.advogado_nome, row.advogado_sobrenome) {
            (Some(nome), Some(sobrenome)) => format!("{nome} {sobrenome}"),
            (Some(nome), None) => nome,
            _ => "Não vinculado".to_string(),
        };
        Self {
            numero_processo: row.numprocesso,
            assunto: row.assunto,
            status: row.status,
            comarca: row.comarca.unwrap_or_else(|| "Não informada".to_string()),
            data: row
                .data_formatada
                .unwrap_or_else(|| "Não informada".to_string()),
            advogado_responsavel: AdvogadoResponsavel {
                nome,
                oab: row.oab.unwrap_or_else(|| "Não informada".to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_padrao_e_pendente() {
        assert_eq!(StatusProcesso::default(), StatusProcesso::Pendente);
    }

    #[test]
    fn status_serializa_com_acento() {
        let json = serde_json::to_string(&StatusProcesso::Concluido).unwrap();
        assert_eq!(json, "\"Concluído\"");
        let de: StatusProcesso = serde_json::from_str("\"Concluído\"").unwrap();
        assert_eq!(de, StatusProcesso::Concluido);
    }

    #[test]
    fn processo_sem_vinculo_usa_fallbacks() {
        let row = ProcessoDoClienteRow {
            numprocesso: "0001234-56.2024.8.26.0100".into(),
            assunto: "Cobrança".into(),
            status: StatusProcesso::Pendente,
            comarca: None,
            data_formatada: None,
            advogado_nome: None,
            advogado_sobrenome: None,
            oab: None,
        };
        let p = ProcessoDoCliente::from(row);
        assert_eq!(p.comarca, "Não informada");
        assert_eq!(p.data, "Não informada");
        assert_eq!(p.advogado_responsavel.nome, "Não vinculado");
        assert_eq!(p.advogado_responsavel.oab, "Não informada");
    }

    #[test]
    fn advogado_sem_sobrenome_mostra_so_o_nome() {
        // Na fonte o CONCAT do MySQL anulava o nome inteiro quando o
        // sobrenome era NULL; aqui o primeiro nome basta.
        let row = ProcessoDoClienteRow {
            numprocesso: "x".into(),
            assunto: "y".into(),
            status: StatusProcesso::Pendente,
            comarca: None,
            data_formatada: None,
            advogado_nome: Some("Carla".into()),
            advogado_sobrenome: None,
            oab: None,
        };
        let p = ProcessoDoCliente::from(row);
        assert_eq!(p.advogado_responsavel.nome, "Carla");
    }

    #[test]
    fn processo_com_advogado_concatena_o_nome() {
        let row = ProcessoDoClienteRow {
            numprocesso: "x".into(),
            assunto: "y".into(),
            status: StatusProcesso::Andamento,
            comarca: Some("São Paulo".into()),
            data_formatada: Some("05/03/2024".into()),
            advogado_nome: Some("Carla".into()),
            advogado_sobrenome: Some("Souza".into()),
            oab: Some("123456/SP".into()),
        };
        let p = ProcessoDoCliente::from(row);
        assert_eq!(p.advogado_responsavel.nome, "Carla Souza");
        assert_eq!(p.data, "05/03/2024");
    }
}

use chrono::NaiveDate;

use crate::common::error::AppError;

// As datas cruzam a fronteira como texto "DD/MM/AAAA" e são armazenadas como
// DATE. A fonte original só repartia a string; aqui o chrono valida o
// calendário, então "31/02/2024" é recusado com 400 (decisão registrada no
// DESIGN.md).

pub const FORMATO_BR: &str = "%d/%m/%Y";

/// Converte "DD/MM/AAAA" em `NaiveDate`. `None` vira `Ok(None)`.
pub fn data_br_para_iso(texto: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    match texto {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, FORMATO_BR)
            .map(Some)
            .map_err(|_| AppError::DataInvalida(s.to_string())),
    }
}

/// Formata a data armazenada de volta para "DD/MM/AAAA".
pub fn data_iso_para_br(data: Option<NaiveDate>) -> Option<String> {
    data.map(|d| d.format(FORMATO_BR).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converte_data_valida() {
        let data = data_br_para_iso(Some("05/03/2024")).unwrap();
        assert_eq!(data, NaiveDate::from_ymd_opt(2024, 3, 5));
    }

    #[test]
    fn ida_e_volta_preserva_o_texto() {
        let data = data_br_para_iso(Some("05/03/2024")).unwrap();
        assert_eq!(data_iso_para_br(data).as_deref(), Some("05/03/2024"));
    }

    #[test]
    fn rejeita_data_impossivel_no_calendario() {
        assert!(data_br_para_iso(Some("31/02/2024")).is_err());
    }

    #[test]
    fn rejeita_formato_iso_na_entrada() {
        assert!(data_br_para_iso(Some("2024-03-05")).is_err());
    }

    #[test]
    fn ausente_ou_vazio_vira_none() {
        assert_eq!(data_br_para_iso(None).unwrap(), None);
        assert_eq!(data_br_para_iso(Some("")).unwrap(), None);
    }
}

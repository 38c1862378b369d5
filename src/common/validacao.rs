use std::sync::LazyLock;

use regex::Regex;

// Mesmo padrão nas duas pontas: payload de cadastro e parâmetro de rota.
pub static IDENTIFICADOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-zA-Z0-9-]{3,20}$").expect("regex de identificador"));

// Checagem de forma do e-mail usada pelo cliente de terminal antes de ir à
// rede (duplicada do backend de propósito, como na fonte).
pub static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("regex de e-mail"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identificador_aceita_alfanumerico_e_hifen() {
        for ok in ["482913", "abc", "ADV-482913", "a1b2c3d4e5f6g7h8i9j0"] {
            assert!(IDENTIFICADOR_RE.is_match(ok), "{ok} deveria passar");
        }
    }

    #[test]
    fn identificador_rejeita_curto_longo_e_simbolos() {
        for ruim in ["a", "ab", "", "a1b2c3d4e5f6g7h8i9j0x", "abc def", "olá123"] {
            assert!(!IDENTIFICADOR_RE.is_match(ruim), "{ruim} deveria falhar");
        }
    }

    #[test]
    fn email_checa_apenas_a_forma() {
        assert!(EMAIL_RE.is_match("ana@x.com"));
        assert!(!EMAIL_RE.is_match("ana@x"));
        assert!(!EMAIL_RE.is_match("semarroba.com"));
    }
}

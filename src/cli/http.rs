use anyhow::Context;
use serde_json::Value;

// Cliente HTTP fino sobre o reqwest. Respostas não-2xx viram erro com a
// `message` do servidor quando ela existe, senão um texto genérico; nunca
// um panic.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn post(&self, caminho: &str, corpo: &Value) -> anyhow::Result<Value> {
        let resp = self
            .http
            .post(format!("{}{caminho}", self.base_url))
            .json(corpo)
            .send()
            .await
            .context("Falha de rede ao chamar o servidor")?;
        Self::extrair(resp).await
    }

    pub async fn get(&self, caminho: &str) -> anyhow::Result<Value> {
        let resp = self
            .http
            .get(format!("{}{caminho}", self.base_url))
            .send()
            .await
            .context("Falha de rede ao chamar o servidor")?;
        Self::extrair(resp).await
    }

    // A tela do cliente usa um timeout de 10 segundos; ele só abandona a
    // espera local, não cancela o trabalho do servidor.
    pub async fn get_com_timeout(
        &self,
        caminho: &str,
        timeout: std::time::Duration,
    ) -> anyhow::Result<Value> {
        let resp = self
            .http
            .get(format!("{}{caminho}", self.base_url))
            .timeout(timeout)
            .send()
            .await
            .context("Falha de rede ou tempo esgotado ao chamar o servidor")?;
        Self::extrair(resp).await
    }

    pub async fn delete(&self, caminho: &str) -> anyhow::Result<Value> {
        let resp = self
            .http
            .delete(format!("{}{caminho}", self.base_url))
            .send()
            .await
            .context("Falha de rede ao chamar o servidor")?;
        Self::extrair(resp).await
    }

    async fn extrair(resp: reqwest::Response) -> anyhow::Result<Value> {
        let status = resp.status();
        let corpo: Value = resp.json().await.unwrap_or(Value::Null);

        if status.is_success() {
            return Ok(corpo);
        }

        let mensagem = corpo
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Erro ao comunicar com o servidor")
            .to_string();
        anyhow::bail!("{mensagem} (HTTP {status})")
    }
}

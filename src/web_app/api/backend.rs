// web_app/api/backend.rs - HTTP client for the inventory REST backend
//
// The backend owns all persistence; this client only speaks its JSON
// contract. Backend-reported errors ({"error": "..."}) come back as
// `ApiErro::Backend` with the message verbatim, every transport-level
// failure collapses into `ApiErro::Conexao`.

use std::env;
use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::web_app::erro::{ApiErro, ApiResultado};
use crate::web_app::model::{Produto, ResultadoUpload};

/// Base URL used when ESTOQUE_API_URL is not set.
pub const URL_PADRAO: &str = "http://localhost:5000/api";

static CLIENTE: OnceLock<ClienteEstoque> = OnceLock::new();

/// Initialize the global backend client
pub fn init_cliente(cliente: ClienteEstoque) {
    tracing::info!("Initializing backend client for {}", cliente.base_url());
    if CLIENTE.set(cliente).is_err() {
        tracing::warn!("Backend client already initialized");
    }
}

/// Get the global backend client, falling back to the default base URL
/// if the server did not initialize one.
pub fn cliente() -> &'static ClienteEstoque {
    CLIENTE.get_or_init(|| {
        tracing::warn!("Backend client not initialized, using defaults");
        ClienteEstoque::do_ambiente()
    })
}

/// Error body the backend returns on 4xx/5xx responses.
#[derive(Debug, Deserialize)]
struct CorpoErro {
    error: Option<String>,
}

/// Client for the inventory backend.
#[derive(Clone, Debug)]
pub struct ClienteEstoque {
    base_url: String,
    http: reqwest::Client,
}

impl ClienteEstoque {
    pub fn novo(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Builds a client from ESTOQUE_API_URL, or the local default.
    pub fn do_ambiente() -> Self {
        let base = env::var("ESTOQUE_API_URL").unwrap_or_else(|_| URL_PADRAO.to_string());
        Self::novo(base)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, caminho: &str) -> String {
        format!("{}{}", self.base_url, caminho)
    }

    /// GET /produtos/buscar?termo=...
    pub async fn buscar(&self, termo: &str) -> ApiResultado<Vec<Produto>> {
        let resposta = self
            .http
            .get(self.url("/produtos/buscar"))
            .query(&[("termo", termo)])
            .send()
            .await
            .map_err(conexao)?;

        ler_resposta(resposta, "Erro ao buscar produtos").await
    }

    /// POST /produtos with the product record as JSON.
    pub async fn cadastrar(&self, produto: &Produto) -> ApiResultado<Produto> {
        let resposta = self
            .http
            .post(self.url("/produtos"))
            .json(produto)
            .send()
            .await
            .map_err(conexao)?;

        ler_resposta(resposta, "Erro ao cadastrar produto").await
    }

    /// POST /produtos/upload as multipart/form-data, field name "file".
    pub async fn enviar_planilha(
        &self,
        nome: &str,
        conteudo: String,
    ) -> ApiResultado<ResultadoUpload> {
        let parte = reqwest::multipart::Part::text(conteudo)
            .file_name(nome.to_string())
            .mime_str("text/csv")
            .map_err(|_| ApiErro::Backend("Erro ao processar planilha".to_string()))?;
        let formulario = reqwest::multipart::Form::new().part("file", parte);

        let resposta = self
            .http
            .post(self.url("/produtos/upload"))
            .multipart(formulario)
            .send()
            .await
            .map_err(conexao)?;

        ler_resposta(resposta, "Erro ao processar planilha").await
    }
}

fn conexao(e: reqwest::Error) -> ApiErro {
    tracing::error!("Backend request failed: {}", e);
    ApiErro::Conexao
}

/// Decodes a backend response: the body on success, the backend's
/// `error` message (or the given fallback) otherwise.
async fn ler_resposta<T: DeserializeOwned>(
    resposta: reqwest::Response,
    padrao: &str,
) -> ApiResultado<T> {
    let status = resposta.status();

    if status.is_success() {
        return resposta.json::<T>().await.map_err(conexao);
    }

    let mensagem = resposta
        .json::<CorpoErro>()
        .await
        .ok()
        .and_then(|corpo| corpo.error)
        .unwrap_or_else(|| padrao.to_string());

    tracing::warn!("Backend returned {}: {}", status, mensagem);
    Err(ApiErro::Backend(mensagem))
}

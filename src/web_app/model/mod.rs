// web_app/model/mod.rs - Shared data models for client and server
//
// These types cross the wire between the WASM client, the server
// functions and the inventory REST backend. Field names follow the
// backend JSON contract exactly (cod, nome_do_produto, marca, ...),
// so no serde renames are needed.

use serde::{Deserialize, Serialize};

use crate::web_app::erro::ErroValidacao;

pub mod rascunho;
pub mod requisicao;
pub mod upload;

pub use rascunho::RascunhoProduto;
pub use requisicao::GeracaoRequisicao;
pub use upload::{arquivo_eh_csv, formatar_tamanho, ArquivoSelecionado, CABECALHO_CSV};

/// One of the three fixed warehouse locations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Filial {
    Ceara,
    SantaCatarina,
    SaoPaulo,
}

impl Filial {
    pub const TODAS: [Filial; 3] = [Filial::Ceara, Filial::SantaCatarina, Filial::SaoPaulo];

    /// Display name, matching the CSV column headers.
    pub fn nome(&self) -> &'static str {
        match self {
            Filial::Ceara => "Ceará",
            Filial::SantaCatarina => "Santa Catarina",
            Filial::SaoPaulo => "São Paulo",
        }
    }
}

impl std::fmt::Display for Filial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.nome())
    }
}

/// Product record as the backend stores and returns it.
///
/// `total` is carried on the wire because the backend persists it, but
/// the client never lets it diverge: drafts compute it from the three
/// region quantities on every edit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Produto {
    pub cod: i64,
    #[serde(default, deserialize_with = "nulo_vira_vazio")]
    pub nome_do_produto: String,
    #[serde(default, deserialize_with = "nulo_vira_vazio")]
    pub marca: String,
    #[serde(default)]
    pub ceara: i64,
    #[serde(default)]
    pub santa_catarina: i64,
    #[serde(default)]
    pub sao_paulo: i64,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub reserva: i64,
}

impl Produto {
    /// Stock held at one warehouse.
    pub fn estoque(&self, filial: Filial) -> i64 {
        match filial {
            Filial::Ceara => self.ceara,
            Filial::SantaCatarina => self.santa_catarina,
            Filial::SaoPaulo => self.sao_paulo,
        }
    }

    /// Quantity free for sale. Display-only, never persisted by the client.
    pub fn disponivel(&self) -> i64 {
        self.total - self.reserva
    }
}

/// The backend's text columns are nullable, so records can arrive with
/// an explicit `null` where the client expects a string.
fn nulo_vira_vazio<'de, D>(de: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let valor = Option::<String>::deserialize(de)?;
    Ok(valor.unwrap_or_default())
}

/// Summary returned by the spreadsheet upload endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultadoUpload {
    pub message: String,
    pub produtos_inseridos: i64,
    pub produtos_atualizados: i64,
}

/// Inline feedback shown by a panel after an action.
///
/// A search with zero results is `Info`, not `Erro`: nothing went
/// wrong, there was just nothing to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mensagem {
    Sucesso(String),
    Erro(String),
    Info(String),
}

impl Mensagem {
    pub fn sucesso(texto: impl Into<String>) -> Self {
        Mensagem::Sucesso(texto.into())
    }

    pub fn erro(texto: impl Into<String>) -> Self {
        Mensagem::Erro(texto.into())
    }

    pub fn info(texto: impl Into<String>) -> Self {
        Mensagem::Info(texto.into())
    }

    pub fn texto(&self) -> &str {
        match self {
            Mensagem::Sucesso(texto) | Mensagem::Erro(texto) | Mensagem::Info(texto) => texto,
        }
    }

    /// Alert container classes per kind.
    pub fn classe(&self) -> &'static str {
        match self {
            Mensagem::Sucesso(_) => "border-green-500 bg-green-50 text-green-700",
            Mensagem::Erro(_) => "border-red-500 bg-red-50 text-red-700",
            Mensagem::Info(_) => "border-blue-500 bg-blue-50 text-blue-700",
        }
    }
}

/// Active tab of the main page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Aba {
    #[default]
    Busca,
    Cadastro,
    Upload,
}

impl Aba {
    pub const TODAS: [Aba; 3] = [Aba::Busca, Aba::Cadastro, Aba::Upload];

    pub fn rotulo(&self) -> &'static str {
        match self {
            Aba::Busca => "Buscar Produtos",
            Aba::Cadastro => "Cadastrar Produto",
            Aba::Upload => "Upload Planilha",
        }
    }
}

/// Validates a search term: must be non-empty after trimming.
///
/// Failing here means no request is issued at all.
pub fn validar_termo(termo: &str) -> Result<String, ErroValidacao> {
    let aparado = termo.trim();
    if aparado.is_empty() {
        Err(ErroValidacao::TermoVazio)
    } else {
        Ok(aparado.to_string())
    }
}

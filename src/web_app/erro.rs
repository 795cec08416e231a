// web_app/erro.rs - Error taxonomy for the front end
//
// Three failure classes, matching how each one is surfaced:
// - ErroValidacao: a precondition failed locally, no request is made
// - ApiErro::Backend: the backend answered non-2xx with its own message
// - ApiErro::Conexao: the transport failed, a generic message is shown
//
// Every failure is terminal for its attempt: the panel shows the
// message inline and returns to idle, nothing is retried.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Client-side precondition failure. Blocks the request entirely.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErroValidacao {
    #[error("Digite um termo para buscar")]
    TermoVazio,
    #[error("Código e nome do produto são obrigatórios")]
    CamposObrigatorios,
    #[error("Por favor, selecione apenas arquivos CSV")]
    ArquivoNaoCsv,
    #[error("Selecione um arquivo CSV")]
    NenhumArquivo,
}

/// Failure reported after a request was actually attempted.
///
/// Serializable so server functions can hand it to the WASM client
/// without flattening it into a string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum ApiErro {
    /// Non-2xx response; carries the backend's message verbatim.
    #[error("{0}")]
    Backend(String),
    /// The request never completed.
    #[error("Erro de conexão com o servidor")]
    Conexao,
}

pub type ApiResultado<T> = Result<T, ApiErro>;

/// Collapses the server-function envelope into the taxonomy.
///
/// Server functions return `Result<ApiResultado<T>, _>`: the outer
/// error means the call to our own server never completed, which the
/// user cannot distinguish from any other transport failure.
pub fn achatar<T, E: std::fmt::Display>(resultado: Result<ApiResultado<T>, E>) -> ApiResultado<T> {
    match resultado {
        Ok(interno) => interno,
        Err(erro) => {
            tracing::error!("Chamada de função de servidor falhou: {erro}");
            Err(ApiErro::Conexao)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mensagens_de_validacao() {
        assert_eq!(
            ErroValidacao::TermoVazio.to_string(),
            "Digite um termo para buscar"
        );
        assert_eq!(
            ErroValidacao::CamposObrigatorios.to_string(),
            "Código e nome do produto são obrigatórios"
        );
        assert_eq!(
            ErroValidacao::ArquivoNaoCsv.to_string(),
            "Por favor, selecione apenas arquivos CSV"
        );
        assert_eq!(
            ErroValidacao::NenhumArquivo.to_string(),
            "Selecione um arquivo CSV"
        );
    }

    #[test]
    fn test_backend_exibido_verbatim() {
        let erro = ApiErro::Backend("Produto com este código já existe".to_string());
        assert_eq!(erro.to_string(), "Produto com este código já existe");
    }

    #[test]
    fn test_conexao_tem_mensagem_generica() {
        assert_eq!(
            ApiErro::Conexao.to_string(),
            "Erro de conexão com o servidor"
        );
    }

    #[test]
    fn test_achatar_preserva_erro_interno() {
        let interno: Result<ApiResultado<i32>, String> =
            Ok(Err(ApiErro::Backend("falhou".to_string())));
        assert_eq!(achatar(interno), Err(ApiErro::Backend("falhou".to_string())));
    }

    #[test]
    fn test_achatar_mapeia_falha_externa_para_conexao() {
        let externo: Result<ApiResultado<i32>, String> = Err("sem rota".to_string());
        assert_eq!(achatar(externo), Err(ApiErro::Conexao));
    }

    #[test]
    fn test_api_erro_roundtrip_serde() {
        let erro = ApiErro::Backend("mensagem".to_string());
        let json = serde_json::to_string(&erro).unwrap();
        let de: ApiErro = serde_json::from_str(&json).unwrap();
        assert_eq!(de, erro);
    }
}

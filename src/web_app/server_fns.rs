// web_app/server_fns.rs - Leptos server function declarations
//
// These are the server function declarations that are accessible from both
// client (WASM) and server (native Rust). The #[server] macro automatically
// generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// Each function returns `Result<ApiResultado<T>, ServerFnError>`: the
// inner result carries the backend outcome across the wire, the outer
// error only fires when the client cannot reach our own server.
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;

use crate::web_app::erro::ApiResultado;
use crate::web_app::model::{Produto, ResultadoUpload};

/// Search products by code, name or brand
#[server(BuscarProdutos, "/api")]
pub async fn buscar_produtos(termo: String) -> Result<ApiResultado<Vec<Produto>>, ServerFnError> {
    use crate::web_app::api::backend;

    tracing::info!("Busca: termo='{}'", termo);

    let resultado = backend::cliente().buscar(&termo).await;

    match &resultado {
        Ok(produtos) => tracing::info!("Busca encontrou {} produtos", produtos.len()),
        Err(e) => tracing::error!("Busca falhou: {}", e),
    }

    Ok(resultado)
}

/// Register a new product
#[server(CadastrarProduto, "/api")]
pub async fn cadastrar_produto(produto: Produto) -> Result<ApiResultado<Produto>, ServerFnError> {
    use crate::web_app::api::backend;

    tracing::info!("Cadastro: cod={}", produto.cod);

    let resultado = backend::cliente().cadastrar(&produto).await;

    match &resultado {
        Ok(criado) => tracing::info!("Produto {} cadastrado", criado.cod),
        Err(e) => tracing::error!("Cadastro falhou: {}", e),
    }

    Ok(resultado)
}

/// Upload a CSV spreadsheet of products
#[server(EnviarPlanilha, "/api")]
pub async fn enviar_planilha(
    nome: String,
    conteudo: String,
) -> Result<ApiResultado<ResultadoUpload>, ServerFnError> {
    use crate::web_app::api::backend;

    tracing::info!("Upload: arquivo='{}' ({} bytes)", nome, conteudo.len());

    let resultado = backend::cliente().enviar_planilha(&nome, conteudo).await;

    match &resultado {
        Ok(resumo) => tracing::info!(
            "Planilha processada: {} inseridos, {} atualizados",
            resumo.produtos_inseridos,
            resumo.produtos_atualizados
        ),
        Err(e) => tracing::error!("Upload falhou: {}", e),
    }

    Ok(resultado)
}

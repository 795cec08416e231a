// web_app/components/busca.rs - Product search panel
//
// Flow: validate the term locally, dispatch at most one request, apply
// the response only if no newer search has been started meanwhile.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::components::common::{Alerta, BarraAtividade, Selo};
use crate::web_app::erro::achatar;
use crate::web_app::model::{validar_termo, Filial, GeracaoRequisicao, Mensagem, Produto};
use crate::web_app::server_fns::buscar_produtos;

/// Search panel: term input, submit, result cards.
#[component]
pub fn PainelBusca() -> impl IntoView {
    let termo = RwSignal::new(String::new());
    // None = nothing searched yet; Some(vec![]) = searched, no matches.
    let resultados = RwSignal::new(None::<Vec<Produto>>);
    let mensagem = RwSignal::new(None::<Mensagem>);
    let carregando = RwSignal::new(false);
    let geracao = RwSignal::new(GeracaoRequisicao::nova());

    let buscar = move || {
        let aparado = match validar_termo(&termo.get_untracked()) {
            Ok(aparado) => aparado,
            Err(erro) => {
                mensagem.set(Some(Mensagem::erro(erro.to_string())));
                return;
            }
        };

        let mut atual = geracao.get_untracked();
        let token = atual.emitir();
        geracao.set(atual);

        mensagem.set(None);
        carregando.set(true);

        spawn_local(async move {
            let resultado = achatar(buscar_produtos(aparado).await);

            // A newer search owns the panel now.
            if !geracao.get_untracked().eh_atual(token) {
                return;
            }

            carregando.set(false);
            match resultado {
                Ok(produtos) => {
                    if produtos.is_empty() {
                        mensagem.set(Some(Mensagem::info("Nenhum produto encontrado")));
                    }
                    resultados.set(Some(produtos));
                }
                Err(erro) => {
                    mensagem.set(Some(Mensagem::erro(erro.to_string())));
                }
            }
        });
    };

    let ao_enviar = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        buscar();
    };

    view! {
        <section class="bg-white rounded-2xl shadow-sm p-6 border border-gray-100 space-y-6">
            <form on:submit=ao_enviar class="flex gap-4">
                <input
                    type="text"
                    placeholder="Buscar por código, nome ou marca..."
                    class="flex-1 px-4 py-3 border-2 border-gray-200 rounded-xl \
                           focus:ring-4 focus:ring-blue-100 focus:border-blue-500 \
                           outline-none text-lg transition-all shadow-sm"
                    prop:value=move || termo.get()
                    on:input=move |ev| termo.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    disabled=move || carregando.get()
                    class="px-8 py-3 bg-blue-600 text-white rounded-xl \
                           hover:bg-blue-700 active:bg-blue-800 transition-all \
                           font-semibold shadow-md disabled:bg-gray-400 disabled:cursor-not-allowed"
                >
                    "Buscar"
                </button>
            </form>

            <Show when=move || carregando.get()>
                <BarraAtividade rotulo="Buscando produtos..." />
            </Show>

            {move || mensagem.get().map(|m| view! { <Alerta mensagem=m /> })}

            {move || {
                resultados.get().map(|produtos| view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <For
                            each=move || produtos.clone()
                            key=|produto| produto.cod
                            children=move |produto| view! { <CartaoProduto produto=produto /> }
                        />
                    </div>
                })
            }}
        </section>
    }
}

/// Caption under the product name; the brand only appears when the
/// backend has one.
fn legenda(produto: &Produto) -> String {
    if produto.marca.is_empty() {
        format!("Cód. {}", produto.cod)
    } else {
        format!("Cód. {} · {}", produto.cod, produto.marca)
    }
}

/// One product in the search results.
#[component]
pub fn CartaoProduto(produto: Produto) -> impl IntoView {
    let disponivel = produto.disponivel();
    let variante = if disponivel > 0 { "green" } else { "red" };

    view! {
        <article class="bg-gray-50 rounded-xl border border-gray-200 p-5 space-y-3">
            <div class="flex items-start justify-between gap-2">
                <div>
                    <h3 class="font-bold text-gray-900">{produto.nome_do_produto.clone()}</h3>
                    <p class="text-sm text-gray-500">
                        {legenda(&produto)}
                    </p>
                </div>
                <Selo variante=variante>
                    {format!("Disponível: {disponivel}")}
                </Selo>
            </div>

            <div class="grid grid-cols-3 gap-2 text-sm">
                {Filial::TODAS.into_iter().map(|filial| {
                    let quantidade = produto.estoque(filial);
                    view! {
                        <div class="bg-white rounded-lg border border-gray-100 px-3 py-2">
                            <span class="block text-xs text-gray-500">{filial.nome()}</span>
                            <span class="font-semibold text-gray-800">{quantidade}</span>
                        </div>
                    }
                }).collect_view()}
            </div>

            <div class="flex gap-4 text-sm text-gray-600 border-t border-gray-100 pt-3">
                <span>"Total: " <strong>{produto.total}</strong></span>
                <span>"Reserva: " <strong>{produto.reserva}</strong></span>
            </div>
        </article>
    }
}

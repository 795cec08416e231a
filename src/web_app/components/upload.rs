// web_app/components/upload.rs - Spreadsheet upload panel
//
// The picker and the drop zone feed the same selection handler, so
// both enforce the same CSV check. File content is read into memory as
// soon as the file is accepted; submitting only ships the stored text.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::components::common::{Alerta, BarraAtividade, Selo};
use crate::web_app::erro::{achatar, ErroValidacao};
use crate::web_app::model::{
    arquivo_eh_csv, formatar_tamanho, ArquivoSelecionado, GeracaoRequisicao, Mensagem,
    ResultadoUpload, CABECALHO_CSV,
};
use crate::web_app::server_fns::enviar_planilha;

/// Upload panel: file picker, drop zone, result summary.
#[component]
pub fn PainelUpload() -> impl IntoView {
    let arquivo = RwSignal::new(None::<ArquivoSelecionado>);
    let resumo = RwSignal::new(None::<ResultadoUpload>);
    let mensagem = RwSignal::new(None::<Mensagem>);
    let carregando = RwSignal::new(false);
    let arrastando = RwSignal::new(false);
    let geracao = RwSignal::new(GeracaoRequisicao::nova());
    let entrada_ref = NodeRef::<leptos::html::Input>::new();

    let ao_ler = Callback::new(move |lido: ArquivoSelecionado| {
        arquivo.set(Some(lido));
    });

    // Shared by the picker and the drop zone.
    let ao_escolher = move |arquivos: Option<leptos::web_sys::FileList>| {
        let Some(lista) = arquivos else { return };
        let Some(escolhido) = lista.get(0) else { return };

        if !arquivo_eh_csv(&escolhido.name(), &escolhido.type_()) {
            arquivo.set(None);
            mensagem.set(Some(Mensagem::erro(ErroValidacao::ArquivoNaoCsv.to_string())));
            return;
        }

        mensagem.set(None);
        resumo.set(None);
        ler_arquivo(escolhido, ao_ler);
    };

    let remover = move |_| {
        arquivo.set(None);
        resumo.set(None);
        mensagem.set(None);
        if let Some(entrada) = entrada_ref.get_untracked() {
            entrada.set_value("");
        }
    };

    let enviar = move |_| {
        let Some(selecionado) = arquivo.get_untracked() else {
            mensagem.set(Some(Mensagem::erro(ErroValidacao::NenhumArquivo.to_string())));
            return;
        };

        let mut atual = geracao.get_untracked();
        let token = atual.emitir();
        geracao.set(atual);

        mensagem.set(None);
        resumo.set(None);
        carregando.set(true);

        spawn_local(async move {
            let resultado = achatar(
                enviar_planilha(selecionado.nome.clone(), selecionado.conteudo.clone()).await,
            );

            if !geracao.get_untracked().eh_atual(token) {
                return;
            }

            carregando.set(false);
            match resultado {
                Ok(recebido) => {
                    mensagem.set(Some(Mensagem::sucesso(recebido.message.clone())));
                    resumo.set(Some(recebido));
                    arquivo.set(None);
                    if let Some(entrada) = entrada_ref.get_untracked() {
                        entrada.set_value("");
                    }
                }
                Err(erro) => {
                    mensagem.set(Some(Mensagem::erro(erro.to_string())));
                }
            }
        });
    };

    view! {
        <section class="bg-white rounded-2xl shadow-sm p-6 border border-gray-100 space-y-6">
            <div
                class=move || {
                    if arrastando.get() {
                        "border-2 border-dashed border-blue-500 bg-blue-50 rounded-xl p-10 text-center transition-colors"
                    } else {
                        "border-2 border-dashed border-gray-300 rounded-xl p-10 text-center transition-colors"
                    }
                }
                on:dragover=move |ev: leptos::web_sys::DragEvent| {
                    ev.prevent_default();
                    arrastando.set(true);
                }
                on:dragleave=move |_| arrastando.set(false)
                on:drop=move |ev: leptos::web_sys::DragEvent| {
                    ev.prevent_default();
                    arrastando.set(false);
                    ao_escolher(ev.data_transfer().and_then(|dados| dados.files()));
                }
            >
                <p class="text-gray-600 font-medium">
                    "Arraste uma planilha CSV até aqui, ou"
                </p>
                <label class="inline-block mt-3 px-6 py-2 bg-blue-600 text-white rounded-lg \
                              hover:bg-blue-700 transition-colors font-medium cursor-pointer">
                    "Escolher arquivo"
                    <input
                        type="file"
                        accept=".csv,text/csv"
                        class="hidden"
                        node_ref=entrada_ref
                        on:change=move |ev| {
                            let alvo = event_target::<leptos::web_sys::HtmlInputElement>(&ev);
                            ao_escolher(alvo.files());
                        }
                    />
                </label>
            </div>

            {move || {
                arquivo.get().map(|selecionado| view! {
                    <div class="flex items-center justify-between bg-gray-50 rounded-lg \
                                border border-gray-200 px-4 py-3">
                        <div>
                            <span class="font-medium text-gray-800">{selecionado.nome.clone()}</span>
                            <span class="ml-3 text-sm text-gray-500">
                                {formatar_tamanho(selecionado.tamanho)}
                            </span>
                        </div>
                        <button
                            type="button"
                            class="text-sm font-medium text-red-600 hover:text-red-800 hover:underline"
                            on:click=remover
                        >
                            "Remover"
                        </button>
                    </div>
                })
            }}

            <button
                type="button"
                disabled=move || carregando.get()
                class="px-8 py-3 bg-blue-600 text-white rounded-xl \
                       hover:bg-blue-700 active:bg-blue-800 transition-all \
                       font-semibold shadow-md disabled:bg-gray-400 disabled:cursor-not-allowed"
                on:click=enviar
            >
                "Enviar planilha"
            </button>

            <Show when=move || carregando.get()>
                <BarraAtividade rotulo="Processando planilha..." />
            </Show>

            {move || mensagem.get().map(|m| view! { <Alerta mensagem=m /> })}

            {move || {
                resumo.get().map(|recebido| view! {
                    <div class="flex gap-3">
                        <Selo variante="green">
                            {format!("{} inseridos", recebido.produtos_inseridos)}
                        </Selo>
                        <Selo variante="blue">
                            {format!("{} atualizados", recebido.produtos_atualizados)}
                        </Selo>
                    </div>
                })
            }}

            <div class="bg-gray-50 rounded-xl border border-gray-100 p-4 text-sm text-gray-600">
                <h3 class="font-semibold text-gray-800 mb-2">"Formato esperado"</h3>
                <p>
                    "A planilha deve ter o cabeçalho: "
                    <code class="bg-white px-1.5 py-0.5 rounded border border-gray-200">
                        {CABECALHO_CSV}
                    </code>
                </p>
                <p class="mt-1">
                    "Produtos com código já cadastrado são atualizados; os demais são inseridos."
                </p>
            </div>
        </section>
    }
}

/// Reads the selected file into memory and hands it to the callback.
///
/// Only the WASM client ever runs this; on the server the handlers it
/// feeds are never invoked.
#[cfg(feature = "hydrate")]
fn ler_arquivo(escolhido: leptos::web_sys::File, ao_ler: Callback<ArquivoSelecionado>) {
    use wasm_bindgen_futures::JsFuture;

    let nome = escolhido.name();
    let tamanho = escolhido.size() as u64;

    spawn_local(async move {
        match JsFuture::from(escolhido.text()).await {
            Ok(texto) => {
                let conteudo = texto.as_string().unwrap_or_default();
                ao_ler.run(ArquivoSelecionado {
                    nome,
                    tamanho,
                    conteudo,
                });
            }
            Err(_) => {
                tracing::error!("Falha ao ler o arquivo selecionado");
            }
        }
    });
}

#[cfg(not(feature = "hydrate"))]
fn ler_arquivo(_escolhido: leptos::web_sys::File, _ao_ler: Callback<ArquivoSelecionado>) {}

// web_app/components/cadastro.rs - Product registration panel
//
// The form edits an immutable draft: each keystroke replaces the whole
// draft value, and the displayed total is always recomputed from the
// three region quantities.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::components::common::{Alerta, BarraAtividade, CampoNumero, CampoTexto};
use crate::web_app::erro::achatar;
use crate::web_app::model::{Filial, GeracaoRequisicao, Mensagem, RascunhoProduto};
use crate::web_app::server_fns::cadastrar_produto;

/// Registration panel: identification, per-region stock, reserve.
#[component]
pub fn PainelCadastro() -> impl IntoView {
    let rascunho = RwSignal::new(RascunhoProduto::default());
    let mensagem = RwSignal::new(None::<Mensagem>);
    let carregando = RwSignal::new(false);
    let geracao = RwSignal::new(GeracaoRequisicao::nova());

    let mudar_cod = Callback::new(move |valor: String| {
        rascunho.set(RascunhoProduto {
            cod: valor,
            ..rascunho.get_untracked()
        });
    });
    let mudar_nome = Callback::new(move |valor: String| {
        rascunho.set(RascunhoProduto {
            nome_do_produto: valor,
            ..rascunho.get_untracked()
        });
    });
    let mudar_marca = Callback::new(move |valor: String| {
        rascunho.set(RascunhoProduto {
            marca: valor,
            ..rascunho.get_untracked()
        });
    });
    let mudar_reserva = Callback::new(move |valor: String| {
        rascunho.set(rascunho.get_untracked().com_reserva(&valor));
    });

    // Clears the draft and any message, regardless of panel state.
    let limpar = move |_| {
        rascunho.set(RascunhoProduto::default());
        mensagem.set(None);
    };

    let ao_enviar = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let produto = match rascunho.get_untracked().para_produto() {
            Ok(produto) => produto,
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
            let resultado = achatar(cadastrar_produto(produto).await);

            if !geracao.get_untracked().eh_atual(token) {
                return;
            }

            carregando.set(false);
            match resultado {
                Ok(_) => {
                    // Reset the form first, then announce: the success
                    // message must survive the reset.
                    rascunho.set(RascunhoProduto::default());
                    mensagem.set(Some(Mensagem::sucesso("Produto cadastrado com sucesso!")));
                }
                Err(erro) => {
                    mensagem.set(Some(Mensagem::erro(erro.to_string())));
                }
            }
        });
    };

    view! {
        <section class="bg-white rounded-2xl shadow-sm p-6 border border-gray-100">
            <form on:submit=ao_enviar class="space-y-6">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <CampoTexto
                        rotulo="Código"
                        valor=Signal::derive(move || rascunho.get().cod)
                        ao_mudar=mudar_cod
                        placeholder="Ex.: 1234"
                    />
                    <CampoTexto
                        rotulo="Nome do produto"
                        valor=Signal::derive(move || rascunho.get().nome_do_produto)
                        ao_mudar=mudar_nome
                        placeholder="Ex.: Câmera Digital"
                    />
                    <CampoTexto
                        rotulo="Marca"
                        valor=Signal::derive(move || rascunho.get().marca)
                        ao_mudar=mudar_marca
                        placeholder="Ex.: Sony"
                    />
                </div>

                <fieldset class="space-y-2">
                    <legend class="text-sm font-semibold text-gray-600 uppercase tracking-wide">
                        "Estoque por filial"
                    </legend>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        {Filial::TODAS.into_iter().map(|filial| {
                            let mudar = Callback::new(move |valor: String| {
                                rascunho.set(rascunho.get_untracked().com_estoque(filial, &valor));
                            });
                            view! {
                                <CampoNumero
                                    rotulo=filial.nome().to_string()
                                    valor=Signal::derive(move || rascunho.get().estoque(filial).to_string())
                                    ao_mudar=mudar
                                />
                            }
                        }).collect_view()}
                    </div>
                </fieldset>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-4 items-end">
                    <CampoNumero
                        rotulo="Reserva".to_string()
                        valor=Signal::derive(move || rascunho.get().reserva.to_string())
                        ao_mudar=mudar_reserva
                    />
                    <div class="bg-gray-50 rounded-lg border border-gray-200 px-4 py-2">
                        <span class="block text-xs text-gray-500 uppercase tracking-wide">"Total"</span>
                        <span class="text-xl font-bold text-gray-900">
                            {move || rascunho.get().total()}
                        </span>
                    </div>
                    <div class="flex gap-3">
                        <button
                            type="submit"
                            disabled=move || carregando.get()
                            class="px-8 py-3 bg-blue-600 text-white rounded-xl \
                                   hover:bg-blue-700 active:bg-blue-800 transition-all \
                                   font-semibold shadow-md disabled:bg-gray-400 disabled:cursor-not-allowed"
                        >
                            "Cadastrar"
                        </button>
                        <button
                            type="button"
                            class="px-6 py-3 bg-white text-gray-700 rounded-xl border border-gray-300 \
                                   hover:bg-gray-50 transition-all font-medium shadow-sm"
                            on:click=limpar
                        >
                            "Limpar"
                        </button>
                    </div>
                </div>
            </form>

            <div class="mt-6 space-y-4">
                <Show when=move || carregando.get()>
                    <BarraAtividade rotulo="Cadastrando produto..." />
                </Show>

                {move || mensagem.get().map(|m| view! { <Alerta mensagem=m /> })}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use crate::web_app::model::{Filial, RascunhoProduto};

    #[test]
    fn test_total_exibido_acompanha_as_filiais() {
        let rascunho = RascunhoProduto::default()
            .com_estoque(Filial::Ceara, "5")
            .com_estoque(Filial::SantaCatarina, "3")
            .com_estoque(Filial::SaoPaulo, "2");
        assert_eq!(rascunho.total(), 10);
    }

    #[test]
    fn test_envio_valido_reinicia_o_rascunho() {
        // Mirrors the success branch: the form goes back to defaults.
        let preenchido = RascunhoProduto {
            cod: "1234".to_string(),
            nome_do_produto: "Câmera".to_string(),
            ..RascunhoProduto::default()
        };
        assert!(preenchido.para_produto().is_ok());

        let reiniciado = RascunhoProduto::default();
        assert_eq!(reiniciado.cod, "");
        assert_eq!(reiniciado.total(), 0);
    }
}

// web_app/pages/inicio.rs - Main page with the three panels
//
// One tab strip, one active panel. Each panel owns its own state, so
// switching tabs starts the new panel from a clean slate.

use leptos::prelude::*;

use crate::web_app::components::{PainelBusca, PainelCadastro, PainelUpload};
use crate::web_app::model::Aba;

/// Main page component
///
/// Composes the header, the tab strip and the active panel.
#[component]
pub fn PaginaInicial() -> impl IntoView {
    let aba = RwSignal::new(Aba::default());

    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900">
            // Header
            <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
                <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                    <div class="flex items-center gap-2">
                        <span class="text-2xl">"📦"</span>
                        <h1 class="text-xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-blue-600 to-indigo-600">
                            "Sistema de Estoque"
                        </h1>
                    </div>
                    <div class="text-sm text-gray-500">
                        "Ceará · Santa Catarina · São Paulo"
                    </div>
                </div>
            </header>

            // Main content
            <main class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                // Tab strip
                <nav class="flex gap-2 mb-8">
                    {Aba::TODAS.into_iter().map(|valor| {
                        let ativa = move || aba.get() == valor;
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if ativa() {
                                        "px-5 py-2.5 rounded-xl font-semibold bg-blue-600 text-white shadow-md transition-all"
                                    } else {
                                        "px-5 py-2.5 rounded-xl font-medium bg-white border border-gray-200 \
                                         text-gray-700 hover:bg-gray-50 hover:border-gray-300 transition-all"
                                    }
                                }
                                on:click=move |_| aba.set(valor)
                            >
                                {valor.rotulo()}
                            </button>
                        }
                    }).collect_view()}
                </nav>

                // Active panel
                {move || match aba.get() {
                    Aba::Busca => view! { <PainelBusca /> }.into_any(),
                    Aba::Cadastro => view! { <PainelCadastro /> }.into_any(),
                    Aba::Upload => view! { <PainelUpload /> }.into_any(),
                }}
            </main>

            // Footer
            <footer class="bg-white border-t border-gray-200 mt-12 py-8">
                <div class="max-w-5xl mx-auto px-4 text-center text-gray-500 text-sm">
                    <p>"Sistema de Estoque · Gestão de produtos em três filiais"</p>
                </div>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use crate::web_app::model::Aba;

    #[test]
    fn test_busca_e_a_aba_inicial() {
        assert_eq!(Aba::default(), Aba::Busca);
    }

    #[test]
    fn test_todas_as_abas_tem_rotulo() {
        for aba in Aba::TODAS {
            assert!(!aba.rotulo().is_empty());
        }
    }
}

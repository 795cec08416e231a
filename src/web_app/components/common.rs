// web_app/components/common.rs - Reusable UI components
//
// These are small, composable components used throughout the application.
// Philosophy: Pure, stateless components that receive all data via props.

use leptos::prelude::*;

use crate::web_app::model::Mensagem;

/// Inline alert showing a panel's feedback message.
///
/// Color follows the message kind: green for success, red for error,
/// blue for informational.
#[component]
pub fn Alerta(
    /// The message to display
    mensagem: Mensagem,
) -> impl IntoView {
    let classe = format!(
        "border-l-4 rounded-lg px-4 py-3 text-sm font-medium {}",
        mensagem.classe()
    );

    view! {
        <div class=classe role="alert">
            {mensagem.texto().to_string()}
        </div>
    }
}

/// Indeterminate activity bar shown while a request is in flight.
///
/// The duration of a backend call is unknown up front, so the bar
/// animates continuously instead of pretending to track progress.
#[component]
pub fn BarraAtividade(
    /// Label displayed above the bar
    #[prop(default = "Processando...")]
    rotulo: &'static str,
) -> impl IntoView {
    view! {
        <div class="w-full">
            <span class="text-sm text-gray-500 font-medium animate-pulse">{rotulo}</span>
            <div class="mt-2 h-2 w-full bg-gray-200 rounded-full overflow-hidden">
                <div class="h-full w-1/3 bg-blue-600 rounded-full animate-pulse"></div>
            </div>
        </div>
    }
}

/// Badge component
///
/// A small badge/tag for displaying labels.
#[component]
pub fn Selo(
    children: Children,
    /// Badge color variant
    #[prop(default = "gray")]
    variante: &'static str,
) -> impl IntoView {
    let classe = match variante {
        "green" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-green-100 text-green-800 border border-green-200",
        "red" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-red-100 text-red-800 border border-red-200",
        "blue" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-blue-100 text-blue-800 border border-blue-200",
        _ => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-gray-100 text-gray-800 border border-gray-200",
    };

    view! {
        <span class=classe>
            {children()}
        </span>
    }
}

/// Labeled text input bound to a value and a change callback.
#[component]
pub fn CampoTexto(
    /// Field label
    rotulo: &'static str,
    /// Current value
    #[prop(into)]
    valor: Signal<String>,
    /// Called with the raw input on every keystroke
    ao_mudar: Callback<String>,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="text-sm font-medium text-gray-700">{rotulo}</span>
            <input
                type="text"
                placeholder=placeholder
                class="mt-1 w-full px-4 py-2 border border-gray-300 rounded-lg \
                       focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                       outline-none transition-shadow shadow-sm"
                prop:value=move || valor.get()
                on:input=move |ev| ao_mudar.run(event_target_value(&ev))
            />
        </label>
    }
}

/// Labeled numeric input for non-negative quantities.
///
/// The value travels as raw text; coercion to an integer happens in
/// the draft, not here.
#[component]
pub fn CampoNumero(
    /// Field label
    rotulo: String,
    /// Current value, already rendered as text
    #[prop(into)]
    valor: Signal<String>,
    /// Called with the raw input on every keystroke
    ao_mudar: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="text-sm font-medium text-gray-700">{rotulo}</span>
            <input
                type="number"
                min="0"
                class="mt-1 w-full px-4 py-2 border border-gray-300 rounded-lg \
                       focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                       outline-none transition-shadow shadow-sm"
                prop:value=move || valor.get()
                on:input=move |ev| ao_mudar.run(event_target_value(&ev))
            />
        </label>
    }
}

#[cfg(test)]
mod tests {
    use crate::web_app::model::Mensagem;

    // Component rendering is exercised end-to-end; unit tests cover
    // the class selection logic only.

    #[test]
    fn test_classe_do_alerta_por_tipo() {
        assert!(Mensagem::sucesso("ok").classe().contains("green"));
        assert!(Mensagem::erro("x").classe().contains("red"));
        assert!(Mensagem::info("i").classe().contains("blue"));
    }

    #[test]
    fn test_variantes_do_selo() {
        let variantes = ["green", "red", "blue", "gray", "desconhecida"];
        for variante in variantes {
            let classe = match variante {
                "green" => "bg-green-100",
                "red" => "bg-red-100",
                "blue" => "bg-blue-100",
                _ => "bg-gray-100",
            };
            if variante == "desconhecida" || variante == "gray" {
                assert_eq!(classe, "bg-gray-100");
            }
        }
    }
}

use leptos::prelude::*;

/// Встроенное подтверждение удаления (вместо `window.confirm`)
#[component]
pub fn ConfirmPrompt(
    /// Текст вопроса
    #[prop(into)]
    message: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="confirm-prompt" role="alertdialog">
            <span class="confirm-prompt__message">{message}</span>
            <div class="confirm-prompt__actions">
                <button
                    class="button button--danger"
                    on:click=move |_| on_confirm.run(())
                >
                    "Supprimer"
                </button>
                <button
                    class="button button--secondary"
                    on:click=move |_| on_cancel.run(())
                >
                    "Annuler"
                </button>
            </div>
        </div>
    }
}

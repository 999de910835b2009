use contracts::shared::delete_flow::{StatusKind, StatusMessage};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Через сколько скрывается сообщение об успехе, мс
const AUTO_DISMISS_MS: u32 = 3_000;

fn toast_class(kind: StatusKind) -> &'static str {
    match kind {
        StatusKind::Loading => "status-toast status-toast--loading",
        StatusKind::Success => "status-toast status-toast--success",
        StatusKind::Error => "status-toast status-toast--error",
    }
}

/// Статус действия пользователя. Успех скрывается сам, ошибка висит до закрытия.
#[component]
pub fn StatusToast(
    #[prop(into)]
    status: Signal<Option<StatusMessage>>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    Effect::new(move |_| {
        let Some(message) = status.get() else {
            return;
        };
        if !message.auto_dismiss() {
            return;
        }
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            // Скрываем только то сообщение, для которого запущен таймер
            if status.get_untracked().as_ref() == Some(&message) {
                on_dismiss.run(());
            }
        });
    });

    move || {
        status.get().map(|message| {
            let closable = message.kind != StatusKind::Loading;
            view! {
                <div class=toast_class(message.kind) role="status">
                    <span class="status-toast__text">{message.text.clone()}</span>
                    {closable.then(|| view! {
                        <button
                            class="status-toast__close"
                            title="Fermer"
                            on:click=move |_| on_dismiss.run(())
                        >
                            {crate::shared::icons::icon("x")}
                        </button>
                    })}
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_class_per_kind() {
        assert!(toast_class(StatusKind::Success).ends_with("--success"));
        assert!(toast_class(StatusKind::Error).ends_with("--error"));
        assert!(toast_class(StatusKind::Loading).ends_with("--loading"));
    }
}

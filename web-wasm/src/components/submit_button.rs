//! 送信ボタンコンポーネント

use leptos::prelude::*;

#[component]
pub fn SubmitButton<FS>(
    #[prop(into)] can_submit: Signal<bool>,
    is_submitting: ReadSignal<bool>,
    on_submit: FS,
) -> impl IntoView
where
    FS: Fn(()) + 'static + Clone + Send,
{
    view! {
        <div class="submit-buttons">
            <button
                class="btn btn-primary"
                disabled=move || !can_submit.get() || is_submitting.get()
                on:click={
                    let on_submit = on_submit.clone();
                    move |_| on_submit(())
                }
            >
                {move || if is_submitting.get() { "送信中..." } else { "送信" }}
            </button>
        </div>
    }
}

//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;
use resume_match_common::{MatchForm, DEFAULT_ENDPOINT};
use crate::api::upload::upload;
use crate::components::{
    header::Header,
    file_input::FileInput,
    submit_button::SubmitButton,
    match_table::MatchTable,
};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // 選択中のファイルと照合結果（web_sys::File は Send でないのでローカル）
    let form = RwSignal::new_local(MatchForm::<File>::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (last_error, set_last_error) = signal(None::<String>);

    let can_submit = Signal::derive(move || form.with(|f| f.can_submit()));
    let matches = Signal::derive(move || form.with(|f| f.matches().to_vec()));

    let on_resumes = move |files: Vec<File>| {
        form.update(|f| f.set_resumes(files));
    };

    let on_job_description = move |files: Vec<File>| {
        form.update(|f| f.set_job_description(files));
    };

    // 送信ハンドラ
    let on_submit = move |_| {
        // 送信中の二重クリックは無視
        if is_submitting.get_untracked() || !form.with_untracked(|f| f.can_submit()) {
            return;
        }

        let snapshot = form.get_untracked();
        set_is_submitting.set(true);
        set_last_error.set(None);

        spawn_local(async move {
            let outcome = upload(DEFAULT_ENDPOINT, &snapshot).await;

            match form.try_update(|f| f.apply_outcome(outcome)) {
                Some(Ok(count)) => {
                    gloo::console::log!(format!("Backend response: {} matches", count));
                }
                Some(Err(e)) => {
                    gloo::console::error!(format!("Upload failed: {}", e));
                    set_last_error.set(Some(e.to_string()));
                }
                // アンマウント済み
                None => {}
            }

            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="container">
            <Header />

            <div class="upload-panel">
                <FileInput
                    label="履歴書を選択（複数可）"
                    multiple=true
                    on_files=on_resumes
                />
                <FileInput
                    label="求人票を選択"
                    on_files=on_job_description
                />
            </div>

            <SubmitButton
                can_submit=can_submit
                is_submitting=is_submitting
                on_submit=on_submit
            />

            <Show when=move || last_error.with(|e| e.is_some())>
                <p class="error-text">{move || last_error.get().unwrap_or_default()}</p>
            </Show>

            <MatchTable matches=matches />
        </div>
    }
}

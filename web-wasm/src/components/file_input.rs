//! ファイル選択コンポーネント

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, FileList, HtmlInputElement};

/// ラベル付きの `<input type="file">`
///
/// 変更のたびに選択中のファイルを `on_files` に渡す。
/// 単一選択モードでも常にシーケンス（先頭1件、クリア時は空）で渡す。
#[component]
pub fn FileInput<F>(
    #[prop(into)] label: String,
    #[prop(optional)] multiple: bool,
    on_files: F,
) -> impl IntoView
where
    F: Fn(Vec<File>) + Send + 'static,
{
    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };

        let mut files = input
            .files()
            .map(|list| file_list_to_vec(&list))
            .unwrap_or_default();
        if !multiple {
            files.truncate(1);
        }
        on_files(files);
    };

    view! {
        <label class="file-input">
            <span class="file-input-label">{label}</span>
            <input type="file" multiple=multiple on:change=on_change />
        </label>
    }
}

/// FileList を選択順のVecに変換
pub fn file_list_to_vec(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

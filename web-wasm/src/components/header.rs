//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Resume Match - 履歴書マッチング"</h1>
        </header>
    }
}

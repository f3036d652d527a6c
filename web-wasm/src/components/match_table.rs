//! 照合結果テーブル

use leptos::prelude::*;
use resume_match_common::MatchRecord;

#[component]
pub fn MatchTable(#[prop(into)] matches: Signal<Vec<MatchRecord>>) -> impl IntoView {
    view! {
        <Show when=move || matches.with(|m| !m.is_empty())>
            <table class="match-table">
                <thead>
                    <tr>
                        <th>"順位"</th>
                        <th>"ファイル名"</th>
                        <th>"類似度"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        matches
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(i, record)| {
                                let similarity = record.similarity_display();
                                view! {
                                    <tr>
                                        <td class="rank">{i + 1}</td>
                                        <td>{record.filename}</td>
                                        <td class="similarity">{similarity}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </Show>
    }
}

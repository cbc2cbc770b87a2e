use contracts::projections::p901_report_stats::dto::StatsResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::projections::p901_report_stats::api;

/// Number of entries shown per ranking.
const TOP_N: usize = 5;

/// Sidebar panel with the overall record count and the top reporters and
/// clients. Loaded once at mount; a failure here never touches the listing.
#[component]
pub fn StatsPanel() -> impl IntoView {
    let (stats, set_stats) = signal::<Option<StatsResponse>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_stats().await {
                Ok(data) => set_stats.set(Some(data)),
                Err(e) => {
                    log::error!("Failed to load stats: {}", e);
                    set_error.set(Some("統計データの読み込みに失敗しました".to_string()));
                }
            }
        });
    });

    view! {
        <section class="stats-panel">
            <h3>"統計情報"</h3>
            {move || error.get().map(|message| {
                view! { <div class="error error--small">{message}</div> }
            })}
            {move || stats.get().map(|stats| {
                view! {
                    <div class="stats-panel__total">
                        {format!("総件数: {} 件", stats.total)}
                    </div>
                    <div class="stats-panel__section">
                        <h4>"報告者別"</h4>
                        <ul class="stats-panel__list">
                            {stats.by_reporter.iter().take(TOP_N).map(|item| view! {
                                <li>
                                    {item.reporter.clone()}
                                    ": "
                                    <span class="badge badge--primary">{item.count.to_string()}</span>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>
                    <div class="stats-panel__section">
                        <h4>{format!("客先別TOP{}", TOP_N)}</h4>
                        <ul class="stats-panel__list">
                            {stats.by_client.iter().take(TOP_N).map(|item| view! {
                                <li>
                                    {item.client.clone()}
                                    ": "
                                    <span class="badge badge--success">{item.count.to_string()}</span>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>
                }
            })}
        </section>
    }
}

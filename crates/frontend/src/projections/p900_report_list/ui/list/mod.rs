pub mod state;

use self::state::create_state;
use crate::projections::p900_report_list::api;
use crate::projections::p900_report_list::query::{ReportFilters, ReportListQuery, PER_PAGE};
use crate::projections::p900_report_list::selection::SelectionService;
use crate::projections::p900_report_list::ui::projects_panel::CrossFilterService;
use crate::shared::components::pagination::PaginationControls;
use crate::shared::date_utils::format_date;
use crate::shared::text_utils::{split_clients, split_products};
use contracts::projections::p900_report_list::dto::ReportRow;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// The main listing: filter bar, grouped report table with selection
/// checkboxes and cross-filter links, and the pagination control.
///
/// Bumping `reload` re-runs the listing fetch from page 1; the bulk delete
/// in the side panel uses it after a successful delete.
#[component]
pub fn ReportList(reload: RwSignal<u64>) -> impl IntoView {
    let selection =
        use_context::<SelectionService>().expect("SelectionService not found in context");
    let cross_filter =
        use_context::<CrossFilterService>().expect("CrossFilterService not found in context");

    let state = create_state();
    let (rows, set_rows) = signal::<Vec<ReportRow>>(Vec::new());
    let (total_count, set_total_count) = signal(0u64);
    let (error, set_error) = signal::<Option<String>>(None);

    let (reporters, set_reporters) = signal::<Vec<String>>(Vec::new());
    let (clients, set_clients) = signal::<Vec<String>>(Vec::new());
    let (products, set_products) = signal::<Vec<String>>(Vec::new());

    // Stamp every dispatched load so a stale response can be recognized and
    // dropped: the displayed page is always the last dispatched load, not
    // the last resolved one.
    let request_seq = StoredValue::new(0u64);

    let load = move |page: usize| {
        state.update(|s| s.page = page);
        let query = ReportListQuery::new(&state.with_untracked(|s| s.filters.clone()), page);
        let seq = request_seq.get_value() + 1;
        request_seq.set_value(seq);

        spawn_local(async move {
            match api::list_reports(&query).await {
                Ok(data) => {
                    if request_seq.get_value() != seq {
                        return;
                    }
                    set_rows.set(data.reports);
                    set_total_count.set(data.total_count);
                    set_error.set(None);
                }
                Err(e) => {
                    if request_seq.get_value() != seq {
                        return;
                    }
                    log::error!("Failed to load reports: {}", e);
                    set_error.set(Some(format!("データの読み込みに失敗しました: {}", e)));
                }
            }
        });
    };

    // Dropdown contents are independent of the listing; a failure here only
    // leaves the dropdown empty.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_reporters().await {
                Ok(names) => set_reporters.set(names),
                Err(e) => log::error!("Failed to load reporters: {}", e),
            }
        });
        spawn_local(async move {
            match api::list_clients().await {
                Ok(names) => set_clients.set(names),
                Err(e) => log::error!("Failed to load clients: {}", e),
            }
        });
        spawn_local(async move {
            match api::list_products().await {
                Ok(names) => set_products.set(names),
                Err(e) => log::error!("Failed to load products: {}", e),
            }
        });
    });

    // Initial load, plus reloads requested by other components.
    Effect::new(move |_| {
        reload.track();
        load(1);
    });

    let apply_filters = move || load(1);
    let clear_filters = move || {
        state.update(|s| s.filters = ReportFilters::default());
        load(1);
    };

    view! {
        <div class="report-list">
            <div class="filter-panel">
                <div class="filter-panel__field">
                    <label>"報告者"</label>
                    <select
                        prop:value=move || state.get().filters.reporter
                        on:change=move |ev| {
                            state.update(|s| s.filters.reporter = event_target_value(&ev));
                        }
                    >
                        <option value="">"全て"</option>
                        {move || reporters.get().into_iter().map(|name| view! {
                            <option value=name.clone()>{name.clone()}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="filter-panel__field">
                    <label>"客先"</label>
                    <select
                        prop:value=move || state.get().filters.client
                        on:change=move |ev| {
                            state.update(|s| s.filters.client = event_target_value(&ev));
                        }
                    >
                        <option value="">"全て"</option>
                        {move || clients.get().into_iter().map(|name| view! {
                            <option value=name.clone()>{name.clone()}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="filter-panel__field">
                    <label>"製品"</label>
                    <select
                        prop:value=move || state.get().filters.product
                        on:change=move |ev| {
                            state.update(|s| s.filters.product = event_target_value(&ev));
                        }
                    >
                        <option value="">"全て"</option>
                        {move || products.get().into_iter().map(|name| view! {
                            <option value=name.clone()>{name.clone()}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="filter-panel__field">
                    <label>"日付 (から)"</label>
                    <input
                        type="date"
                        prop:value=move || state.get().filters.date_from
                        on:input=move |ev| {
                            state.update(|s| s.filters.date_from = event_target_value(&ev));
                        }
                    />
                </div>
                <div class="filter-panel__field">
                    <label>"日付 (まで)"</label>
                    <input
                        type="date"
                        prop:value=move || state.get().filters.date_to
                        on:input=move |ev| {
                            state.update(|s| s.filters.date_to = event_target_value(&ev));
                        }
                    />
                </div>
                <div class="filter-panel__field filter-panel__field--wide">
                    <label>"キーワード"</label>
                    <input
                        type="text"
                        placeholder="内容・客先・担当者・製品を検索"
                        prop:value=move || state.get().filters.search
                        on:input=move |ev| {
                            state.update(|s| s.filters.search = event_target_value(&ev));
                        }
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                apply_filters();
                            }
                        }
                    />
                </div>
                <div class="filter-panel__actions">
                    <button class="button button--primary" on:click=move |_| apply_filters()>
                        "絞り込み"
                    </button>
                    <button class="button button--secondary" on:click=move |_| clear_filters()>
                        "クリア"
                    </button>
                </div>
            </div>

            <div class="report-list__header">
                <h2>"週報一覧"</h2>
                <span class="report-list__count">
                    {move || format!("全 {} 件", total_count.get())}
                </span>
            </div>

            {move || {
                if let Some(message) = error.get() {
                    return view! { <div class="error">{message}</div> }.into_any();
                }

                let items = rows.get();
                if items.is_empty() {
                    return view! {
                        <div class="info-note">"該当する週報がありません"</div>
                    }.into_any();
                }

                view! {
                    <div class="table-container">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell table__header-cell--checkbox">
                                        <input
                                            type="checkbox"
                                            class="table__checkbox"
                                            prop:checked=move || {
                                                let items = rows.get();
                                                !items.is_empty()
                                                    && selection.selected.with(|s| {
                                                        items.iter().all(|r| s.contains(&r.mail_id))
                                                    })
                                            }
                                            on:change=move |ev| {
                                                let checked = event_target_checked(&ev);
                                                for row in rows.get_untracked() {
                                                    if checked {
                                                        selection.select(row.mail_id.clone());
                                                    } else {
                                                        selection.deselect(&row.mail_id);
                                                    }
                                                }
                                            }
                                        />
                                    </th>
                                    <th class="table__header-cell">"日付"</th>
                                    <th class="table__header-cell">"報告者"</th>
                                    <th class="table__header-cell">"客先"</th>
                                    <th class="table__header-cell">"製品"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {items.into_iter().map(|row| {
                                    report_row(row, selection, cross_filter, state, load)
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }.into_any()
            }}

            <PaginationControls
                total_count=total_count
                current_page=Signal::derive(move || state.get().page)
                per_page=PER_PAGE
                on_page_change=Callback::new(move |page| load(page))
            />
        </div>
    }
}

fn report_row(
    row: ReportRow,
    selection: SelectionService,
    cross_filter: CrossFilterService,
    state: RwSignal<state::ReportListState>,
    load: impl Fn(usize) + Copy + 'static,
) -> impl IntoView {
    let mail_id_checked = row.mail_id.clone();
    let mail_id_toggle = row.mail_id.clone();

    let date_text = format_date(row.report_date.as_deref().unwrap_or(""));

    let reporter_cell = match row.reporter.clone().filter(|r| r.as_str() != "-") {
        Some(name) => {
            let label = name.clone();
            view! {
                <a class="cross-filter-link" on:click=move |_| {
                    state.update(|s| s.filters.reporter = name.clone());
                    load(1);
                }>{label}</a>
            }
            .into_any()
        }
        None => view! { <span>"-"</span> }.into_any(),
    };

    let client_names = split_clients(row.clients.as_deref().unwrap_or("-"));
    let client_cell = name_links(client_names, move |name| cross_filter.show_client(name));

    let product_names = split_products(row.products.as_deref().unwrap_or("-"));
    let product_cell = name_links(product_names, move |name| cross_filter.show_product(name));

    view! {
        <tr class="table__row">
            <td class="table__cell table__cell--checkbox">
                <input
                    type="checkbox"
                    class="table__checkbox"
                    prop:checked=move || selection.is_selected(&mail_id_checked)
                    on:change=move |ev| {
                        if event_target_checked(&ev) {
                            selection.select(mail_id_toggle.clone());
                        } else {
                            selection.deselect(&mail_id_toggle);
                        }
                    }
                />
            </td>
            <td class="table__cell">{date_text}</td>
            <td class="table__cell">{reporter_cell}</td>
            <td class="table__cell">{client_cell}</td>
            <td class="table__cell">{product_cell}</td>
        </tr>
    }
}

/// Render a token list as comma-joined cross-filter links, or a plain dash
/// when no tokens survived the split.
fn name_links(names: Vec<String>, on_click: impl Fn(String) + Copy + 'static) -> AnyView {
    if names.is_empty() {
        return view! { <span>"-"</span> }.into_any();
    }
    let links: Vec<AnyView> = names
        .into_iter()
        .enumerate()
        .map(|(index, name)| {
            let label = name.clone();
            view! {
                <span>
                    {(index > 0).then_some(", ")}
                    <a class="cross-filter-link" on:click=move |_| on_click(name.clone())>
                        {label}
                    </a>
                </span>
            }
            .into_any()
        })
        .collect();
    view! { <>{links}</> }.into_any()
}

use leptos::prelude::*;

/// Pages shown on each side of the current page.
const WINDOW_RADIUS: usize = 2;

/// Total number of pages for a listing of `total_count` records.
pub fn total_pages(total_count: u64, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total_count.div_ceil(per_page as u64) as usize
}

/// Precomputed layout of the pagination control for one listing response:
/// the windowed page range around the current page and the 1-based record
/// bounds of the current slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub current: usize,
    pub total_pages: usize,
    pub start: usize,
    pub end: usize,
    pub first_item: u64,
    pub last_item: u64,
}

impl PageWindow {
    /// Returns `None` when everything fits on a single page and no control
    /// should be rendered at all.
    pub fn compute(total_count: u64, per_page: usize, current: usize) -> Option<Self> {
        let total = total_pages(total_count, per_page);
        if total <= 1 {
            return None;
        }
        let start = current.saturating_sub(WINDOW_RADIUS).max(1);
        let end = (current + WINDOW_RADIUS).min(total);
        let first_item = (current.saturating_sub(1) * per_page) as u64 + 1;
        let last_item = ((current * per_page) as u64).min(total_count);
        Some(Self {
            current,
            total_pages: total,
            start,
            end,
            first_item,
            last_item,
        })
    }

    /// A jump-to-first link is rendered when the window does not start at 1.
    pub fn has_first_jump(&self) -> bool {
        self.start > 1
    }

    /// The leading ellipsis appears only when pages between 1 and the
    /// window start are skipped.
    pub fn leading_ellipsis(&self) -> bool {
        self.start > 2
    }

    pub fn has_last_jump(&self) -> bool {
        self.end < self.total_pages
    }

    pub fn trailing_ellipsis(&self) -> bool {
        self.end + 1 < self.total_pages
    }

    pub fn pages(&self) -> std::ops::RangeInclusive<usize> {
        self.start..=self.end
    }
}

#[component]
pub fn PaginationControls(
    /// Total number of matching records (not pages)
    #[prop(into)]
    total_count: Signal<u64>,

    /// Current 1-based page
    #[prop(into)]
    current_page: Signal<usize>,

    /// Fixed page size of the listing
    per_page: usize,

    /// Callback when a page link is activated
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        {move || {
            let Some(win) = PageWindow::compute(total_count.get(), per_page, current_page.get())
            else {
                return view! {}.into_any();
            };

            let mut items: Vec<AnyView> = Vec::new();

            if win.current > 1 {
                let target = win.current - 1;
                items.push(view! {
                    <button class="pagination-btn" on:click=move |_| on_page_change.run(target)>
                        "前へ"
                    </button>
                }.into_any());
            } else {
                items.push(view! {
                    <span class="pagination-btn pagination-btn--disabled">"前へ"</span>
                }.into_any());
            }

            if win.has_first_jump() {
                items.push(view! {
                    <button class="pagination-btn" on:click=move |_| on_page_change.run(1)>
                        "1"
                    </button>
                }.into_any());
                if win.leading_ellipsis() {
                    items.push(view! { <span class="pagination-ellipsis">"..."</span> }.into_any());
                }
            }

            for page in win.pages() {
                if page == win.current {
                    items.push(view! {
                        <span class="pagination-btn pagination-btn--active">{page.to_string()}</span>
                    }.into_any());
                } else {
                    items.push(view! {
                        <button class="pagination-btn" on:click=move |_| on_page_change.run(page)>
                            {page.to_string()}
                        </button>
                    }.into_any());
                }
            }

            if win.has_last_jump() {
                if win.trailing_ellipsis() {
                    items.push(view! { <span class="pagination-ellipsis">"..."</span> }.into_any());
                }
                let last = win.total_pages;
                items.push(view! {
                    <button class="pagination-btn" on:click=move |_| on_page_change.run(last)>
                        {last.to_string()}
                    </button>
                }.into_any());
            }

            if win.current < win.total_pages {
                let target = win.current + 1;
                items.push(view! {
                    <button class="pagination-btn" on:click=move |_| on_page_change.run(target)>
                        "次へ"
                    </button>
                }.into_any());
            } else {
                items.push(view! {
                    <span class="pagination-btn pagination-btn--disabled">"次へ"</span>
                }.into_any());
            }

            let summary = format!(
                "{} - {} 件 (全 {} 件中)",
                win.first_item,
                win.last_item,
                total_count.get()
            );

            view! {
                <nav class="pagination-controls">
                    {items}
                    <div class="pagination-summary">{summary}</div>
                </nav>
            }.into_any()
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_ceiling_division() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(95, 10), 10);
    }

    #[test]
    fn single_page_renders_nothing() {
        assert!(PageWindow::compute(0, 10, 1).is_none());
        assert!(PageWindow::compute(10, 10, 1).is_none());
        assert!(PageWindow::compute(11, 10, 1).is_some());
    }

    #[test]
    fn window_is_clamped_to_valid_pages() {
        let win = PageWindow::compute(100, 10, 1).unwrap();
        assert_eq!((win.start, win.end), (1, 3));

        let win = PageWindow::compute(100, 10, 5).unwrap();
        assert_eq!((win.start, win.end), (3, 7));

        let win = PageWindow::compute(100, 10, 10).unwrap();
        assert_eq!((win.start, win.end), (8, 10));
    }

    #[test]
    fn ellipsis_only_when_pages_are_skipped() {
        // window starts at 2: the jump-to-1 link alone bridges the gap
        let win = PageWindow::compute(100, 10, 4).unwrap();
        assert_eq!(win.start, 2);
        assert!(win.has_first_jump());
        assert!(!win.leading_ellipsis());

        let win = PageWindow::compute(100, 10, 5).unwrap();
        assert!(win.leading_ellipsis());

        // window ends at total_pages - 1: jump-to-last alone bridges it
        let win = PageWindow::compute(100, 10, 7).unwrap();
        assert_eq!(win.end, 9);
        assert!(win.has_last_jump());
        assert!(!win.trailing_ellipsis());

        let win = PageWindow::compute(100, 10, 6).unwrap();
        assert!(win.trailing_ellipsis());
    }

    #[test]
    fn summary_bounds_are_one_based_inclusive() {
        let win = PageWindow::compute(95, 10, 3).unwrap();
        assert_eq!((win.first_item, win.last_item), (21, 30));

        // last page is partial
        let win = PageWindow::compute(95, 10, 10).unwrap();
        assert_eq!((win.first_item, win.last_item), (91, 95));
    }
}

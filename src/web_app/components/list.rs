// web_app/components/list.rs - Generic paginated list view
//
// ResourceList renders any ListController:
// - ListToolbar: submit-only search form, refresh button, create link
// - the table with sortable headers, badge cells, optional expandable
//   detail rows and a per-row action cell
// - Pagination: prev/next plus the page-size selector
//
// The controller lives in one RwSignal. Fetches run with spawn_local and
// settle back into it by ticket, so a late response for an old query is
// dropped by the controller.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::components::common::{Badge, ConfirmDialog, ErrorDisplay, Loading};
use crate::web_app::list::{
    ActionOutcome, ActiveSort, ColumnDescriptor, CreateAction, EmptyState, FetchTicket, ListConfig,
    ListController, PageInfo, Refresh, RenderPlan, RowAction, SortDirection,
};

/// Delete awaiting confirmation in the dialog
struct PendingDelete<T> {
    action: usize,
    row: T,
    prompt: String,
}

/// Paginated, searchable resource list
///
/// Owns its query state. Remote lists fetch once after hydration; static
/// lists render immediately.
#[component]
pub fn ResourceList<T>(
    /// Validated list configuration
    config: ListConfig<T>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let list = RwSignal::new(ListController::new(config));
    let pending_delete = RwSignal::new(None::<PendingDelete<T>>);
    let search_input = RwSignal::new(String::new());

    // Run an issued ticket and settle its outcome
    let drive = move |ticket: Option<FetchTicket>| {
        let Some(ticket) = ticket else {
            return;
        };
        let Some(pending) = list.try_with_untracked(|l| l.fetch(&ticket)).flatten() else {
            return;
        };
        spawn_local(async move {
            let outcome = pending.await;
            list.try_update(|l| l.settle(&ticket, outcome));
        });
    };

    // Client only: effects do not run during SSR
    Effect::new(move || {
        drive(list.try_update(|l| l.mount()).flatten());
    });

    let on_search = Callback::new(move |term: String| {
        drive(list.try_update(|l| l.search(term)).flatten());
    });
    let on_refresh = Callback::new(move |_: ()| {
        drive(refresh_and_clear(list, search_input));
    });
    let on_page = Callback::new(move |page: u32| {
        drive(list.try_update(|l| l.change_page(page)).flatten());
    });
    let on_page_size = Callback::new(move |size: u32| {
        drive(list.try_update(|l| l.change_page_size(size)).flatten());
    });
    let on_sort = Callback::new(move |(field, direction): (&'static str, SortDirection)| {
        list.update(|l| {
            l.sort_locally(field, direction);
        });
    });
    let on_toggle = Callback::new(move |index: usize| {
        list.update(|l| {
            l.toggle_expanded(index);
        });
    });
    let refresh = Refresh::new(move || on_refresh.run(()));

    let (search_enabled, placeholder, create, page_size_options) = list.with_untracked(|l| {
        let config = l.config();
        (
            config.search_enabled,
            config.search_placeholder.clone(),
            config.empty_state.create.clone(),
            config.page_size_options.clone(),
        )
    });

    let is_empty = move || list.with(|l| matches!(l.render_plan(), RenderPlan::Empty(_)));

    let table_refresh = refresh.clone();
    let body = move || {
        list.with(|l| match l.render_plan() {
            RenderPlan::Empty(empty) => view! { <EmptyStateCard empty=empty.clone() /> }.into_any(),
            RenderPlan::Loading => view! { <Loading /> }.into_any(),
            RenderPlan::Error(message) => {
                view! { <ErrorDisplay error=message.to_string() on_retry=on_refresh /> }.into_any()
            }
            RenderPlan::NoData(message) => view! {
                <p class="text-center text-gray-500 py-12" role="status">{message.to_string()}</p>
            }
            .into_any(),
            RenderPlan::Table(rows) => {
                let config = l.config();
                let details = config.is_expandable().then(|| {
                    rows.iter()
                        .enumerate()
                        .map(|(i, row)| {
                            l.is_expanded(i)
                                .then(|| config.expanded_content(row))
                                .flatten()
                        })
                        .collect()
                });
                let table = table_view(
                    rows.to_vec(),
                    config.columns.clone(),
                    config.row_actions.clone(),
                    TableState {
                        sort: l.active_sort(),
                        details,
                    },
                    TableEvents {
                        on_sort,
                        on_toggle,
                        pending_delete,
                        refresh: table_refresh.clone(),
                    },
                );
                view! {
                    {table}
                    <Pagination
                        info=l.page_info()
                        page_size_options=page_size_options.clone()
                        on_page=on_page
                        on_page_size=on_page_size
                    />
                }
                .into_any()
            }
        })
    };

    let confirm_dialog = move || {
        let prompt = pending_delete.with(|p| p.as_ref().map(|p| p.prompt.clone()))?;
        let cancel = Callback::new(move |_: ()| pending_delete.set(None));
        let refresh = refresh.clone();
        let confirm = Callback::new(move |_: ()| {
            let Some(pending) = pending_delete.try_update(Option::take).flatten() else {
                return;
            };
            let outcome = list
                .try_with_untracked(|l| {
                    l.config()
                        .row_actions
                        .get(pending.action)
                        .map(|action| action.invoke(&pending.row, refresh.clone()))
                })
                .flatten();
            if let Some(outcome) = outcome {
                run_outcome(outcome);
            }
        });

        Some(view! {
            <ConfirmDialog title="Confirm Delete" message=prompt on_confirm=confirm on_cancel=cancel />
        })
    };

    view! {
        <section class="space-y-4">
            <Show when=move || !is_empty()>
                <ListToolbar
                    search_enabled=search_enabled
                    placeholder=placeholder.clone()
                    term=search_input
                    on_search=on_search
                    on_refresh=on_refresh
                    create=create.clone()
                />
            </Show>
            {body}
            {confirm_dialog}
        </section>
    }
}

/// Refresh the list and empty the search box, including text that was
/// typed but never submitted
fn refresh_and_clear<T>(
    list: RwSignal<ListController<T>>,
    search_input: RwSignal<String>,
) -> Option<FetchTicket>
where
    T: Clone + Send + Sync + 'static,
{
    search_input.try_set(String::new());
    list.try_update(|l| l.refresh()).flatten()
}

/// Per-render table state taken from the controller
struct TableState {
    sort: Option<ActiveSort>,
    /// One entry per row when rows can expand; `Some` holds an open row's detail
    details: Option<Vec<Option<String>>>,
}

struct TableEvents<T: Send + Sync + 'static> {
    on_sort: Callback<(&'static str, SortDirection)>,
    on_toggle: Callback<usize>,
    pending_delete: RwSignal<Option<PendingDelete<T>>>,
    refresh: Refresh,
}

fn table_view<T>(
    rows: Vec<T>,
    columns: Vec<ColumnDescriptor<T>>,
    actions: Vec<RowAction<T>>,
    state: TableState,
    events: TableEvents<T>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let TableState { sort, details } = state;
    let TableEvents {
        on_sort,
        on_toggle,
        pending_delete,
        refresh,
    } = events;

    let headers = columns
        .iter()
        .map(|column| {
            let current = sort
                .filter(|s| s.field == column.field)
                .map(|s| s.direction);
            let label = column.label.clone();
            if !column.sortable {
                return view! {
                    <th scope="col" class="px-4 py-3 text-left text-xs font-semibold text-gray-600 uppercase">
                        {label}
                    </th>
                }
                .into_any();
            }

            let field = column.field;
            let next = current.map(SortDirection::toggled).unwrap_or_default();
            let (indicator, aria_sort) = match current {
                Some(SortDirection::Ascending) => (" ▲", "ascending"),
                Some(SortDirection::Descending) => (" ▼", "descending"),
                None => ("", "none"),
            };
            view! {
                <th scope="col" aria-sort=aria_sort class="px-4 py-3 text-left text-xs font-semibold text-gray-600 uppercase">
                    <button
                        type="button"
                        class="uppercase hover:text-blue-600"
                        aria-label=column.sort_aria_label(current)
                        on:click=move |_| on_sort.run((field, next))
                    >
                        {label}
                        {indicator}
                    </button>
                </th>
            }
            .into_any()
        })
        .collect_view();

    let expandable = details.is_some();
    let has_actions = !actions.is_empty();
    let span = columns.len() + usize::from(expandable) + usize::from(has_actions);
    let mut details = details.unwrap_or_default().into_iter();

    let body_rows = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| {
            let row_name = columns.first().map(|c| c.display(&row)).unwrap_or_default();
            let detail = details.next().flatten();
            let is_open = detail.is_some();

            let toggle_cell = expandable.then(|| {
                let aria = if is_open {
                    format!("Hide details of {}", row_name)
                } else {
                    format!("Show details of {}", row_name)
                };
                view! {
                    <td class="pl-4 py-3 w-8">
                        <button
                            type="button"
                            class="text-gray-500 hover:text-gray-800"
                            aria-expanded={if is_open { "true" } else { "false" }}
                            aria-label=aria
                            on:click=move |_| on_toggle.run(index)
                        >
                            {if is_open { "▾" } else { "▸" }}
                        </button>
                    </td>
                }
            });
            let cells = columns
                .iter()
                .map(|column| {
                    let text = column.display(&row);
                    match column.badge_variant(&row) {
                        Some(variant) => view! {
                            <td class="px-4 py-3 text-sm">
                                <Badge variant=variant>{text}</Badge>
                            </td>
                        }
                        .into_any(),
                        None => view! { <td class="px-4 py-3 text-sm text-gray-800">{text}</td> }
                            .into_any(),
                    }
                })
                .collect_view();
            let action_cell = has_actions.then(|| {
                view! {
                    <td class="px-4 py-3 text-sm text-right whitespace-nowrap space-x-3">
                        {action_buttons(&row, &row_name, &actions, pending_delete, &refresh)}
                    </td>
                }
            });
            let detail_row = detail.map(|text| {
                view! {
                    <tr class="bg-gray-50">
                        <td colspan=span.to_string() class="px-12 py-3 text-sm text-gray-600 whitespace-pre-line">
                            {text}
                        </td>
                    </tr>
                }
            });
            view! {
                <tr class="border-t border-gray-100 hover:bg-gray-50">
                    {toggle_cell}
                    {cells}
                    {action_cell}
                </tr>
                {detail_row}
            }
        })
        .collect_view();

    view! {
        <div class="overflow-x-auto bg-white rounded-xl border border-gray-200 shadow-sm">
            <table class="min-w-full">
                <thead class="bg-gray-50">
                    <tr>
                        {expandable.then(|| view! { <th scope="col" class="w-8"><span class="sr-only">"Details"</span></th> })}
                        {headers}
                        {has_actions.then(|| view! {
                            <th scope="col" class="px-4 py-3 text-right text-xs font-semibold text-gray-600 uppercase">
                                "Actions"
                            </th>
                        })}
                    </tr>
                </thead>
                <tbody>{body_rows}</tbody>
            </table>
        </div>
    }
}

fn action_buttons<T>(
    row: &T,
    row_name: &str,
    actions: &[RowAction<T>],
    pending_delete: RwSignal<Option<PendingDelete<T>>>,
    refresh: &Refresh,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    actions
        .iter()
        .enumerate()
        .map(|(index, action)| {
            let label = action.label().label.clone();
            let aria = action.label().aria_for(row_name);
            match action {
                RowAction::Edit { .. } => {
                    let href = action.href(row).unwrap_or_default();
                    view! {
                        <a href=href aria-label=aria class="text-blue-600 hover:underline">{label}</a>
                    }
                    .into_any()
                }
                RowAction::Delete { .. } => {
                    let prompt = action.confirmation(row).unwrap_or_default();
                    let row = row.clone();
                    view! {
                        <button
                            type="button"
                            aria-label=aria
                            class="text-red-600 hover:underline"
                            on:click=move |_| {
                                pending_delete.set(Some(PendingDelete {
                                    action: index,
                                    row: row.clone(),
                                    prompt: prompt.clone(),
                                }))
                            }
                        >
                            {label}
                        </button>
                    }
                    .into_any()
                }
                RowAction::Custom { .. } => {
                    let action = action.clone();
                    let row = row.clone();
                    let refresh = refresh.clone();
                    view! {
                        <button
                            type="button"
                            aria-label=aria
                            class="text-gray-700 hover:underline"
                            on:click=move |_| run_outcome(action.invoke(&row, refresh.clone()))
                        >
                            {label}
                        </button>
                    }
                    .into_any()
                }
            }
        })
        .collect_view()
}

fn run_outcome(outcome: ActionOutcome) {
    match outcome {
        ActionOutcome::Pending(task) => spawn_local(task),
        ActionOutcome::Navigate(path) => {
            let navigated = leptos::web_sys::window().map(|w| w.location().set_href(&path));
            if !matches!(navigated, Some(Ok(()))) {
                tracing::error!("Navigation to {} failed", path);
            }
        }
        ActionOutcome::Done => {}
    }
}

/// Toolbar above the table
///
/// The search input keeps its own text; only submitting the form (Enter or
/// the button) runs a search.
#[component]
pub fn ListToolbar(
    search_enabled: bool,
    placeholder: String,
    /// Text currently in the search box
    term: RwSignal<String>,
    on_search: Callback<String>,
    on_refresh: Callback<()>,
    /// Create link shown on the right, if any
    create: Option<CreateAction>,
) -> impl IntoView {
    let search_form = search_enabled.then(move || {
        let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            on_search.run(term.get_untracked());
        };
        view! {
            <form role="search" class="flex flex-1 gap-2" on:submit=on_submit>
                <input
                    type="search"
                    aria-label="Search"
                    placeholder=placeholder
                    class="flex-1 px-4 py-2 border border-gray-300 rounded-lg \
                           focus:ring-2 focus:ring-blue-100 focus:border-blue-500 outline-none"
                    prop:value=move || term.get()
                    on:input=move |ev| term.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 font-medium"
                >
                    "Search"
                </button>
            </form>
        }
    });

    view! {
        <div class="flex flex-wrap items-center gap-3">
            {search_form}
            <button
                type="button"
                aria-label="Reload list"
                title="Reload"
                class="px-3 py-2 text-gray-600 border border-gray-300 rounded-lg hover:bg-gray-50"
                on:click=move |_| on_refresh.run(())
            >
                "⟳"
            </button>
            {create.map(|c| view! {
                <a
                    href=c.href
                    class="ml-auto px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 font-medium"
                >
                    {c.label}
                </a>
            })}
        </div>
    }
}

/// Card shown when a list has no data source
#[component]
pub fn EmptyStateCard(empty: EmptyState) -> impl IntoView {
    let EmptyState {
        title,
        content,
        create,
    } = empty;

    view! {
        <div class="bg-white border-2 border-dashed border-gray-200 rounded-xl p-12 text-center" role="status">
            <h3 class="text-lg font-semibold text-gray-800 mb-2">{title}</h3>
            <p class="text-gray-500 mb-6">{content}</p>
            {create.map(|c| view! {
                <a
                    href=c.href
                    class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 font-medium"
                >
                    {c.label}
                </a>
            })}
        </div>
    }
}

/// Pagination footer with rows-per-page selector
#[component]
pub fn Pagination(
    info: PageInfo,
    page_size_options: Vec<u32>,
    /// Called with the zero-based page to show
    on_page: Callback<u32>,
    on_page_size: Callback<u32>,
) -> impl IntoView {
    let page = info.page;
    let options = page_size_options
        .into_iter()
        .map(|size| {
            view! {
                <option value=size.to_string() selected={size == info.page_size}>{size}</option>
            }
        })
        .collect_view();

    let button_class = "px-3 py-1.5 bg-white border border-gray-200 rounded-lg shadow-sm \
                        disabled:opacity-50 disabled:cursor-not-allowed \
                        hover:bg-gray-50 transition-all text-sm text-gray-700";

    view! {
        <nav aria-label="Pagination" class="flex flex-wrap items-center justify-end gap-4 text-sm text-gray-600">
            <label class="flex items-center gap-2">
                "Rows per page:"
                <select
                    aria-label="Rows per page"
                    class="border border-gray-300 rounded-md px-2 py-1"
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                            on_page_size.run(size);
                        }
                    }
                >
                    {options}
                </select>
            </label>
            <span>{info.range_label()}</span>
            <button
                type="button"
                class=button_class
                aria-label="Previous page"
                disabled={!info.can_go_prev}
                on:click=move |_| on_page.run(page.saturating_sub(1))
            >
                "←"
            </button>
            <button
                type="button"
                class=button_class
                aria-label="Next page"
                disabled={!info.can_go_next}
                on:click=move |_| on_page.run(page + 1)
            >
                "→"
            </button>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier_list() -> ListController<String> {
        ListController::new(
            ListConfig::builder()
                .static_items(vec!["Gold".to_string(), "Silver".to_string()])
                .local_search(|row: &String, term: &str| row.to_lowercase().contains(term))
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_refresh_clears_unsubmitted_search_text() {
        let owner = Owner::new();
        owner.set();

        let list = RwSignal::new(tier_list());
        let search_input = RwSignal::new(String::new());
        search_input.set("gol".to_string());

        assert!(refresh_and_clear(list, search_input).is_none());
        assert_eq!(search_input.get_untracked(), "");
        assert_eq!(list.with_untracked(|l| l.query().search_term.clone()), "");
    }

    #[test]
    fn test_refresh_clears_submitted_search() {
        let owner = Owner::new();
        owner.set();

        let list = RwSignal::new(tier_list());
        let search_input = RwSignal::new("sil".to_string());
        list.update(|l| {
            l.search("sil");
        });
        assert_eq!(list.with_untracked(|l| l.total_count()), 1);

        refresh_and_clear(list, search_input);
        assert_eq!(search_input.get_untracked(), "");
        assert_eq!(list.with_untracked(|l| l.total_count()), 2);
    }
}

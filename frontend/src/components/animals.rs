use leptos::prelude::*;
use leptos::task::spawn_local;
use vetclinic_shared::listing::paginate;
use vetclinic_shared::protocol::AnimalQuery;
use vetclinic_shared::{Animal, AnimalStatus};

use crate::auth::use_auth;
use crate::components::alert::{ErrorAlert, Spinner};
use crate::web::route::AppRoute;
use crate::web::router::Link;

const PER_PAGE: usize = 10;

#[component]
pub fn AnimalsPage() -> impl IntoView {
    let auth = use_auth();

    let (animals, set_animals) = signal(Vec::<Animal>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let search = RwSignal::new(String::new());
    let status = RwSignal::new(Option::<AnimalStatus>::None);
    // 从 0 开始
    let page = RwSignal::new(0usize);

    let load = move || {
        let mut query = AnimalQuery::from_search_term(&search.get_untracked());
        query.status = status.get_untracked();
        let client = auth.client();
        set_loading.set(true);
        spawn_local(async move {
            match client.fetch_animals(&query).await {
                Ok(list) => {
                    set_animals.set(list);
                    set_error_msg.set(None);
                }
                Err(e) => set_error_msg.set(Some(e.user_message())),
            }
            set_loading.set(false);
        });
    };

    // 初始加载
    load();

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        page.set(0);
        load();
    };

    let handle_delete = move |id: i64| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Delete this animal?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let client = auth.client();
        spawn_local(async move {
            match client.delete_animal(id).await {
                Ok(()) => set_animals.update(|list| list.retain(|a| a.id != id)),
                Err(e) => set_error_msg.set(Some(e.user_message())),
            }
        });
    };

    let current_page = move || animals.with(|list| paginate(list, page.get(), PER_PAGE));

    view! {
        <div class="max-w-7xl mx-auto card bg-base-100 shadow-xl">
            <div class="card-body">
                <div class="flex flex-wrap items-center justify-between gap-4">
                    <h2 class="card-title">"Animals"</h2>
                    <Link to=AppRoute::AddAnimal class="btn btn-primary btn-sm">"Add animal"</Link>
                </div>

                <form class="flex flex-wrap gap-2" on:submit=on_search>
                    <input
                        type="search"
                        placeholder="Search by name or owner"
                        class="input input-bordered input-sm"
                        on:input=move |ev| search.set(event_target_value(&ev))
                        prop:value=search
                    />
                    <select
                        class="select select-bordered select-sm"
                        on:change=move |ev| status.set(AnimalStatus::from_label(&event_target_value(&ev)))
                    >
                        <option value="">"All statuses"</option>
                        {AnimalStatus::ALL.into_iter().map(|s| {
                            let label = s.label().to_string();
                            view! { <option value=label.clone()>{label.clone()}</option> }
                        }).collect_view()}
                    </select>
                    <button class="btn btn-sm">"Search"</button>
                </form>

                <ErrorAlert message=error_msg />

                <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Type"</th>
                                <th class="hidden md:table-cell">"Breed"</th>
                                <th>"Status"</th>
                                <th class="hidden md:table-cell">"Owner"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || animals.with(Vec::is_empty)>
                                <tr>
                                    <td colspan="6" class="text-center py-8 text-base-content/50">"No animals found."</td>
                                </tr>
                            </Show>
                            <For
                                each=move || current_page().items
                                key=|a| a.id
                                children=move |a: Animal| {
                                    let id = a.id;
                                    let status_label = a.info.status.label().to_string();
                                    view! {
                                        <tr>
                                            <td>{a.info.name}</td>
                                            <td>{a.info.kind}</td>
                                            <td class="hidden md:table-cell">{a.info.breed.unwrap_or_default()}</td>
                                            <td><span class="badge badge-outline">{status_label}</span></td>
                                            <td class="hidden md:table-cell">{a.info.owner_name.unwrap_or_default()}</td>
                                            <td>
                                                <button class="btn btn-ghost btn-xs text-error" on:click=move |_| handle_delete(id)>
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>

                    <div class="join self-center">
                        <button
                            class="join-item btn btn-sm"
                            disabled=move || !current_page().has_previous()
                            on:click=move |_| page.set(current_page().page.saturating_sub(1))
                        >
                            "«"
                        </button>
                        <button class="join-item btn btn-sm btn-disabled">
                            {move || {
                                let p = current_page();
                                format!("Page {} of {}", p.page + 1, p.total_pages.max(1))
                            }}
                        </button>
                        <button
                            class="join-item btn btn-sm"
                            disabled=move || !current_page().has_next()
                            on:click=move |_| page.set(current_page().page + 1)
                        >
                            "»"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}

use leptos::prelude::*;
use leptos::task::spawn_local;
use vetclinic_shared::StaffMember;
use vetclinic_shared::protocol::StaffQuery;

use crate::auth::use_auth;
use crate::components::alert::{ErrorAlert, Spinner};

#[component]
pub fn StaffPage() -> impl IntoView {
    let auth = use_auth();

    let (staff, set_staff) = signal(Vec::<StaffMember>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let role = RwSignal::new(String::new());
    let active_only = RwSignal::new(true);

    let load = move || {
        let query = StaffQuery {
            role: Some(role.get_untracked()),
            active: active_only.get_untracked().then_some(true),
        };
        let client = auth.client();
        set_loading.set(true);
        spawn_local(async move {
            match client.fetch_staff(&query).await {
                Ok(list) => {
                    set_staff.set(list);
                    set_error_msg.set(None);
                }
                Err(e) => set_error_msg.set(Some(e.user_message())),
            }
            set_loading.set(false);
        });
    };

    load();

    let on_filter = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        load();
    };

    // 删除在服务端是停用
    let handle_deactivate = move |id: i64| {
        let client = auth.client();
        spawn_local(async move {
            match client.deactivate_staff(id).await {
                Ok(()) => set_staff.update(|list| {
                    for member in list.iter_mut().filter(|m| m.id == id) {
                        member.info.is_active = false;
                    }
                }),
                Err(e) => set_error_msg.set(Some(e.user_message())),
            }
        });
    };

    view! {
        <div class="max-w-7xl mx-auto card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title">"Staff"</h2>

                <form class="flex flex-wrap items-center gap-2" on:submit=on_filter>
                    <input
                        type="text"
                        placeholder="Role"
                        class="input input-bordered input-sm"
                        on:input=move |ev| role.set(event_target_value(&ev))
                        prop:value=role
                    />
                    <label class="label cursor-pointer gap-2">
                        <input
                            type="checkbox"
                            class="checkbox checkbox-sm"
                            prop:checked=active_only
                            on:change=move |ev| active_only.set(event_target_checked(&ev))
                        />
                        <span class="label-text">"Active only"</span>
                    </label>
                    <button class="btn btn-sm">"Filter"</button>
                </form>

                <ErrorAlert message=error_msg />

                <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Role"</th>
                                <th class="hidden md:table-cell">"Specialization"</th>
                                <th class="hidden md:table-cell">"Email"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || staff.get()
                                key=|m| (m.id, m.info.is_active)
                                children=move |m: StaffMember| {
                                    let id = m.id;
                                    let active = m.info.is_active;
                                    view! {
                                        <tr>
                                            <td>{m.info.full_name()}</td>
                                            <td>{m.info.role}</td>
                                            <td class="hidden md:table-cell">{m.info.specialization.unwrap_or_default()}</td>
                                            <td class="hidden md:table-cell">{m.info.email.unwrap_or_default()}</td>
                                            <td>
                                                {if active {
                                                    view! { <span class="badge badge-success">"Active"</span> }.into_any()
                                                } else {
                                                    view! { <span class="badge badge-ghost">"Inactive"</span> }.into_any()
                                                }}
                                            </td>
                                            <td>
                                                <Show when=move || active>
                                                    <button class="btn btn-ghost btn-xs text-error" on:click=move |_| handle_deactivate(id)>
                                                        "Deactivate"
                                                    </button>
                                                </Show>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </div>
        </div>
    }
}

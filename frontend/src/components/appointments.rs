use leptos::prelude::*;
use leptos::task::spawn_local;
use vetclinic_shared::protocol::AppointmentQuery;
use vetclinic_shared::{Appointment, AppointmentStatus};

use crate::auth::use_auth;
use crate::components::alert::{ErrorAlert, Spinner};

fn status_badge(status: &AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Scheduled => "badge badge-info",
        AppointmentStatus::Completed => "badge badge-success",
        AppointmentStatus::Cancelled => "badge badge-ghost",
        AppointmentStatus::Emergency => "badge badge-error",
        AppointmentStatus::Other(_) => "badge",
    }
}

#[component]
pub fn AppointmentsPage() -> impl IntoView {
    let auth = use_auth();

    let (appointments, set_appointments) = signal(Vec::<Appointment>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let status = RwSignal::new(Option::<AppointmentStatus>::None);

    // 状态筛选变化时重新加载
    Effect::new(move |_| {
        let query = AppointmentQuery {
            status: status.get(),
            animal_id: None,
        };
        let client = auth.client();
        set_loading.set(true);
        spawn_local(async move {
            match client.fetch_appointments(&query).await {
                Ok(list) => {
                    set_appointments.set(list);
                    set_error_msg.set(None);
                }
                Err(e) => set_error_msg.set(Some(e.user_message())),
            }
            set_loading.set(false);
        });
    });

    let handle_delete = move |id: i64| {
        let client = auth.client();
        spawn_local(async move {
            match client.delete_appointment(id).await {
                Ok(()) => set_appointments.update(|list| list.retain(|a| a.id != id)),
                Err(e) => set_error_msg.set(Some(e.user_message())),
            }
        });
    };

    view! {
        <div class="max-w-7xl mx-auto card bg-base-100 shadow-xl">
            <div class="card-body">
                <div class="flex flex-wrap items-center justify-between gap-4">
                    <h2 class="card-title">"Appointments"</h2>
                    <select
                        class="select select-bordered select-sm"
                        on:change=move |ev| status.set(AppointmentStatus::from_label(&event_target_value(&ev)))
                    >
                        <option value="">"All statuses"</option>
                        {AppointmentStatus::ALL.into_iter().map(|s| {
                            let label = s.label().to_string();
                            view! { <option value=label.clone()>{label.clone()}</option> }
                        }).collect_view()}
                    </select>
                </div>

                <ErrorAlert message=error_msg />

                <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Date & time"</th>
                                <th>"Type"</th>
                                <th>"Animal"</th>
                                <th class="hidden md:table-cell">"Veterinarian"</th>
                                <th class="hidden md:table-cell">"Description"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || appointments.get()
                                key=|a| a.id
                                children=move |a: Appointment| {
                                    let id = a.id;
                                    let animal = a.info.animal_label();
                                    let vet = a.info.veterinarian_label().to_string();
                                    let badge = status_badge(&a.info.status);
                                    let status_label = a.info.status.label().to_string();
                                    view! {
                                        <tr>
                                            <td>{a.info.date_time}</td>
                                            <td>{a.info.kind}</td>
                                            <td>{animal}</td>
                                            <td class="hidden md:table-cell">{vet}</td>
                                            <td class="hidden md:table-cell">{a.info.description.unwrap_or_default()}</td>
                                            <td><span class=badge>{status_label}</span></td>
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
                </Show>
            </div>
        </div>
    }
}

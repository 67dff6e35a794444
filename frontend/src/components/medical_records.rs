use leptos::prelude::*;
use leptos::task::spawn_local;
use vetclinic_shared::MedicalRecord;
use vetclinic_shared::listing::filter_local;
use vetclinic_shared::protocol::MedicalRecordQuery;

use crate::auth::use_auth;
use crate::components::alert::{ErrorAlert, Spinner};

#[component]
pub fn MedicalRecordsPage() -> impl IntoView {
    let auth = use_auth();

    let (records, set_records) = signal(Vec::<MedicalRecord>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let procedure = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());

    let load = move || {
        let query = MedicalRecordQuery {
            procedure_type: Some(procedure.get_untracked()),
        };
        let client = auth.client();
        set_loading.set(true);
        spawn_local(async move {
            match client.fetch_medical_records(&query).await {
                Ok(list) => {
                    set_records.set(list);
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

    // 服务端按操作类型筛选，关键字在本地匹配
    let visible = move || records.with(|list| filter_local(list, &search.get()));

    view! {
        <div class="max-w-7xl mx-auto card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title">"Medical records"</h2>

                <form class="flex flex-wrap gap-2" on:submit=on_filter>
                    <input
                        type="text"
                        placeholder="Procedure type"
                        class="input input-bordered input-sm"
                        on:input=move |ev| procedure.set(event_target_value(&ev))
                        prop:value=procedure
                    />
                    <button class="btn btn-sm">"Filter"</button>
                    <input
                        type="search"
                        placeholder="Search diagnosis, treatment..."
                        class="input input-bordered input-sm"
                        on:input=move |ev| search.set(event_target_value(&ev))
                        prop:value=search
                    />
                </form>

                <ErrorAlert message=error_msg />

                <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Date"</th>
                                <th>"Procedure"</th>
                                <th>"Animal"</th>
                                <th class="hidden md:table-cell">"Diagnosis"</th>
                                <th class="hidden md:table-cell">"Treatment"</th>
                                <th class="hidden md:table-cell">"Veterinarian"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=visible
                                key=|r| r.id
                                children=|r: MedicalRecord| {
                                    let animal = r.info.animal_label();
                                    let vet = r.info.veterinarian_label().to_string();
                                    view! {
                                        <tr>
                                            <td>{r.info.date}</td>
                                            <td>{r.info.procedure_type}</td>
                                            <td>{animal}</td>
                                            <td class="hidden md:table-cell">{r.info.diagnosis.unwrap_or_default()}</td>
                                            <td class="hidden md:table-cell">{r.info.treatment.unwrap_or_default()}</td>
                                            <td class="hidden md:table-cell">{vet}</td>
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

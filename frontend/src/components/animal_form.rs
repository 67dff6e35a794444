use leptos::prelude::*;
use leptos::task::spawn_local;
use vetclinic_shared::AnimalStatus;

use crate::auth::use_auth;
use crate::components::alert::ErrorAlert;
use crate::components::form_state::AnimalFormState;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

fn text_input(label: &'static str, kind: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label class="form-control w-full">
            <div class="label"><span class="label-text">{label}</span></div>
            <input
                type=kind
                class="input input-bordered w-full"
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=value
            />
        </label>
    }
}

#[component]
pub fn AddAnimalPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let form = AnimalFormState::new();

    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let info = form.to_info();
        let missing = info.missing_fields();
        if !missing.is_empty() {
            set_error_msg.set(Some(format!("Required: {}", missing.join(", "))));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);
        let client = auth.client();
        spawn_local(async move {
            match client.create_animal(&info).await {
                Ok(_) => {
                    form.reset();
                    router.navigate(AppRoute::Animals.to_path());
                }
                Err(e) => set_error_msg.set(Some(e.user_message())),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-3xl mx-auto card bg-base-100 shadow-xl">
            <form class="card-body" on:submit=on_submit>
                <h2 class="card-title">"Add animal"</h2>
                <ErrorAlert message=error_msg />

                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    {text_input("Name *", "text", form.name)}
                    {text_input("Type *", "text", form.kind)}
                    {text_input("Breed", "text", form.breed)}
                    {text_input("Age", "number", form.age)}
                    {text_input("Weight (kg)", "number", form.weight)}
                    {text_input("Microchip number", "text", form.microchip_number)}
                    {text_input("Birth date", "date", form.birth_date)}
                    {text_input("Admission date", "date", form.admission_date)}
                    {text_input("Owner name", "text", form.owner_name)}
                    {text_input("Owner contact", "text", form.owner_contact)}

                    <label class="form-control w-full">
                        <div class="label"><span class="label-text">"Status"</span></div>
                        <select
                            class="select select-bordered"
                            on:change=move |ev| {
                                if let Some(status) = AnimalStatus::from_label(&event_target_value(&ev)) {
                                    form.status.set(status);
                                }
                            }
                        >
                            {AnimalStatus::ALL.into_iter().map(|s| {
                                let label = s.label().to_string();
                                view! {
                                    <option value=label.clone() selected=move || form.status.get() == s>{label.clone()}</option>
                                }
                            }).collect_view()}
                        </select>
                    </label>
                </div>

                <div class="card-actions justify-end mt-4">
                    <button
                        type="button"
                        class="btn btn-ghost"
                        on:click=move |_| router.navigate(AppRoute::Animals.to_path())
                    >
                        "Cancel"
                    </button>
                    <button class="btn btn-primary" disabled=move || is_submitting.get()>"Save"</button>
                </div>
            </form>
        </div>
    }
}

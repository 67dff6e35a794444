use leptos::prelude::*;
use leptos::task::spawn_local;
use vetclinic_shared::protocol::RegisterRequest;

use crate::auth::use_auth;
use crate::components::alert::ErrorAlert;
use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let is_loading = auth.is_loading();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if password.get() != confirm.get() {
            set_error_msg.set(Some("Passwords do not match".to_string()));
            return;
        }
        let request = RegisterRequest {
            username: username.get().trim().to_string(),
            email: email.get().trim().to_string(),
            password: password.get(),
            full_name: full_name.get().trim().to_string(),
        };

        set_error_msg.set(None);
        spawn_local(async move {
            if let Err(e) = auth.register(request).await {
                set_error_msg.set(Some(e.user_message()));
            }
        });
    };

    let field = move |id: &'static str, label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form-control">
                <label class="label" for=id>
                    <span class="label-text">{label}</span>
                </label>
                <input
                    id=id
                    type=kind
                    on:input=move |ev| value.set(event_target_value(&ev))
                    prop:value=value
                    class="input input-bordered"
                    required
                />
            </div>
        }
    };

    view! {
        <div class="hero min-h-screen">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"Create account"</h1>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <ErrorAlert message=error_msg />
                        {field("username", "Username", "text", username)}
                        {field("full-name", "Full name", "text", full_name)}
                        {field("email", "Email", "email", email)}
                        {field("password", "Password", "password", password)}
                        {field("confirm", "Confirm password", "password", confirm)}
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_loading.get()>
                                "Register"
                            </button>
                        </div>
                        <p class="text-sm text-center">
                            "Already registered? " <Link to=AppRoute::Login class="link link-primary">"Sign in"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}

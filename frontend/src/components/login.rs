use leptos::prelude::*;
use leptos::task::spawn_local;
use vetclinic_shared::protocol::LoginRequest;

use crate::auth::use_auth;
use crate::components::alert::ErrorAlert;
use crate::web::route::AppRoute;
use crate::web::router::Link;

/// 登录页
///
/// 成功后不手动跳转，路由服务监听到用户变化会离开登录页。
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let is_loading = auth.is_loading();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = LoginRequest {
            username: username.get().trim().to_string(),
            password: password.get(),
        };
        if credentials.username.is_empty() || credentials.password.is_empty() {
            set_error_msg.set(Some("Please enter username and password".to_string()));
            return;
        }

        set_error_msg.set(None);
        spawn_local(async move {
            if let Err(e) = auth.login(credentials).await {
                set_error_msg.set(Some(e.user_message()));
            }
        });
    };

    view! {
        <div class="hero min-h-screen">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"Sign in"</h1>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <ErrorAlert message=error_msg />

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Username"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_loading.get()>
                                {move || if is_loading.get() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Sign in".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-sm text-center">
                            "No account? " <Link to=AppRoute::Register class="link link-primary">"Register"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}

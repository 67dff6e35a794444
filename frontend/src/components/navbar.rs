use leptos::prelude::*;

use crate::auth::use_auth;
use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let user = auth.user();
    let signed_in = auth.is_authenticated();
    let is_admin = move || user.with(|u| u.as_ref().is_some_and(|u| u.role.is_admin()));

    let on_logout = move |_| auth.logout();

    view! {
        <Show when=move || signed_in.get() && user.with(Option::is_some)>
            <div class="navbar bg-base-100 shadow-md px-4">
                <div class="flex-1 gap-2">
                    <Link to=AppRoute::Home class="btn btn-ghost text-xl">"VetClinic"</Link>
                    <Link to=AppRoute::Animals class="btn btn-ghost btn-sm">"Animals"</Link>
                    <Link to=AppRoute::Appointments class="btn btn-ghost btn-sm">"Appointments"</Link>
                    <Link to=AppRoute::MedicalRecords class="btn btn-ghost btn-sm">"Medical Records"</Link>
                    <Show when=is_admin>
                        <Link to=AppRoute::Staff class="btn btn-ghost btn-sm">"Staff"</Link>
                        <Link to=AppRoute::Reports class="btn btn-ghost btn-sm">"Reports"</Link>
                    </Show>
                </div>
                <div class="flex-none gap-2">
                    <Link to=AppRoute::Profile class="btn btn-ghost btn-sm">
                        {move || user.with(|u| u.as_ref().map(|u| u.display_name().to_string()).unwrap_or_default())}
                    </Link>
                    <button on:click=on_logout class="btn btn-outline btn-error btn-sm">"Logout"</button>
                </div>
            </div>
        </Show>
    }
}

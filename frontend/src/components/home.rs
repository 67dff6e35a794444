use leptos::prelude::*;
use leptos::task::spawn_local;
use vetclinic::Dashboard;

use crate::auth::use_auth;
use crate::components::alert::{ErrorAlert, Spinner};
use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let user = auth.user();

    let (dashboard, set_dashboard) = signal(Option::<Dashboard>::None);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    // 初始加载
    let client = auth.client();
    spawn_local(async move {
        match client.load_dashboard().await {
            Ok(data) => set_dashboard.set(Some(data)),
            Err(e) => set_error_msg.set(Some(e.user_message())),
        }
    });

    let stat = |title: &'static str, value: usize| {
        view! {
            <div class="stat">
                <div class="stat-title">{title}</div>
                <div class="stat-value text-primary">{value}</div>
            </div>
        }
    };

    view! {
        <div class="max-w-7xl mx-auto space-y-8">
            <h1 class="text-2xl font-bold">
                "Welcome, " {move || user.with(|u| u.as_ref().map(|u| u.display_name().to_string()).unwrap_or_default())}
            </h1>
            <ErrorAlert message=error_msg />

            {move || match dashboard.get() {
                None if error_msg.with(Option::is_none) => view! { <Spinner /> }.into_any(),
                None => ().into_any(),
                Some(data) => {
                    let s = data.stats;
                    view! {
                        <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                            {stat("Animals", s.animals)}
                            {stat("Scheduled", s.scheduled_appointments)}
                            {stat("Emergencies", s.emergency_cases)}
                            {stat("Medical Records", s.medical_records)}
                            {stat("Active Staff", s.active_staff)}
                        </div>

                        <div class="card bg-base-100 shadow-xl">
                            <div class="card-body">
                                <div class="flex items-center justify-between">
                                    <h3 class="card-title">"Upcoming appointments"</h3>
                                    <Link to=AppRoute::Appointments class="btn btn-ghost btn-sm">"View all"</Link>
                                </div>
                                <table class="table table-zebra w-full">
                                    <thead>
                                        <tr><th>"When"</th><th>"Type"</th><th>"Animal"</th></tr>
                                    </thead>
                                    <tbody>
                                        {data.upcoming.into_iter().map(|a| {
                                            let animal = a.info.animal_label();
                                            view! {
                                                <tr>
                                                    <td>{a.info.date_time}</td>
                                                    <td>{a.info.kind}</td>
                                                    <td>{animal}</td>
                                                </tr>
                                            }
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}

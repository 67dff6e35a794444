use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos::task::spawn_local;
use vetclinic_shared::report::{ClinicReport, MONTH_LABELS};

use crate::auth::use_auth;
use crate::components::alert::{ErrorAlert, Spinner};

fn breakdown(title: &'static str, counts: BTreeMap<String, usize>) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title text-base">{title}</h3>
                <table class="table table-sm">
                    <tbody>
                        {counts.into_iter().map(|(key, count)| view! {
                            <tr><td>{key}</td><td class="text-right">{count}</td></tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let auth = use_auth();

    let (report, set_report) = signal(Option::<ClinicReport>::None);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let client = auth.client();
    spawn_local(async move {
        match client.load_report().await {
            Ok(data) => set_report.set(Some(data)),
            Err(e) => set_error_msg.set(Some(e.user_message())),
        }
    });

    view! {
        <div class="max-w-7xl mx-auto space-y-6">
            <h2 class="text-2xl font-bold">"Reports"</h2>
            <ErrorAlert message=error_msg />

            {move || match report.get() {
                None if error_msg.with(Option::is_none) => view! { <Spinner /> }.into_any(),
                None => ().into_any(),
                Some(r) => view! {
                    <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                        <div class="stat"><div class="stat-title">"Animals"</div><div class="stat-value">{r.animal_count}</div></div>
                        <div class="stat"><div class="stat-title">"Appointments"</div><div class="stat-value">{r.appointment_count}</div></div>
                        <div class="stat"><div class="stat-title">"Procedures"</div><div class="stat-value">{r.procedure_count}</div></div>
                        <div class="stat"><div class="stat-title">"Staff"</div><div class="stat-value">{r.staff_count}</div></div>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        {breakdown("Animals by type", r.animals_by_type)}
                        {breakdown("Procedures by type", r.procedures_by_type)}
                        {breakdown("Staff by role", r.staff_by_role)}
                    </div>

                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h3 class="card-title text-base">"Appointments per month"</h3>
                            <table class="table table-sm">
                                <thead>
                                    <tr>{MONTH_LABELS.iter().map(|m| view! { <th>{*m}</th> }).collect_view()}</tr>
                                </thead>
                                <tbody>
                                    <tr>{r.appointments_by_month.iter().map(|c| view! { <td>{*c}</td> }).collect_view()}</tr>
                                </tbody>
                            </table>
                        </div>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

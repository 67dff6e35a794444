use leptos::prelude::*;
use leptos::task::spawn_local;
use vetclinic::MultipartFile;
use vetclinic_shared::protocol::{PROFILE_PICTURE_FIELD, Profile, ProfileUpdate};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::auth::use_auth;
use crate::components::alert::{ErrorAlert, Spinner};

/// 读取 `<input type=file>` 中选中的第一个文件
async fn read_selected_file(input: web_sys::HtmlInputElement) -> Option<MultipartFile> {
    let file = input.files()?.get(0)?;
    let buffer = JsFuture::from(file.array_buffer()).await.ok()?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Some(MultipartFile {
        field: PROFILE_PICTURE_FIELD.to_string(),
        file_name: file.name(),
        content_type: file.type_(),
        bytes,
    })
}

type Getter = fn(&ProfileUpdate) -> &String;
type Setter = fn(&mut ProfileUpdate, String);

fn text_field(
    form: RwSignal<ProfileUpdate>,
    label: &'static str,
    kind: &'static str,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    view! {
        <label class="form-control w-full">
            <div class="label"><span class="label-text">{label}</span></div>
            <input
                type=kind
                class="input input-bordered w-full"
                prop:value=move || form.with(|f| get(f).clone())
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        </label>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();

    let (profile, set_profile) = signal(Option::<Profile>::None);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (notice, set_notice) = signal(Option::<String>::None);
    let form = RwSignal::new(ProfileUpdate::default());

    let client = auth.client();
    spawn_local(async move {
        match client.fetch_profile().await {
            Ok(p) => {
                form.set(ProfileUpdate::from(&p));
                set_profile.set(Some(p));
            }
            Err(e) => set_error_msg.set(Some(e.user_message())),
        }
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let update = form.get();
        let client = auth.client();
        set_error_msg.set(None);
        spawn_local(async move {
            match client.update_profile(&update).await {
                Ok(p) => {
                    set_profile.set(Some(p));
                    set_notice.set(Some("Profile updated".to_string()));
                }
                Err(e) => set_error_msg.set(Some(e.user_message())),
            }
        });
    };

    let on_picture = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let client = auth.client();
        spawn_local(async move {
            let Some(file) = read_selected_file(input).await else {
                set_error_msg.set(Some("Could not read the selected file".to_string()));
                return;
            };
            match client.upload_profile_picture(file).await {
                Ok(path) => set_profile.update(|p| {
                    if let Some(p) = p {
                        p.profile_picture = Some(path);
                    }
                }),
                Err(e) => set_error_msg.set(Some(e.user_message())),
            }
        });
    };

    view! {
        <div class="max-w-3xl mx-auto card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title">"Profile"</h2>
                <ErrorAlert message=error_msg />
                <Show when=move || notice.with(Option::is_some)>
                    <div role="status" class="alert alert-success text-sm py-2">
                        <span>{move || notice.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <Show when=move || profile.with(Option::is_some) fallback=|| view! { <Spinner /> }>
                    <div class="flex items-center gap-4">
                        <div class="avatar placeholder">
                            <div class="w-20 rounded-full bg-neutral text-neutral-content">
                                {move || profile.with(|p| match p.as_ref().and_then(|p| p.profile_picture.clone()) {
                                    Some(src) => view! { <img src=src alt="Profile picture" /> }.into_any(),
                                    None => view! { <span class="text-2xl">"?"</span> }.into_any(),
                                })}
                            </div>
                        </div>
                        <div>
                            <p class="font-semibold">{move || profile.with(|p| p.as_ref().map(|p| p.username.clone()).unwrap_or_default())}</p>
                            <p class="text-sm opacity-70">{move || profile.with(|p| p.as_ref().map(|p| p.role.to_string()).unwrap_or_default())}</p>
                            <input type="file" accept="image/*" class="file-input file-input-bordered file-input-sm mt-2" on:change=on_picture />
                        </div>
                    </div>

                    <form class="grid grid-cols-1 md:grid-cols-2 gap-4" on:submit=on_save>
                        {text_field(form, "Full name", "text", |f| &f.full_name, |f, v| f.full_name = v)}
                        {text_field(form, "Username", "text", |f| &f.username, |f, v| f.username = v)}
                        {text_field(form, "Email", "email", |f| &f.email, |f, v| f.email = v)}
                        {text_field(form, "Phone number", "tel", |f| &f.phone_number, |f, v| f.phone_number = v)}
                        {text_field(form, "Address", "text", |f| &f.address, |f, v| f.address = v)}
                        <div class="md:col-span-2 flex justify-end">
                            <button class="btn btn-primary">"Save"</button>
                        </div>
                    </form>
                </Show>
            </div>
        </div>
    }
}

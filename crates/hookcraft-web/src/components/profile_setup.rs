//! First-visit profile form

use hookcraft_core::actor::AccountActor;
use hookcraft_core::models::UserProfile;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::use_toast;

/// Asks a signed-in caller without a profile for their name and email
#[component]
pub fn ProfileSetup(#[prop(into)] on_saved: Callback<()>) -> impl IntoView {
    let toast = use_toast();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let profile = UserProfile {
            name: name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
        };
        if profile.name.is_empty() {
            toast.error("Please enter your name");
            return;
        }

        saving.set(true);
        spawn_local(async move {
            match api::client().save_caller_user_profile(&profile).await {
                Ok(()) => {
                    toast.success("Profile saved");
                    on_saved.run(());
                }
                Err(e) => toast.error(format!("Failed to save profile: {}", e)),
            }
            saving.set(false);
        });
    };

    view! {
        <form class="card profile-setup" on:submit=submit>
            <h3 class="card-title">"Welcome! Tell us about yourself"</h3>
            <label class="field">
                <span>"Name"</span>
                <input
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span>"Email"</span>
                <input
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn-primary" type="submit" disabled=move || saving.get()>
                {move || if saving.get() { "Saving..." } else { "Save Profile" }}
            </button>
        </form>
    }
}

//! Account settings: balance deposit and avatar upload.
//!
//! Both actions are awaited and, on success, refresh the session user so
//! the navigation bar and profile reflect the change.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;

use crate::app::AppContext;

fn validate_deposit_input(raw: &str) -> Result<u64, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Enter an amount to deposit.");
    }
    match raw.parse::<u64>() {
        Ok(0) | Err(_) => Err("Deposit must be a positive whole number."),
        Ok(amount) => Ok(amount),
    }
}

#[cfg(any(test, feature = "csr"))]
fn avatar_result_message(updated: bool) -> &'static str {
    if updated { "Avatar updated." } else { "The server did not accept the avatar." }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let amount = RwSignal::new(String::new());
    let deposit_info = RwSignal::new(String::new());
    let avatar_info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let avatar_input = NodeRef::<leptos::html::Input>::new();

    let deposit_ctx = ctx.clone();
    let on_deposit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let value = match validate_deposit_input(&amount.get()) {
            Ok(value) => value,
            Err(msg) => {
                deposit_info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        deposit_info.set("Depositing...".to_owned());

        #[cfg(feature = "csr")]
        {
            let ctx = deposit_ctx.clone();
            leptos::task::spawn_local(async move {
                match ctx.api.add_deposit(value).await {
                    Ok(profile) => {
                        ctx.set_user(profile.into());
                        amount.set(String::new());
                        deposit_info.set(format!("Deposited {value}."));
                    }
                    Err(e) => {
                        log::warn!("deposit failed: {e}");
                        deposit_info.set(format!("Deposit failed: {e}"));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&deposit_ctx, value);
        }
    };

    let on_avatar = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        avatar_info.set("Uploading...".to_owned());

        #[cfg(feature = "csr")]
        {
            let ctx = ctx.clone();
            let input = avatar_input.get_untracked();
            leptos::task::spawn_local(async move {
                let selected = match input {
                    Some(input) => crate::util::file::read_selected_file(&input).await,
                    None => Ok(None),
                };
                let outcome = match selected {
                    Ok(file) => ctx.api.update_profile_avatar(file).await,
                    Err(e) => Err(crate::net::error::ApiError::Request(e)),
                };
                match outcome {
                    Ok(updated) => {
                        avatar_info.set(avatar_result_message(updated).to_owned());
                        if updated {
                            match ctx.api.get_user().await {
                                Ok(profile) => ctx.set_user(profile.into()),
                                Err(e) => log::warn!("profile refresh after avatar upload failed: {e}"),
                            }
                        }
                    }
                    Err(e) => {
                        log::warn!("avatar upload failed: {e}");
                        avatar_info.set(format!("Upload failed: {e}"));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&ctx, avatar_input);
        }
    };

    view! {
        <section class="settings">
            <h1>"Settings"</h1>

            <form class="settings__form" on:submit=on_deposit>
                <h2>"Deposit funds"</h2>
                <input
                    class="form-input"
                    type="number"
                    min="1"
                    step="1"
                    placeholder="Amount"
                    prop:value=move || amount.get()
                    on:input=move |ev| amount.set(event_target_value(&ev))
                />
                <button class="form-button" type="submit" disabled=move || busy.get()>
                    "Deposit"
                </button>
                <Show when=move || !deposit_info.get().is_empty()>
                    <p class="form-message">{move || deposit_info.get()}</p>
                </Show>
            </form>

            <form class="settings__form" on:submit=on_avatar>
                <h2>"Profile picture"</h2>
                <input class="form-input" type="file" accept="image/*" node_ref=avatar_input/>
                <button class="form-button" type="submit" disabled=move || busy.get()>
                    "Upload"
                </button>
                <Show when=move || !avatar_info.get().is_empty()>
                    <p class="form-message">{move || avatar_info.get()}</p>
                </Show>
            </form>
        </section>
    }
}

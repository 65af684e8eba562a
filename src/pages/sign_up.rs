//! Registration page: creates the account, then signs in with it.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::AppContext;
use crate::net::types::SignUpData;
use crate::routes::Page;

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct SignUpForm {
    avatar: String,
    first_name: String,
    last_name: String,
    username: String,
    email: String,
    password: String,
}

fn validate_sign_up_input(form: &SignUpForm) -> Result<SignUpData, &'static str> {
    let first_name = form.first_name.trim();
    let last_name = form.last_name.trim();
    let username = form.username.trim();
    let email = form.email.trim();
    if first_name.is_empty() || last_name.is_empty() || username.is_empty() || email.is_empty() {
        return Err("Fill in name, username and email.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    let avatar = Some(form.avatar.trim()).filter(|a| !a.is_empty()).map(str::to_owned);
    Ok(SignUpData {
        avatar,
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        username: username.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
    })
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let form = RwSignal::new(SignUpForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let data = match validate_sign_up_input(&form.get()) {
            Ok(data) => data,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "csr")]
        {
            let ctx = ctx.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::state::session::register(&*ctx.api, &data).await {
                    Ok(profile) => {
                        ctx.set_user(profile.into());
                        info.set(String::new());
                        navigate(&Page::Home.path(), leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("sign-up failed: {e}");
                        info.set(format!("Sign-up failed: {e}"));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&ctx, data);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="form-input"
                        type="text"
                        placeholder="First name"
                        prop:value=move || form.with(|f| f.first_name.clone())
                        on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                    />
                    <input
                        class="form-input"
                        type="text"
                        placeholder="Last name"
                        prop:value=move || form.with(|f| f.last_name.clone())
                        on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                    />
                    <input
                        class="form-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || form.with(|f| f.username.clone())
                        on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                    />
                    <input
                        class="form-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="form-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <input
                        class="form-input"
                        type="url"
                        placeholder="Avatar URL (optional)"
                        prop:value=move || form.with(|f| f.avatar.clone())
                        on:input=move |ev| form.update(|f| f.avatar = event_target_value(&ev))
                    />
                    <button class="form-button" type="submit" disabled=move || busy.get()>
                        "Sign up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="form-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__switch">
                    "Already registered? "
                    <A href=Page::SignIn.path()>"Sign in"</A>
                </p>
            </div>
        </div>
    }
}

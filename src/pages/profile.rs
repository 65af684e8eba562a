//! Read-only view of the signed-in user's profile.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::net::types::User;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<AppContext>().session();

    move || match session.get().user {
        User::Ready(profile) => view! {
            <section class="profile">
                <img class="profile__avatar" src=profile.avatar.clone() alt="Avatar"/>
                <h1>{profile.display_name()}</h1>
                <dl class="profile__fields">
                    <dt>"Username"</dt>
                    <dd>{profile.username.clone()}</dd>
                    <dt>"Email"</dt>
                    <dd>{profile.email.clone()}</dd>
                </dl>
            </section>
        }
        .into_any(),
        User::NotOk { error, .. } => view! {
            <p class="profile__error">{error.unwrap_or_else(|| "Loading profile...".to_owned())}</p>
        }
        .into_any(),
    }
}

//! Login page: resolve an email or display name to a user record.
//!
//! There is no password. A successful lookup is persisted under
//! `currentUser` and the browser moves to `/chat`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::session;

/// Accounts created by the server's demo seed, shown as shortcuts.
pub const DEMO_ACCOUNTS: [(&str, &str); 3] = [
    ("admin@mail.com", "Admin"),
    ("agent@mail.com", "Agent"),
    ("customer@mail.com", "Customer"),
];

#[cfg(any(test, feature = "hydrate"))]
const GENERIC_LOGIN_ERROR: &str = "Login failed. Please try again.";

fn validate_identifier(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Enter your email or name.");
    }
    Ok(trimmed.to_owned())
}

#[cfg(any(test, feature = "hydrate"))]
/// Text shown for a failed login. Server errors are short sentences; anything
/// that looks like a transport error gets the generic message.
fn login_error_text(err: &str) -> String {
    if err == "User not found" || err.starts_with("login failed") {
        err.to_owned()
    } else {
        GENERIC_LOGIN_ERROR.to_owned()
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let identifier = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already logged in: skip straight to the chat view.
    let navigate_chat = navigate.clone();
    Effect::new(move || {
        if let Some(user) = session::load_current_user() {
            auth.set(AuthState::restored(Some(user)));
            navigate_chat("/chat", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let value = match validate_identifier(&identifier.get()) {
            Ok(value) => value,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&value).await {
                    Ok(user) => {
                        session::save_current_user(&user);
                        auth.set(AuthState::restored(Some(user)));
                        navigate("/chat", NavigateOptions::default());
                    }
                    Err(e) => info.set(login_error_text(&e)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (value, &navigate);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Room Chat"</h1>
                <p class="login-card__subtitle">"Sign in with your email or name"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="you@mail.com"
                        prop:value=move || identifier.get()
                        on:input=move |ev| identifier.set(event_target_value(&ev))
                    />
                    <button
                        class="login-button"
                        type="submit"
                        disabled=move || busy.get() || identifier.with(|v| v.trim().is_empty())
                    >
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">"Demo accounts"</p>
                <ul class="login-demo">
                    {DEMO_ACCOUNTS
                        .iter()
                        .map(|(email, label)| {
                            let email = *email;
                            view! {
                                <li>
                                    <button
                                        class="login-demo__account"
                                        type="button"
                                        on:click=move |_| identifier.set(email.to_owned())
                                    >
                                        <span class="login-demo__label">{*label}</span>
                                        <span class="login-demo__email">{email}</span>
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::ToastContainer;
use crate::context::use_session;
use crate::hooks::{use_cancel_token, use_toasts, ToastSeverity};
use crate::router::Route;
use crate::services::ApiClient;
use crate::utils::validation::validate_credentials;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("LoginPage rendered outside a router");
    let toasts = use_toasts();
    let cancel = use_cancel_token();

    let submitting = use_state(|| false);
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    let on_submit = {
        let session = session.clone();
        let navigator = navigator.clone();
        let toasts = toasts.clone();
        let cancel = cancel.clone();
        let submitting = submitting.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // Single-flight: el botón ya está deshabilitado, esto es el cinturón
            if *submitting {
                return;
            }

            let (email, password) = match (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                (Some(email), Some(password)) => (email.value(), password.value()),
                _ => return,
            };

            if let Err(msg) = validate_credentials(&email, &password) {
                toasts.notify(msg, ToastSeverity::Error);
                return;
            }

            submitting.set(true);

            let session = session.clone();
            let navigator = navigator.clone();
            let toasts = toasts.clone();
            let cancel = cancel.clone();
            let submitting = submitting.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().login(&email, &password).await {
                    Ok(response) => {
                        if cancel.is_cancelled() {
                            return;
                        }
                        log::info!("✅ Login exitoso: {}", email);
                        submitting.set(false);
                        session.login(&response.access_token);
                        toasts.notify("Login successful!", ToastSeverity::Success);
                        navigator.push(&Route::Dashboard);
                    }
                    Err(e) => {
                        if cancel.is_cancelled() {
                            return;
                        }
                        log::error!("❌ Login fallido: {}", e);
                        submitting.set(false);
                        toasts.notify(e.to_string(), ToastSeverity::Error);
                    }
                }
            });
        })
    };

    html! {
        <div class="page page-auth">
            <div class="card auth-card">
                <div class="card-header">
                    <h1>{ "Login" }</h1>
                    <p class="card-description">{ "Sign in to your EmmiDev account" }</p>
                </div>

                <form class="auth-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{ "Email" }</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="your@email.com"
                            ref={email_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{ "Password" }</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="••••••••"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    <button type="submit" class="btn btn-primary" disabled={*submitting}>
                        { if *submitting { "Logging in..." } else { "Login" } }
                    </button>
                </form>

                <div class="card-footer">
                    <p>
                        { "Don't have an account? " }
                        <Link<Route> to={Route::Register} classes="link">{ "Register" }</Link<Route>>
                    </p>
                </div>
            </div>

            <ToastContainer toasts={toasts.list()} on_dismiss={toasts.dismiss_callback()} />
        </div>
    }
}

use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::ToastContainer;
use crate::hooks::{use_cancel_token, use_toasts, ToastSeverity};
use crate::router::Route;
use crate::services::ApiClient;
use crate::utils::validation::validate_registration;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let navigator = use_navigator().expect("RegisterPage rendered outside a router");
    let toasts = use_toasts();
    let cancel = use_cancel_token();

    let submitting = use_state(|| false);
    let full_name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    let on_submit = {
        let navigator = navigator.clone();
        let toasts = toasts.clone();
        let cancel = cancel.clone();
        let submitting = submitting.clone();
        let full_name_ref = full_name_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *submitting {
                return;
            }

            let (full_name, email, password) = match (
                full_name_ref.cast::<HtmlInputElement>(),
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                (Some(full_name), Some(email), Some(password)) => {
                    (full_name.value(), email.value(), password.value())
                }
                _ => return,
            };

            if let Err(msg) = validate_registration(&email, &password) {
                toasts.notify(msg, ToastSeverity::Error);
                return;
            }

            // El nombre completo es opcional
            let full_name = {
                let trimmed = full_name.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            };

            submitting.set(true);

            let navigator = navigator.clone();
            let toasts = toasts.clone();
            let cancel = cancel.clone();
            let submitting = submitting.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().register(&email, &password, full_name).await {
                    Ok(user) => {
                        if cancel.is_cancelled() {
                            return;
                        }
                        log::info!("✅ Registro exitoso: {}", user.email);
                        submitting.set(false);
                        // El registro no inicia sesión: el usuario se loguea aparte
                        toasts.notify("Registration successful! Please login.", ToastSeverity::Success);
                        navigator.push(&Route::Login);
                    }
                    Err(e) => {
                        if cancel.is_cancelled() {
                            return;
                        }
                        log::error!("❌ Error en registro: {}", e);
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
                    <h1>{ "Create Account" }</h1>
                    <p class="card-description">{ "Sign up for a new EmmiDev account" }</p>
                </div>

                <form class="auth-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="full_name">{ "Full Name" }</label>
                        <input
                            type="text"
                            id="full_name"
                            name="full_name"
                            placeholder="John Doe"
                            ref={full_name_ref}
                        />
                    </div>

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
                            placeholder="Minimum 8 characters"
                            minlength="8"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    <button type="submit" class="btn btn-primary" disabled={*submitting}>
                        { if *submitting { "Creating account..." } else { "Register" } }
                    </button>
                </form>

                <div class="card-footer">
                    <p>
                        { "Already have an account? " }
                        <Link<Route> to={Route::Login} classes="link">{ "Login" }</Link<Route>>
                    </p>
                </div>
            </div>

            <ToastContainer toasts={toasts.list()} on_dismiss={toasts.dismiss_callback()} />
        </div>
    }
}

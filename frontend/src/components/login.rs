use gloo::timers::future::TimeoutFuture;
use shared::{LoginRequest, SchedulerConfig};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub config: SchedulerConfig,
    /// Returns the error message when the credentials are rejected
    pub on_login: Callback<LoginRequest, Result<(), String>>,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let show_password = use_state(|| false);
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| Option::<String>::None);

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        let on_login = props.on_login.clone();
        let delay_ms = props.config.login_delay_ms;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }

            is_submitting.set(true);
            error_message.set(None);

            let request = LoginRequest {
                email: email.trim().to_string(),
                password: (*password).clone(),
            };
            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();
            let on_login = on_login.clone();

            spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;

                if let Err(message) = on_login.emit(request) {
                    error_message.set(Some(message));
                }
                is_submitting.set(false);
            });
        })
    };

    html! {
        <div class="login-page">
            <form class="login-card" onsubmit={on_submit}>
                <h2 class="login-title">{"Clinic Staff Login"}</h2>

                if let Some(error) = (*error_message).clone() {
                    <div class="login-error">{error}</div>
                }

                <div class="form-group">
                    <label for="login-email">{"Email"}</label>
                    <input
                        id="login-email"
                        type="email"
                        placeholder="Enter your email"
                        value={(*email).clone()}
                        oninput={on_email_change}
                        disabled={*is_submitting}
                        autofocus=true
                    />
                </div>

                <div class="form-group">
                    <label for="login-password">{"Password"}</label>
                    <div class="password-field">
                        <input
                            id="login-password"
                            type={if *show_password { "text" } else { "password" }}
                            placeholder="Enter your password"
                            value={(*password).clone()}
                            oninput={on_password_change}
                            disabled={*is_submitting}
                        />
                        <button type="button" class="password-toggle" onclick={on_toggle_password}>
                            {if *show_password { "Hide" } else { "Show" }}
                        </button>
                    </div>
                </div>

                <button type="submit" class="btn btn-primary btn-block" disabled={*is_submitting}>
                    {if *is_submitting { "Signing in..." } else { "Login" }}
                </button>

                <p class="login-hint">
                    {format!("Demo: {} / {}", props.config.staff_email, props.config.staff_password)}
                </p>
            </form>
        </div>
    }
}

use backend::AppContext;
use shared::{LoginRequest, Route, SchedulerConfig, ThemePreference};
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::calendar_page::CalendarPage;
use components::login::LoginPage;
use services::browser_storage::BrowserStore;
use services::date_utils::prefers_dark;
use services::logging::Logger;

/// Mirror the theme onto `<html data-theme="...">` so the stylesheet can switch palettes
fn apply_theme(theme: ThemePreference) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());

    if let Some(root) = root {
        if root.set_attribute("data-theme", theme.as_str()).is_err() {
            Logger::warn_with_component("app", "Could not apply theme to the document");
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let store = BrowserStore::new();
    let context = use_state(move || AppContext::init(&store, prefers_dark(), SchedulerConfig::default()));

    use_effect_with(context.theme, |theme| {
        apply_theme(*theme);
        || ()
    });

    let on_login = {
        let context = context.clone();
        Callback::from(move |request: LoginRequest| -> Result<(), String> {
            let mut next = (*context).clone();
            next.login(&store, &request).map_err(|e| e.to_string())?;
            context.set(next);
            Ok(())
        })
    };

    let on_logout = {
        let context = context.clone();
        Callback::from(move |_| {
            let mut next = (*context).clone();
            match next.logout(&store) {
                Ok(()) => context.set(next),
                Err(e) => Logger::error_with_component("app", &format!("Logout failed: {}", e)),
            }
        })
    };

    let on_toggle_theme = {
        let context = context.clone();
        Callback::from(move |_| {
            let mut next = (*context).clone();
            match next.toggle_theme(&store) {
                Ok(_) => context.set(next),
                Err(e) => Logger::error_with_component("app", &format!("Theme change failed: {}", e)),
            }
        })
    };

    let page = match context.route_for(Route::Calendar) {
        Route::Calendar => html! {
            <CalendarPage
                config={context.config.clone()}
                theme={context.theme}
                {on_toggle_theme}
                {on_logout}
            />
        },
        Route::Login => html! {
            <LoginPage config={context.config.clone()} {on_login} />
        },
    };

    html! {
        <div class={classes!("app", context.theme.as_str())}>
            {page}
        </div>
    }
}

fn main() {
    services::logging::init();
    Logger::info_with_component("app", "Starting clinic calendar");
    yew::Renderer::<App>::new().render();
}

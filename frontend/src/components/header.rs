use shared::ThemePreference;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub theme: ThemePreference,
    pub on_toggle_theme: Callback<()>,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_toggle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <header class="header">
            <div class="container">
                <h1>{"Doctor Appointment Calendar"}</h1>
                <div class="header-right">
                    <button class="theme-toggle" onclick={on_toggle_theme}
                            title={format!("Switch to {} mode", props.theme.toggled())}>
                        {match props.theme {
                            ThemePreference::Light => "🌙",
                            ThemePreference::Dark => "☀️",
                        }}
                    </button>
                    <button class="btn btn-logout" onclick={on_logout}>{"Logout"}</button>
                </div>
            </div>
        </header>
    }
}

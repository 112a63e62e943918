use yew::prelude::*;

use super::theme::{ThemeContext, ThemeMode};

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let theme = use_context::<ThemeContext>().expect("Navbar must be rendered inside ThemeProvider");

    let on_toggle = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    html! {
        <nav class="navbar">
            <div class="navbar-tabs">
                <span class="navbar-tab active">{"Flights"}</span>
                <span class="navbar-tab">{"Hotels"}</span>
                <span class="navbar-tab">{"Car Rentals"}</span>
            </div>
            <button class="theme-toggle" onclick={on_toggle} title="Toggle theme">
                {match theme.mode {
                    ThemeMode::Light => "🌙",
                    ThemeMode::Dark => "☀️",
                }}
            </button>
        </nav>
    }
}

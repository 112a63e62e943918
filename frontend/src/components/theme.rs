use yew::prelude::*;

/// Light/dark flag carried through an explicit context instead of a global,
/// so the tables stay independently testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn flipped(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "theme-dark",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub mode: ThemeMode,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let mode = use_state(|| ThemeMode::Light);

    let toggle = {
        let mode = mode.clone();
        Callback::from(move |_| mode.set(mode.flipped()))
    };

    let context = ThemeContext {
        mode: *mode,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            <div class={classes!("app", mode.class())}>
                {props.children.clone()}
            </div>
        </ContextProvider<ThemeContext>>
    }
}

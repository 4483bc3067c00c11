use crate::app_shell::AppShell;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // ConfigProvider supplies the thaw theme to every component below it.
    view! {
        <ConfigProvider>
            <AppShell />
        </ConfigProvider>
    }
}

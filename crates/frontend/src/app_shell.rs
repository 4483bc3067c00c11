//! Application Shell - фон страницы и единственный виджет

use crate::usecases::u101_lung_scan_analysis::ImageUpload;
use leptos::prelude::*;

/// Full-height gradient background centering the upload widget.
#[component]
pub fn AppShell() -> impl IntoView {
    view! {
        <div class="app-shell">
            <ImageUpload />
        </div>
    }
}

//! Error Alert Component
//!
//! Inline error notice with a fixed title and description.

use leptos::prelude::*;

#[component]
pub fn ErrorAlert(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
) -> impl IntoView {
    view! {
        <div class="alert alert-error" role="alert">
            <span class="alert-icon">"✕"</span>
            <div class="alert-content">
                <div class="alert-message">{title}</div>
                <div class="alert-description">{description}</div>
            </div>
        </div>
    }
}

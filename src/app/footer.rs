use leptos::prelude::*;

use crate::site::OWNER_NAME;

// RFC 3339 timestamp stamped by build.rs
const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Footer() -> impl IntoView {
    let year = BUILD_TIME.get(..4).unwrap_or_default();

    view! {
        <footer class="py-8 bg-background border-t border-surface-light">
            <div class="container mx-auto px-6 flex flex-col sm:flex-row items-center justify-between gap-2 text-sm text-muted-foreground">
                <span>{format!("© {year} {OWNER_NAME}. All rights reserved.")}</span>
                <span title=BUILD_TIME>"Built with Rust & Leptos"</span>
            </div>
        </footer>
    }
}

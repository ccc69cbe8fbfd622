use leptos::{ev, prelude::*};
use leptos_use::use_window_scroll;

use crate::site::{is_scrolled, Section, OWNER_INITIALS};

#[component]
pub fn Navbar() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let (menu_open, set_menu_open) = signal(false);

    let nav_class = move || {
        if is_scrolled(scroll_y.get()) {
            "fixed top-0 left-0 right-0 z-50 transition-smooth bg-background/95 backdrop-blur-md shadow-elegant"
        } else {
            "fixed top-0 left-0 right-0 z-50 transition-smooth bg-transparent"
        }
    };

    // anchors do the scrolling; picking one always closes the mobile menu
    let close_menu = move |_: ev::MouseEvent| set_menu_open.set(false);

    view! {
        <nav class=nav_class>
            <div class="container mx-auto px-6">
                <div class="flex items-center justify-between h-20">
                    <a
                        href=format!("#{}", Section::Hero.id())
                        on:click=close_menu
                        class="text-2xl font-bold text-gradient-primary hover:scale-105 transition-quick"
                    >
                        {OWNER_INITIALS}
                    </a>

                    <div class="hidden md:flex items-center space-x-8">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <a
                                        href=format!("#{}", section.id())
                                        class="text-foreground hover:text-cyber-blue transition-quick font-medium relative group"
                                    >
                                        {section.nav_label()}
                                        <span class="absolute bottom-0 left-0 w-0 h-0.5 bg-gradient-primary group-hover:w-full transition-smooth duration-300" />
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a href=format!("#{}", Section::Contact.id()) class="btn-hero ml-4">
                            "Let's Talk"
                        </a>
                    </div>

                    <div class="md:hidden">
                        <button
                            class="text-foreground p-2"
                            aria-label="Toggle menu"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>

                <Show when=move || menu_open.get()>
                    <div class="md:hidden bg-card/95 backdrop-blur-md rounded-2xl border border-surface-light m-4 p-6 shadow-elegant">
                        <div class="flex flex-col space-y-4">
                            {Section::ALL
                                .into_iter()
                                .map(|section| {
                                    view! {
                                        <a
                                            href=format!("#{}", section.id())
                                            on:click=close_menu
                                            class="text-foreground hover:text-cyber-blue transition-quick font-medium text-left py-2"
                                        >
                                            {section.nav_label()}
                                        </a>
                                    }
                                })
                                .collect_view()}
                            <a
                                href=format!("#{}", Section::Contact.id())
                                on:click=close_menu
                                class="btn-hero mt-4 text-center"
                            >
                                "Let's Talk"
                            </a>
                        </div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}

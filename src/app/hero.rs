use std::time::Duration;

use leptos::prelude::*;

use crate::site::{Section, OWNER_NAME, OWNER_TITLE, RESUME};

const BACKGROUND_LOAD_DELAY: Duration = Duration::from_millis(1000);

#[component]
pub fn Hero() -> impl IntoView {
    let (background_loaded, set_background_loaded) = signal(false);

    // placeholder for a real video: pretend it finished buffering
    Effect::new(move |_| {
        if let Ok(handle) =
            set_timeout_with_handle(move || set_background_loaded.set(true), BACKGROUND_LOAD_DELAY)
        {
            on_cleanup(move || handle.clear());
        }
    });

    let (first, last) = OWNER_NAME.split_once(' ').unwrap_or((OWNER_NAME, ""));

    view! {
        <section
            id=Section::Hero.id()
            class="relative h-screen flex items-center justify-center overflow-hidden"
        >
            <div class="absolute inset-0 z-0">
                <div class=move || {
                    if background_loaded.get() {
                        "w-full h-full bg-hero bg-cover bg-center transition-opacity duration-1000 opacity-100"
                    } else {
                        "w-full h-full bg-hero bg-cover bg-center transition-opacity duration-1000 opacity-0"
                    }
                }>
                    <div class="absolute inset-0 video-overlay" />
                </div>
            </div>

            <div class="absolute inset-0 z-10">
                <div class="absolute top-1/4 left-1/4 w-32 h-32 bg-cyber-blue/10 rounded-full blur-xl animate-float" />
                <div class="absolute top-3/4 right-1/4 w-48 h-48 bg-cyber-purple/10 rounded-full blur-2xl animate-float [animation-delay:2s]" />
                <div class="absolute bottom-1/3 left-1/3 w-24 h-24 bg-cyber-yellow/10 rounded-full blur-lg animate-float [animation-delay:4s]" />
            </div>

            <div class="relative z-20 text-center px-6 max-w-4xl mx-auto animate-slide-up">
                <h1 class="text-5xl md:text-7xl lg:text-8xl font-black mb-6 leading-tight uppercase">
                    <span class="block text-gradient-primary animate-glow">{first}</span>
                    <span class="block text-gradient-secondary">{last}</span>
                </h1>

                <div class="mb-8">
                    <p class="text-xl md:text-2xl lg:text-3xl font-light text-muted mb-2">
                        {OWNER_TITLE}
                    </p>
                    <p class="text-sm md:text-base text-muted-foreground max-w-2xl mx-auto leading-relaxed">
                        "Crafting cinematic experiences through motion graphics, visual storytelling, and cutting-edge design"
                    </p>
                </div>

                <div class="flex flex-col sm:flex-row gap-4 justify-center items-center mb-12">
                    <a href=format!("#{}", Section::Portfolio.id()) class="btn-hero group">
                        "▶ View Portfolio"
                    </a>
                    <a href=RESUME.href download=RESUME.file_name class="btn-outline-hero group">
                        "⬇ Download Resume"
                    </a>
                </div>

                <div class="animate-bounce text-3xl text-cyber-blue animate-glow">"⌄"</div>
            </div>
        </section>
    }
}

mod about;
mod contact;
mod contact_form;
mod footer;
mod hero;
mod navbar;
mod portfolio;
mod reveal;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::site::{OWNER_NAME, OWNER_TITLE};

use about::About;
use contact::Contact;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use portfolio::Portfolio;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{OWNER_NAME} - {title}") />
        <Meta name="description" content=format!("{OWNER_NAME}, {OWNER_TITLE}") />

        <Router>
            <Navbar />
            <main class="min-h-screen">
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

/// The whole site: every section stacked on one scrolling page.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text=OWNER_TITLE />
        <Hero />
        <About />
        <Portfolio />
        <Contact />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Not Found" />
        <div class="flex flex-col items-center justify-center min-h-screen gap-4">
            <h1 class="text-4xl font-bold text-gradient-primary">"404"</h1>
            <p class="text-muted-foreground">"Page not found."</p>
            <a href="/" class="text-cyber-blue hover:text-cyber-purple transition-quick">
                "Back to the homepage"
            </a>
        </div>
    }
}

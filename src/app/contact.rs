use leptos::{html, prelude::*};

use super::contact_form::ContactForm;
use super::reveal::{reveal_class, use_reveal};
use crate::site::{Section, SocialLink, CONTACT_EMAIL, QUICK_INFO, RESUME, SOCIAL_LINKS};

#[component]
pub fn Contact() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, Section::Contact);

    view! {
        <section
            id=Section::Contact.id()
            node_ref=section_ref
            class="py-20 bg-surface relative overflow-hidden scroll-mt-20"
        >
            <div class="absolute inset-0">
                <div class="absolute top-20 left-10 w-40 h-40 bg-cyber-purple/5 rounded-full blur-3xl animate-float" />
                <div class="absolute bottom-20 right-10 w-60 h-60 bg-cyber-blue/5 rounded-full blur-3xl animate-float [animation-delay:3s]" />
            </div>

            <div class="container mx-auto px-6 relative z-10">
                <div class=move || reveal_class(visible.get())>
                    <div class="text-center mb-16">
                        <h2 class="text-4xl md:text-5xl font-bold mb-4">
                            "Let's " <span class="text-gradient-accent">"Create"</span> " Together"
                        </h2>
                        <div class="w-24 h-1 bg-gradient-accent mx-auto mb-8" />
                        <p class="text-muted-foreground max-w-2xl mx-auto text-lg">
                            "Ready to bring your vision to life? Let's discuss your next project and create something extraordinary."
                        </p>
                    </div>

                    <div class="grid lg:grid-cols-2 gap-12 max-w-6xl mx-auto">
                        <div class="space-y-8">
                            <ContactForm />
                            <QuickInfo />
                        </div>

                        <div class="space-y-6">
                            <div>
                                <h3 class="text-2xl font-bold mb-6 text-gradient-secondary">"Connect With Me"</h3>
                                <p class="text-muted-foreground mb-8">
                                    "Follow my work and connect on your preferred platform"
                                </p>
                            </div>
                            <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-4">
                                {SOCIAL_LINKS
                                    .iter()
                                    .enumerate()
                                    .map(|(i, link)| view! { <SocialCard link=*link index=i /> })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <div class="text-center mt-16 pt-16 border-t border-surface-light">
                        <h3 class="text-2xl md:text-3xl font-bold mb-4">
                            "Ready to Start Your "
                            <span class="text-gradient-primary">"Next Project"</span>
                            "?"
                        </h3>
                        <p class="text-muted-foreground mb-8 max-w-2xl mx-auto">
                            "From concept to completion, I'll help bring your creative vision to life with professional quality and attention to detail."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center">
                            <a href=format!("#{}", Section::Contact.id()) class="btn-hero group">
                                "✉ Start a Project"
                            </a>
                            <a href=RESUME.href download=RESUME.file_name class="btn-outline-hero group">
                                "↗ View Resume"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn QuickInfo() -> impl IntoView {
    view! {
        <div class="bg-card rounded-2xl p-8 shadow-xl border border-surface-light">
            <h4 class="text-lg font-bold text-gradient-secondary mb-4">"Quick Info"</h4>
            <div class="space-y-3 text-sm">
                {QUICK_INFO
                    .iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="flex justify-between">
                                <span class="text-muted-foreground">{format!("{label}:")}</span>
                                <span class="text-foreground font-medium">{*value}</span>
                            </div>
                        }
                    })
                    .collect_view()}
                <div class="flex justify-between">
                    <span class="text-muted-foreground">"Email:"</span>
                    <a
                        href=format!("mailto:{CONTACT_EMAIL}")
                        class="text-cyber-blue hover:text-cyber-purple transition-quick"
                    >
                        {CONTACT_EMAIL}
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SocialCard(link: SocialLink, index: usize) -> impl IntoView {
    view! {
        <a
            href=link.url
            target="_blank"
            rel="noopener noreferrer"
            class="group bg-card rounded-2xl p-6 shadow-xl border border-surface-light hover:shadow-2xl transition-smooth hover:scale-105 block animate-fade-in"
            style=format!("animation-delay: {}ms", index * 100)
        >
            <div class="flex items-start justify-between mb-4">
                <div class=format!(
                    "w-12 h-12 bg-surface-light rounded-xl flex items-center justify-center group-hover:scale-110 transition-quick font-bold {}",
                    link.accent,
                )>{link.name.chars().next().unwrap_or('?').to_string()}</div>
                <span class="text-muted-foreground group-hover:text-foreground transition-quick">
                    "↗"
                </span>
            </div>
            <h4 class="text-lg font-bold mb-2 group-hover:text-gradient-primary transition-quick">
                {link.name}
            </h4>
            <p class="text-muted-foreground text-sm">{link.description}</p>
        </a>
    }
}

use leptos::{html, prelude::*};

use super::reveal::{reveal_class, use_reveal};
use crate::portfolio::{filter, Category, Project};
use crate::site::Section;

#[component]
pub fn Portfolio() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, Section::Portfolio);
    let (active, set_active) = signal(Category::All);

    view! {
        <section
            id=Section::Portfolio.id()
            node_ref=section_ref
            class="py-20 bg-background relative overflow-hidden scroll-mt-20"
        >
            <div class="container mx-auto px-6">
                <div class=move || reveal_class(visible.get())>
                    <div class="text-center mb-16">
                        <h2 class="text-4xl md:text-5xl font-bold mb-4">
                            <span class="text-gradient-secondary">"Featured"</span>
                            " Work"
                        </h2>
                        <div class="w-24 h-1 bg-gradient-secondary mx-auto mb-8" />
                        <p class="text-muted-foreground max-w-2xl mx-auto">
                            "Discover my latest projects showcasing creative storytelling and technical excellence"
                        </p>
                    </div>

                    <div class="flex flex-wrap justify-center gap-4 mb-12">
                        {Category::ALL
                            .into_iter()
                            .map(|category| {
                                view! {
                                    <button
                                        class=move || {
                                            if active.get() == category {
                                                "btn-hero btn-sm"
                                            } else {
                                                "btn-outline-hero btn-sm"
                                            }
                                        }
                                        on:click=move |_| set_active.set(category)
                                    >
                                        {category.display_name()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {move || {
                            filter(active.get())
                                .into_iter()
                                .enumerate()
                                .map(|(i, project)| view! { <ProjectCard project=*project index=i /> })
                                .collect_view()
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    view! {
        <div
            class="group relative bg-card rounded-2xl overflow-hidden shadow-xl hover:shadow-2xl transition-smooth hover:scale-105 animate-fade-in"
            style=format!("animation-delay: {}ms", index * 100)
        >
            <div class="relative aspect-video overflow-hidden">
                <img
                    src=project.thumbnail
                    alt=project.title
                    class="w-full h-full object-cover group-hover:scale-110 transition-smooth"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-background/90 via-transparent to-transparent opacity-0 group-hover:opacity-100 transition-smooth" />
                <div class="absolute inset-0 flex items-center justify-center opacity-0 group-hover:opacity-100 transition-smooth">
                    <div class="w-16 h-16 bg-cyber-blue rounded-full flex items-center justify-center glow-primary hover:scale-110 transition-quick cursor-pointer text-white text-xl">
                        "▶"
                    </div>
                </div>
                <div class="absolute top-4 right-4 bg-background/80 backdrop-blur-sm text-xs px-2 py-1 rounded-lg">
                    {project.duration}
                </div>
            </div>

            <div class="p-6">
                <h3 class="text-xl font-bold mb-2 group-hover:text-gradient-primary transition-smooth">
                    {project.title}
                </h3>
                <p class="text-muted-foreground text-sm mb-4">{project.description}</p>
                <div class="flex items-center justify-between">
                    <span class="text-xs bg-surface px-3 py-1 rounded-full text-cyber-blue font-medium capitalize">
                        {project.category.to_string()}
                    </span>
                    <span class="text-muted-foreground group-hover:text-cyber-blue transition-quick">
                        "↗"
                    </span>
                </div>
            </div>
        </div>
    }
}

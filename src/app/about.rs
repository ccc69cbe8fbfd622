use leptos::{html, prelude::*};

use super::reveal::{reveal_class, use_reveal};
use crate::site::{Section, Skill, OWNER_NAME, OWNER_TITLE, SKILLS};

#[component]
pub fn About() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, Section::About);

    view! {
        <section
            id=Section::About.id()
            node_ref=section_ref
            class="py-20 bg-surface relative overflow-hidden scroll-mt-20"
        >
            <div class="container mx-auto px-6">
                <div class=move || reveal_class(visible.get())>
                    <div class="text-center mb-16">
                        <h2 class="text-4xl md:text-5xl font-bold mb-4">
                            <span class="text-gradient-primary">"About"</span>
                            " Me"
                        </h2>
                        <div class="w-24 h-1 bg-gradient-primary mx-auto" />
                    </div>

                    <div class="grid lg:grid-cols-2 gap-12 items-center">
                        <div class="text-center lg:text-left">
                            <div class="relative inline-block">
                                <div class="absolute inset-0 bg-gradient-primary rounded-2xl blur-xl opacity-30 scale-105" />
                                <img
                                    src="/profile-photo.jpg"
                                    alt=format!("{OWNER_NAME} - {OWNER_TITLE}")
                                    class="relative w-80 h-80 object-cover rounded-2xl shadow-2xl border-2 border-surface-light hover:scale-105 transition-smooth"
                                />
                            </div>
                        </div>

                        <div class="space-y-8">
                            <div class="space-y-4">
                                <h3 class="text-2xl md:text-3xl font-bold text-gradient-secondary">
                                    "Professional " {OWNER_TITLE}
                                </h3>
                                <p class="text-muted leading-relaxed">
                                    "Professional video editor and graphics designer with experience in After Effects, Premiere Pro, Photoshop, and Adobe Illustrator. I specialize in creating compelling visual narratives and bringing creative visions to life."
                                </p>
                                <p class="text-muted leading-relaxed">
                                    "From concept to completion, I deliver high-quality video content and stunning graphics that captivate audiences and elevate brands. Every project receives meticulous attention to detail and creative excellence."
                                </p>
                            </div>

                            <div class="space-y-6">
                                <h4 class="text-xl font-semibold text-gradient-accent">"Core Skills"</h4>
                                <div class="space-y-4">
                                    {SKILLS
                                        .iter()
                                        .enumerate()
                                        .map(|(i, skill)| view! { <SkillBar skill=*skill index=i visible /> })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillBar(skill: Skill, index: usize, visible: ReadSignal<bool>) -> impl IntoView {
    // bars grow from zero once the section is on screen, staggered by row
    let style = move || {
        let width = if visible.get() { skill.level } else { 0 };
        format!("width: {width}%; transition-delay: {}ms", index * 100)
    };

    view! {
        <div class="space-y-2">
            <div class="flex justify-between text-sm">
                <span class="text-foreground font-medium">{skill.name}</span>
                <span class="text-muted">{format!("{}%", skill.level)}</span>
            </div>
            <div class="h-2 bg-surface-light rounded-full overflow-hidden">
                <div
                    class="h-full bg-gradient-primary transition-all duration-1000 ease-out"
                    style=style
                />
            </div>
        </div>
    }
}

use leptos::{either::Either, prelude::*, task::spawn_local};

use crate::contact::{
    ContactController, Field, SimulatedTransport, SubmissionState, SubmitStart, SubmitTransport,
};

#[component]
pub fn ContactForm() -> impl IntoView {
    // dropped with the component, so nothing outlives the form
    let controller = RwSignal::new(ContactController::new());
    let transport = SimulatedTransport::default();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let start = controller
            .try_update(|c| c.begin_submit())
            .unwrap_or(SubmitStart::Ignored);
        let SubmitStart::Started(message) = start else {
            return;
        };
        spawn_local(async move {
            let result = transport.send(&message).await;
            // the form may have been unmounted while we waited
            match controller.try_update(|c| c.finish_submit(result)) {
                Some(outcome) => log::debug!("contact submission finished: {outcome:?}"),
                None => log::debug!("contact form unmounted before submission finished"),
            }
        });
    };

    let state = move || controller.with(|c| c.state());

    view! {
        {move || {
            if state() == SubmissionState::Submitted {
                Either::Left(
                    view! {
                        <SubmittedCard on_reset=move || {
                            controller.update(|c| {
                                c.reset_after_submission();
                            })
                        } />
                    },
                )
            } else {
                Either::Right(
                    view! {
                        <div class="bg-card rounded-2xl p-8 shadow-xl border border-surface-light">
                            <div class="flex items-center mb-6">
                                <div class="w-12 h-12 bg-gradient-primary rounded-xl flex items-center justify-center mr-4 text-white text-xl">
                                    "✉"
                                </div>
                                <div>
                                    <h3 class="text-xl font-bold text-gradient-primary">"Get In Touch"</h3>
                                    <p class="text-muted-foreground">"Let's discuss your project"</p>
                                </div>
                            </div>

                            <form on:submit=on_submit class="space-y-6" novalidate=true>
                                <div class="grid md:grid-cols-2 gap-6">
                                    <FieldInput
                                        controller
                                        field=Field::Name
                                        input_type="text"
                                        placeholder="Your full name"
                                        accent="focus:border-cyber-blue"
                                    />
                                    <FieldInput
                                        controller
                                        field=Field::Email
                                        input_type="email"
                                        placeholder="your.email@example.com"
                                        accent="focus:border-cyber-purple"
                                    />
                                </div>
                                <FieldInput
                                    controller
                                    field=Field::Phone
                                    input_type="tel"
                                    placeholder="+1 (555) 123-4567"
                                    accent="focus:border-cyber-yellow"
                                />
                                <MessageInput controller />

                                {move || {
                                    controller
                                        .with(|c| c.submit_error().map(|e| e.to_string()))
                                        .map(|err| {
                                            view! {
                                                <p class="text-red-500 text-sm" role="alert">
                                                    {format!("{err}. Please try again.")}
                                                </p>
                                            }
                                        })
                                }}

                                <button
                                    type="submit"
                                    class="btn-hero w-full group"
                                    disabled=move || state() == SubmissionState::Submitting
                                >
                                    {move || {
                                        if state() == SubmissionState::Submitting {
                                            Either::Left(
                                                view! {
                                                    <span class="flex items-center justify-center">
                                                        <span class="w-4 h-4 border-2 border-white border-t-transparent rounded-full animate-spin mr-2" />
                                                        "Sending Message..."
                                                    </span>
                                                },
                                            )
                                        } else {
                                            Either::Right("✉ Send Message")
                                        }
                                    }}
                                </button>
                            </form>
                        </div>
                    },
                )
            }
        }}
    }
}

fn input_class(extra: &str, has_error: bool) -> String {
    let border = if has_error { " border-red-500" } else { "" };
    format!("form-input {extra}{border}")
}

#[component]
fn FieldInput(
    controller: RwSignal<ContactController>,
    field: Field,
    input_type: &'static str,
    placeholder: &'static str,
    accent: &'static str,
) -> impl IntoView {
    let has_error = move || controller.with(|c| c.errors().get(field).is_some());

    view! {
        <div>
            <label for=field.as_str() class="flex items-center text-sm font-medium text-foreground mb-2">
                {field.label()}
                " *"
            </label>
            <input
                id=field.as_str()
                name=field.as_str()
                type=input_type
                placeholder=placeholder
                class=move || input_class(accent, has_error())
                prop:value=move || controller.with(|c| c.fields().get(field).to_string())
                on:input=move |ev| {
                    controller.update(|c| c.update_field(field, event_target_value(&ev)))
                }
            />
            <FieldError controller field />
        </div>
    }
}

#[component]
fn MessageInput(controller: RwSignal<ContactController>) -> impl IntoView {
    let field = Field::Message;
    let has_error = move || controller.with(|c| c.errors().get(field).is_some());

    view! {
        <div>
            <label for=field.as_str() class="flex items-center text-sm font-medium text-foreground mb-2">
                {field.label()}
                " *"
            </label>
            <textarea
                id=field.as_str()
                name=field.as_str()
                placeholder="Tell me about your project, timeline, and budget..."
                class=move || input_class("focus:border-cyber-pink min-h-[120px] resize-none", has_error())
                prop:value=move || controller.with(|c| c.fields().message.clone())
                on:input=move |ev| {
                    controller.update(|c| c.update_field(field, event_target_value(&ev)))
                }
            />
            <FieldError controller field />
        </div>
    }
}

#[component]
fn FieldError(controller: RwSignal<ContactController>, field: Field) -> impl IntoView {
    move || {
        controller
            .with(|c| c.errors().get(field).map(|e| e.to_string()))
            .map(|msg| view! { <p class="text-red-500 text-sm mt-1">{msg}</p> })
    }
}

#[component]
fn SubmittedCard(on_reset: impl Fn() + Send + Sync + 'static) -> impl IntoView {
    view! {
        <div class="bg-card rounded-2xl p-8 shadow-xl border border-surface-light text-center">
            <div class="w-16 h-16 bg-gradient-primary rounded-full flex items-center justify-center mx-auto mb-6 text-white text-3xl">
                "✓"
            </div>
            <h3 class="text-2xl font-bold text-gradient-primary mb-4">"Message Sent!"</h3>
            <p class="text-muted-foreground mb-6">
                "Thank you for reaching out. I'll get back to you within 24 hours."
            </p>
            <button class="btn-outline-hero" on:click=move |_| on_reset()>
                "Send Another Message"
            </button>
        </div>
    }
}

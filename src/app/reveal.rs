use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::site::Section;

/// Latches to `true` the first time `target` scrolls into view far enough.
pub fn use_reveal(target: NodeRef<html::Section>, section: Section) -> ReadSignal<bool> {
    let (visible, set_visible) = signal(false);

    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                set_visible.set(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![section.reveal_threshold()]),
    );

    visible
}

/// Classes for a block that fades and slides in once revealed.
pub fn reveal_class(visible: bool) -> &'static str {
    if visible {
        "transition-smooth duration-1000 opacity-100 translate-y-0"
    } else {
        "transition-smooth duration-1000 opacity-0 translate-y-10"
    }
}

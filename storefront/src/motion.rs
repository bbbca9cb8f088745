//! View transitions.
//!
//! A single [`Transition`] value (enter motion, exit motion, stagger)
//! describes how a block appears and disappears. The [`Motion`] wrapper
//! applies it; [`TransitionLink`] plays the exit motion of the current
//! page before navigating away.

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use serde::{Deserialize, Serialize};

use crate::config::MotionConfig;

/// One kind of movement, mapped to CSS keyframes in `style/main.css`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MotionKind {
    /// No animation.
    None,
    FadeIn,
    /// Fade in while rising / sliding from the right.
    #[default]
    FadeUp,
    SlideIn,
    ScaleIn,
}

impl MotionKind {
    pub fn enter_class(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::FadeIn => "motion-fade-in",
            Self::FadeUp => "motion-fade-up",
            Self::SlideIn => "motion-slide-in",
            Self::ScaleIn => "motion-scale-in",
        }
    }

    pub fn exit_class(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::FadeIn => "motion-fade-out",
            Self::FadeUp => "motion-fade-down",
            Self::SlideIn => "motion-slide-out",
            Self::ScaleIn => "motion-scale-out",
        }
    }
}

/// Delays for a sequence of siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stagger {
    /// Delay before the first child.
    pub delay_children_ms: u32,
    /// Additional delay per following child.
    pub stagger_children_ms: u32,
}

impl Stagger {
    pub const NONE: Stagger = Stagger::new(0, 0);

    pub const fn new(delay_children_ms: u32, stagger_children_ms: u32) -> Self {
        Self {
            delay_children_ms,
            stagger_children_ms,
        }
    }

    /// Start delay of the child at `index`.
    pub fn delay_for(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay_children_ms
            .saturating_add(self.stagger_children_ms.saturating_mul(index))
    }
}

/// How a block enters and leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub enter: MotionKind,
    pub exit: MotionKind,
    pub stagger: Stagger,
    /// Enter animation length; `None` uses the configured default.
    pub duration_ms: Option<u32>,
}

impl Default for Transition {
    fn default() -> Self {
        Self::fade_up()
    }
}

impl Transition {
    pub const fn new(enter: MotionKind, exit: MotionKind) -> Self {
        Self {
            enter,
            exit,
            stagger: Stagger::NONE,
            duration_ms: None,
        }
    }

    /// Whole-page fade.
    pub const fn page() -> Self {
        Self::new(MotionKind::FadeIn, MotionKind::FadeIn).with_duration(200)
    }

    pub const fn fade_up() -> Self {
        Self::new(MotionKind::FadeUp, MotionKind::FadeIn)
    }

    /// Product images.
    pub const fn slide_in() -> Self {
        Self::new(MotionKind::SlideIn, MotionKind::FadeIn)
    }

    /// The price total, replayed on every quantity change.
    pub const fn scale_in() -> Self {
        Self::new(MotionKind::ScaleIn, MotionKind::None).with_duration(250)
    }

    pub const fn with_stagger(mut self, stagger: Stagger) -> Self {
        self.stagger = stagger;
        self
    }

    pub const fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// CSS class for the current phase.
    pub fn class(&self, leaving: bool) -> &'static str {
        if leaving {
            self.exit.exit_class()
        } else {
            self.enter.enter_class()
        }
    }

    /// Inline timing for the child at `index`.
    pub fn style(&self, index: usize, default_duration_ms: u32) -> String {
        format!(
            "animation-delay: {}ms; animation-duration: {}ms;",
            self.stagger.delay_for(index),
            self.duration_ms.unwrap_or(default_duration_ms)
        )
    }
}

/// Page-wide transition state shared through context.
#[derive(Debug, Clone, Copy)]
pub struct PageTransition {
    leaving: RwSignal<bool>,
    enabled: bool,
    duration_ms: u32,
    exit_ms: u32,
}

impl PageTransition {
    pub fn new(config: &MotionConfig) -> Self {
        Self {
            leaving: RwSignal::new(false),
            enabled: config.enabled,
            duration_ms: config.duration_ms,
            exit_ms: config.exit_ms,
        }
    }

    /// Whether the current page is playing its exit motion.
    pub fn is_leaving(&self) -> bool {
        self.leaving.get()
    }
}

/// Wraps children in a block that plays `transition`.
///
/// Without a [`PageTransition`] in context, or with motion disabled, the
/// block renders plain.
#[component]
pub fn Motion(
    #[prop(optional)] transition: Option<Transition>,
    /// Position among staggered siblings.
    #[prop(optional)]
    index: usize,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let transition = transition.unwrap_or_default();
    let page = use_context::<PageTransition>().filter(|page| page.enabled);

    let style = move || match page {
        Some(page) if page.is_leaving() => format!("animation-duration: {}ms;", page.exit_ms),
        Some(page) => transition.style(index, page.duration_ms),
        None => String::new(),
    };
    let classes = move || match page {
        Some(page) => {
            let motion = transition.class(page.is_leaving());
            format!("{} {}", class, motion).trim().to_string()
        }
        None => class.clone(),
    };

    view! {
        <div class=classes style=style>
            {children()}
        </div>
    }
}

/// A link that lets the current page play its exit motion first.
#[component]
pub fn TransitionLink(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let page = use_context::<PageTransition>().filter(|page| page.enabled && page.exit_ms > 0);
    let navigate = use_navigate();
    let target = href.clone();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        // Leave modified clicks (new tab, new window) to the browser.
        if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
            return;
        }
        let Some(page) = page else {
            return;
        };
        ev.prevent_default();
        page.leaving.set(true);

        let navigate = navigate.clone();
        let target = target.clone();
        set_timeout(
            move || {
                navigate(&target, Default::default());
                page.leaving.set(false);
            },
            Duration::from_millis(u64::from(page.exit_ms)),
        );
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delays() {
        let stagger = Stagger::new(200, 200);
        assert_eq!(stagger.delay_for(0), 200);
        assert_eq!(stagger.delay_for(1), 400);
        assert_eq!(Stagger::NONE.delay_for(5), 0);
        assert_eq!(Stagger::new(1, u32::MAX).delay_for(3), u32::MAX);
    }

    #[test]
    fn test_transition_classes() {
        let t = Transition::fade_up();
        assert_eq!(t.class(false), "motion-fade-up");
        assert_eq!(t.class(true), "motion-fade-out");
        assert_eq!(Transition::scale_in().class(true), "");
    }

    #[test]
    fn test_transition_style() {
        let t = Transition::fade_up().with_stagger(Stagger::new(0, 70));
        assert_eq!(
            t.style(2, 600),
            "animation-delay: 140ms; animation-duration: 600ms;"
        );
        assert_eq!(
            Transition::page().style(0, 600),
            "animation-delay: 0ms; animation-duration: 200ms;"
        );
    }

    #[test]
    fn test_default_transition_is_fade_up() {
        assert_eq!(Transition::default(), Transition::fade_up());
    }
}

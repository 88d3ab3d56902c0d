use gloo_events::EventListener;
use web_sys::{CustomEvent, Document, Window};

use crate::common::storage;

const STORAGE_KEY: &str = "theme";
const DARK_CLASS: &str = "dark";
const HIDDEN_CLASS: &str = "hidden";

/// Dispatched on `<body>` after every toggle; the reveal animator listens
/// for it to re-scan the document.
pub const THEME_CHANGED_EVENT: &str = "themeChanged";

const TOGGLE_BUTTONS: [&str; 2] = ["theme-toggle", "theme-toggle-mobile"];
const MOON_ICONS: [&str; 2] = ["moon-icon", "moon-icon-mobile"];
const SUN_ICONS: [&str; 2] = ["sun-icon", "sun-icon-mobile"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

pub struct ThemeToggles {
    _listeners: Vec<EventListener>,
}

/// Applies the initial preference and wires the desktop and mobile toggle
/// buttons. Either button may be absent from the page.
pub fn init(window: &Window, document: &Document) -> ThemeToggles {
    apply_preference(document, initial_preference(window));

    let mut listeners = Vec::new();
    for id in TOGGLE_BUTTONS {
        if let Some(button) = document.get_element_by_id(id) {
            let document = document.clone();
            listeners.push(EventListener::new(&button, "click", move |_| {
                toggle(&document);
            }));
        }
    }

    ThemeToggles {
        _listeners: listeners,
    }
}

/// Stored preference wins; an absent or unreadable value falls back to the
/// system color-scheme signal. The fallback is never written back, so only
/// an explicit toggle persists anything.
pub fn initial_preference(window: &Window) -> ThemePreference {
    storage::get(STORAGE_KEY)
        .ok()
        .and_then(|value| ThemePreference::parse(&value))
        .unwrap_or_else(|| system_preference(window))
}

fn system_preference(window: &Window) -> ThemePreference {
    match window.match_media("(prefers-color-scheme: dark)") {
        Ok(Some(query)) if query.matches() => ThemePreference::Dark,
        _ => ThemePreference::Light,
    }
}

/// The preference currently reflected by the document, derived from the
/// body class rather than stored state.
pub fn applied_preference(document: &Document) -> ThemePreference {
    match document.body() {
        Some(body) if body.class_list().contains(DARK_CLASS) => ThemePreference::Dark,
        _ => ThemePreference::Light,
    }
}

/// Sets or clears the document-wide dark flag and reconciles both icon
/// pairs with it. Missing icons are skipped.
pub fn apply_preference(document: &Document, preference: ThemePreference) {
    if let Some(body) = document.body() {
        let classes = body.class_list();
        let _ = match preference {
            ThemePreference::Dark => classes.add_1(DARK_CLASS),
            ThemePreference::Light => classes.remove_1(DARK_CLASS),
        };
    }

    let dark = preference == ThemePreference::Dark;
    for id in MOON_ICONS {
        set_hidden(document, id, dark);
    }
    for id in SUN_ICONS {
        set_hidden(document, id, !dark);
    }
}

fn set_hidden(document: &Document, id: &str, hidden: bool) {
    let Some(icon) = document.get_element_by_id(id) else {
        return;
    };
    let classes = icon.class_list();
    let _ = if hidden {
        classes.add_1(HIDDEN_CLASS)
    } else {
        classes.remove_1(HIDDEN_CLASS)
    };
}

/// Flips the applied state, persists the new value, re-applies it, and
/// announces the change.
pub fn toggle(document: &Document) {
    let next = applied_preference(document).flipped();
    storage::set(STORAGE_KEY, next.as_str());
    apply_preference(document, next);
    notify_theme_changed(document);
}

fn notify_theme_changed(document: &Document) {
    let Some(body) = document.body() else {
        return;
    };
    if let Ok(event) = CustomEvent::new(THEME_CHANGED_EVENT) {
        let _ = body.dispatch_event(&event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preference_string_round_trip() {
        for preference in [ThemePreference::Light, ThemePreference::Dark] {
            assert_eq!(ThemePreference::parse(preference.as_str()), Some(preference));
        }
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert_eq!(ThemePreference::parse("sepia"), None);
        assert_eq!(ThemePreference::parse(""), None);
        assert_eq!(ThemePreference::parse("Dark"), None);
    }

    #[test]
    fn flipped_is_an_involution() {
        for preference in [ThemePreference::Light, ThemePreference::Dark] {
            assert_eq!(preference.flipped().flipped(), preference);
            assert_ne!(preference.flipped(), preference);
        }
    }
}

//! Visual theme selection and persistence.
//!
//! Reads the user's preference from `localStorage` and applies the chosen
//! background gradient as a CSS custom property on `<html>`. Selecting a
//! theme writes back to `localStorage`. Requires a browser environment; on
//! the host everything degrades to the default theme.

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "aresafe_theme";

/// Background theme for the student-facing pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Default,
    Beige,
    LightBlue,
    LightGray,
}

impl Theme {
    /// All themes in picker order.
    pub const ALL: [Self; 4] = [Self::Default, Self::Beige, Self::LightBlue, Self::LightGray];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Beige => "beige",
            Self::LightBlue => "light-blue",
            Self::LightGray => "light-gray",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "default" => Some(Self::Default),
            "beige" => Some(Self::Beige),
            "light-blue" => Some(Self::LightBlue),
            "light-gray" => Some(Self::LightGray),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Beige => "Beige",
            Self::LightBlue => "Light Blue",
            Self::LightGray => "Light Gray",
        }
    }

    #[must_use]
    pub fn gradient(self) -> &'static str {
        match self {
            Self::Default => "linear-gradient(135deg, #667eea 0%, #764ba2 50%, #f093fb 100%)",
            Self::Beige => "linear-gradient(135deg, #f5f1e8 0%, #e8ddd4 50%, #ddd4c7 100%)",
            Self::LightBlue => "linear-gradient(135deg, #e0f2fe 0%, #bae6fd 50%, #93c5fd 100%)",
            Self::LightGray => "linear-gradient(135deg, #f3f4f6 0%, #e5e7eb 50%, #d1d5db 100%)",
        }
    }

    /// Dark themes get light text; light themes get dark text.
    #[must_use]
    pub fn text_color(self) -> &'static str {
        match self {
            Self::Default => "#ffffff",
            _ => "#1f2937",
        }
    }
}

/// Read the stored theme preference, defaulting when absent or unknown.
#[must_use]
pub fn read_preference() -> Theme {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::default();
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(raw)) = storage.get_item(STORAGE_KEY) {
                if let Some(theme) = Theme::parse(&raw) {
                    return theme;
                }
            }
        }
        Theme::default()
    }
    #[cfg(not(feature = "csr"))]
    {
        Theme::default()
    }
}

/// Apply the theme's CSS custom properties to the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            if let Ok(html) = el.dyn_into::<web_sys::HtmlElement>() {
                let style = html.style();
                let _ = style.set_property("--app-bg-gradient", theme.gradient());
                let _ = style.set_property("--app-text-color", theme.text_color());
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Select a theme: apply it and persist the preference.
pub fn select(theme: Theme) -> Theme {
    apply(theme);
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, theme.id());
            }
        }
    }
    theme
}

#[cfg(test)]
#[path = "theme_test.rs"]
mod tests;

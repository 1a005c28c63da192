// colour scheme of the page
//
// the theme is plain data: the controller only computes the next value, whoever holds the
// theme context is responsible for applying it to the rendered tree
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    // the class attached to the root container; light mode is the unstyled baseline
    pub fn class(self) -> Option<&'static str> {
        match self {
            Theme::Dark => Some("dark"),
            Theme::Light => None,
        }
    }

    // the label of the button that switches *away* from this theme
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Light Mode",
            Theme::Light => "Dark Mode",
        }
    }
}

// add or remove the theme class from a whitespace separated class list, leaving every
// other class alone
pub fn apply_theme_class(classes: &str, theme: Theme) -> String {
    let mut kept: Vec<&str> = classes
        .split_whitespace()
        .filter(|c| Some(*c) != Theme::Dark.class())
        .collect();

    if let Some(class) = theme.class() {
        kept.push(class);
    }

    kept.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn fresh_page_renders_dark() {
        let theme = Theme::default();
        assert_eq!(apply_theme_class("portfolio", theme), "portfolio dark");
        assert_eq!(theme.toggle_label(), "Light Mode");
    }

    #[test]
    fn toggle_is_an_involution() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn double_toggle_restores_class_set() {
        let original = "portfolio dark";

        let once = apply_theme_class(original, Theme::Dark.toggled());
        assert_eq!(once, "portfolio");

        let twice = apply_theme_class(&once, Theme::Dark.toggled().toggled());
        assert_eq!(twice, original);
    }

    #[test]
    fn class_application_is_idempotent() {
        let dark = apply_theme_class("portfolio", Theme::Dark);
        assert_eq!(apply_theme_class(&dark, Theme::Dark), "portfolio dark");
        assert_eq!(apply_theme_class("", Theme::Light), "");
    }
}

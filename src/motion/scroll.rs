//! Scroll-position driven presentation: parallax, navbar look, the active
//! section and in-page anchor targets.

pub fn parallax_transform(scroll_y: f64, factor: f64) -> String {
    format!("translateY({}px)", scroll_y * factor)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarLook {
    Top,
    Scrolled,
}

impl NavbarLook {
    pub fn for_offset(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            Self::Scrolled
        } else {
            Self::Top
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Self::Top => "rgba(10, 1, 24, 0.9)",
            Self::Scrolled => "rgba(10, 1, 24, 0.95)",
        }
    }

    pub fn box_shadow(self) -> &'static str {
        match self {
            Self::Top => "none",
            Self::Scrolled => "0 5px 30px rgba(0, 0, 0, 0.3)",
        }
    }
}

/// Id of the last section, in document order, whose top minus `offset` has
/// been scrolled past. A qualifying section without an id clears the match.
pub fn active_section<'a, I>(scroll_y: f64, sections: I, offset: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = (Option<&'a str>, f64)>,
{
    let mut current = None;
    for (id, top) in sections {
        if scroll_y >= top - offset {
            current = id;
        }
    }
    current
}

pub fn link_is_active(href: &str, active: Option<&str>) -> bool {
    let Some(active) = active else {
        return false;
    };
    href.get(1..).is_some_and(|fragment| fragment == active)
}

/// Selector for an in-page anchor, or `None` for a bare `#`.
pub fn fragment_selector(href: &str) -> Option<&str> {
    let href = href.trim();
    if href.starts_with('#') && href.len() > 1 {
        Some(href)
    } else {
        None
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnchorClick<T> {
    pub prevent_default: bool,
    pub target: Option<T>,
}

/// Navigation is always suppressed; the page scrolls only when the fragment
/// resolves to an element.
pub fn anchor_click<T, R>(href: Option<&str>, resolve: R) -> AnchorClick<T>
where
    R: FnOnce(&str) -> Option<T>,
{
    AnchorClick {
        prevent_default: true,
        target: href.and_then(fragment_selector).and_then(resolve),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallax_moves_at_half_scroll_speed() {
        assert_eq!(parallax_transform(0.0, 0.5), "translateY(0px)");
        assert_eq!(parallax_transform(750.0, 0.5), "translateY(375px)");
        assert_eq!(parallax_transform(25.0, 0.5), "translateY(12.5px)");
    }

    #[test]
    fn navbar_switches_strictly_above_threshold() {
        assert_eq!(NavbarLook::for_offset(0.0, 100.0), NavbarLook::Top);
        assert_eq!(NavbarLook::for_offset(100.0, 100.0), NavbarLook::Top);
        assert_eq!(NavbarLook::for_offset(100.5, 100.0), NavbarLook::Scrolled);
        assert_eq!(NavbarLook::Scrolled.box_shadow(), "0 5px 30px rgba(0, 0, 0, 0.3)");
        assert_eq!(NavbarLook::Top.box_shadow(), "none");
    }

    #[test]
    fn second_section_is_active_once_scrolled_within_offset() {
        let sections = [(Some("home"), 0.0), (Some("about"), 800.0)];

        let active = active_section(750.0, sections, 100.0);
        assert_eq!(active, Some("about"));

        let links = ["#home", "#about"];
        let marked: Vec<bool> = links
            .iter()
            .map(|href| link_is_active(href, active))
            .collect();
        assert_eq!(marked, vec![false, true]);
    }

    #[test]
    fn first_section_stays_active_before_the_offset() {
        let sections = [(Some("home"), 0.0), (Some("about"), 800.0)];
        assert_eq!(active_section(699.0, sections, 100.0), Some("home"));
    }

    #[test]
    fn nothing_is_active_above_every_section() {
        let sections = [(Some("work"), 500.0)];
        assert_eq!(active_section(0.0, sections, 100.0), None);
        assert!(!link_is_active("#", None));
        assert!(!link_is_active("#work", None));
    }

    #[test]
    fn section_without_id_clears_the_match() {
        let sections = [(Some("home"), 0.0), (None, 300.0)];
        assert_eq!(active_section(400.0, sections, 100.0), None);
    }

    #[test]
    fn bare_hash_has_no_target() {
        assert_eq!(fragment_selector("#projects"), Some("#projects"));
        assert_eq!(fragment_selector("#"), None);
        assert_eq!(fragment_selector("/resume.pdf"), None);
    }

    #[test]
    fn resolvable_fragment_suppresses_navigation_and_scrolls_to_target() {
        let mut looked_up = Vec::new();
        let click = anchor_click(Some("#projects"), |selector| {
            looked_up.push(selector.to_string());
            (selector == "#projects").then_some(42)
        });

        assert_eq!(
            click,
            AnchorClick {
                prevent_default: true,
                target: Some(42)
            }
        );
        assert_eq!(looked_up, vec!["#projects".to_string()]);
    }

    #[test]
    fn unresolved_fragment_still_suppresses_navigation() {
        let missing = anchor_click(Some("#nowhere"), |_| None::<u32>);
        assert!(missing.prevent_default);
        assert_eq!(missing.target, None);

        let bare = anchor_click(Some("#"), |_| -> Option<u32> {
            panic!("bare hash is never resolved")
        });
        assert!(bare.prevent_default);
        assert_eq!(bare.target, None);

        let no_href = anchor_click(None, |_| Some(1));
        assert!(no_href.prevent_default);
        assert_eq!(no_href.target, None);
    }
}

/// Scroll offset (px) past which the navigation bar turns solid.
pub const SCROLL_THRESHOLD: f64 = 50.0;

pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub static NAV_LINKS: [NavLink; 5] = [
    NavLink {
        name: "Home",
        href: "#hero",
    },
    NavLink {
        name: "About",
        href: "#about",
    },
    NavLink {
        name: "Skills",
        href: "#skills",
    },
    NavLink {
        name: "Experience",
        href: "#experience",
    },
    NavLink {
        name: "Contact",
        href: "#contact",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavStyle {
    Transparent,
    Solid,
}

impl NavStyle {
    pub fn for_scroll(scroll_y: f64) -> Self {
        if scroll_y > SCROLL_THRESHOLD {
            NavStyle::Solid
        } else {
            NavStyle::Transparent
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            NavStyle::Transparent => "bg-transparent py-5",
            NavStyle::Solid => "glass shadow-apple py-3",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_of_page_is_transparent() {
        assert_eq!(NavStyle::for_scroll(0.0), NavStyle::Transparent);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(NavStyle::for_scroll(50.0), NavStyle::Transparent);
        assert_eq!(NavStyle::for_scroll(50.5), NavStyle::Solid);
        assert_eq!(NavStyle::for_scroll(51.0), NavStyle::Solid);
        assert_eq!(NavStyle::for_scroll(4000.0), NavStyle::Solid);
    }

    #[test]
    fn test_styles_differ() {
        assert_ne!(NavStyle::Transparent.class(), NavStyle::Solid.class());
        assert!(NavStyle::Solid.class().contains("glass"));
    }

    #[test]
    fn test_nav_links_are_anchors() {
        assert!(NAV_LINKS.iter().all(|l| l.href.starts_with('#')));
        assert_eq!(NAV_LINKS.last().map(|l| l.href), Some("#contact"));
    }
}

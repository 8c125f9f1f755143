//! Navigation links listed in the drawer.

use crate::model::icon::Icon;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SidebarLink {
    pub icon: Icon,
    pub path: &'static str,
    pub title: &'static str,
    pub show_on_mobile: bool,
    /// Pinned to the bottom of the drawer.
    pub bottom: bool,
}

const fn link(icon: Icon, path: &'static str, title: &'static str) -> SidebarLink {
    SidebarLink {
        icon,
        path,
        title,
        show_on_mobile: true,
        bottom: false,
    }
}

pub static SIDEBAR_LINKS: [SidebarLink; 8] = [
    link(Icon::Home, "/", "Home"),
    link(Icon::SquarePlus, "/trackables", "Track"),
    link(Icon::Book, "/journal", "Journal"),
    link(Icon::Bullseye, "/goals", "Goals"),
    link(Icon::Tags, "/tags", "Tags"),
    SidebarLink {
        show_on_mobile: false,
        ..link(Icon::LineChart, "/analytics", "Analytics")
    },
    SidebarLink {
        show_on_mobile: false,
        ..link(Icon::Sun, "/reflections", "Reflections")
    },
    SidebarLink {
        bottom: true,
        ..link(Icon::Cog, "/settings", "Settings")
    },
];

/// The link whose path is the longest prefix of `route`.
pub fn active_link(route: &str) -> Option<&'static SidebarLink> {
    SIDEBAR_LINKS
        .iter()
        .filter(|l| route == l.path || (l.path != "/" && route.starts_with(l.path)))
        .max_by_key(|l| l.path.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_are_unique_and_one_is_pinned() {
        let mut paths: Vec<&str> = SIDEBAR_LINKS.iter().map(|l| l.path).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), SIDEBAR_LINKS.len());
        assert_eq!(SIDEBAR_LINKS.iter().filter(|l| l.bottom).count(), 1);
        assert!(!SIDEBAR_LINKS[5].show_on_mobile);
    }

    #[test]
    fn test_active_link() {
        assert_eq!(active_link("/").unwrap().title, "Home");
        assert_eq!(active_link("/analytics/tags:t1").unwrap().title, "Analytics");
        assert_eq!(active_link("/settings").unwrap().title, "Settings");
        assert!(active_link("/nowhere").is_none());
    }
}

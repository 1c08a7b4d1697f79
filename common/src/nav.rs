//! Page resolution, active-link highlighting and the mobile menu toggle.

pub const DEFAULT_PAGE: &str = "index.html";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "index.html", label: "Home" },
    NavLink { href: "teams.html", label: "Teams" },
    NavLink { href: "feed.html", label: "Feed" },
    NavLink { href: "tasks.html", label: "Tasks" },
    NavLink { href: "create-team.html", label: "Create Team" },
    NavLink { href: "login.html", label: "Log In" },
    NavLink { href: "signup.html", label: "Sign Up" },
];

/// Last path segment of `pathname`, or [`DEFAULT_PAGE`] for a bare directory.
pub fn current_page(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => DEFAULT_PAGE,
    }
}

pub fn is_active(href: &str, current: &str) -> bool {
    href == current
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Signup,
    CreateTeam,
    Teams,
    Feed,
    Tasks,
}

impl Page {
    /// Unknown pages fall back to the home page.
    pub fn from_file(file: &str) -> Self {
        match file {
            "login.html" => Page::Login,
            "signup.html" => Page::Signup,
            "create-team.html" => Page::CreateTeam,
            "teams.html" => Page::Teams,
            "feed.html" => Page::Feed,
            "tasks.html" => Page::Tasks,
            _ => Page::Home,
        }
    }
}

pub fn is_mobile(viewport_width: f64, breakpoint_px: u32) -> bool {
    viewport_width <= f64::from(breakpoint_px)
}

/// Inline `display` of the nav list, driven by the mobile toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuDisplay {
    /// No inline style; the stylesheet decides.
    #[default]
    Unset,
    Shown,
    Hidden,
}

impl MenuDisplay {
    /// Anything but an explicit `Hidden` toggles to hidden.
    pub fn toggled(self) -> Self {
        match self {
            MenuDisplay::Hidden => MenuDisplay::Shown,
            MenuDisplay::Unset | MenuDisplay::Shown => MenuDisplay::Hidden,
        }
    }

    pub fn css(self) -> Option<&'static str> {
        match self {
            MenuDisplay::Unset => None,
            MenuDisplay::Shown => Some("display: flex;"),
            MenuDisplay::Hidden => Some("display: none;"),
        }
    }
}

/// Whether the lazily-created toggle button exists.
///
/// Created the first time the viewport is narrow enough; never removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    pub toggle_created: bool,
    pub display: MenuDisplay,
}

impl MobileMenu {
    /// Re-evaluates the viewport. Returns whether the toggle was just created.
    pub fn on_viewport(&mut self, viewport_width: f64, breakpoint_px: u32) -> bool {
        if !self.toggle_created && is_mobile(viewport_width, breakpoint_px) {
            self.toggle_created = true;
            return true;
        }
        false
    }

    pub fn toggle(&mut self) {
        self.display = self.display.toggled();
    }
}

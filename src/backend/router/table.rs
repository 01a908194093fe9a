//! Static route table.
//!
//! Only metadata lives here. Views are attached by the `Routable` enum in the
//! frontend, so navigation decisions never touch a component.

/// Where signed-out users and unknown paths end up.
pub const FALLBACK_PATH: &str = "/today";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    pub requires_auth: bool,
}

/// Every navigable page, in declaration order.
pub static ROUTES: [RouteDescriptor; 4] = [
    RouteDescriptor {
        path: "/today",
        name: "Today",
        requires_auth: false,
    },
    RouteDescriptor {
        path: "/dashboard",
        name: "Dashboard",
        requires_auth: true,
    },
    RouteDescriptor {
        path: "/settings",
        name: "Settings",
        requires_auth: true,
    },
    RouteDescriptor {
        path: "/profile",
        name: "Profile",
        requires_auth: true,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Matched(&'static RouteDescriptor),
    Redirect(&'static str),
}

/// Maps a location to a route. `/` and anything unmatched go to the fallback.
pub fn resolve(location: &str) -> Resolution {
    let path = location
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    let path = path.trim_end_matches('/');

    if path.is_empty() {
        return Resolution::Redirect(FALLBACK_PATH);
    }

    ROUTES
        .iter()
        .find(|route| route.path == path)
        .map_or(Resolution::Redirect(FALLBACK_PATH), Resolution::Matched)
}

/// Looks up a descriptor by its display name.
#[cfg(test)]
pub fn by_name(name: &str) -> Option<&'static RouteDescriptor> {
    ROUTES.iter().find(|route| route.name == name)
}

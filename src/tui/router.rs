/// The three filter links rendered in the footer, as (label, route) pairs.
pub const FILTER_LINKS: [(&str, &str); 3] =
    [("All", "/"), ("Active", "/active"), ("Complete", "/complete")];

/// Trims a location down to its final path segment, slash included.
/// "/lists/active" becomes "/active"; a location with no slash is kept
/// as-is, and an empty one falls back to the root.
pub fn current_path(location: &str) -> String {
    if location.is_empty() {
        return "/".to_string();
    }
    match location.rfind('/') {
        Some(idx) => location[idx..].to_string(),
        None => location.to_string(),
    }
}

/// Tracks the current route for the whole UI. Link activation swaps the
/// route and records it in the history log; the next draw reads the new
/// value. Back/forward navigation is not specially handled.
#[derive(Debug)]
pub struct Router {
    route: String,
    history: Vec<String>,
}

impl Router {
    pub fn new(location: &str) -> Self {
        Self {
            route: current_path(location),
            history: Vec::new(),
        }
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn handle_link_click(&mut self, route: &str) {
        self.route = route.to_string();
        self.history.push(route.to_string());
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_path_keeps_the_final_segment() {
        assert_eq!(current_path("/active"), "/active");
        assert_eq!(current_path("/lists/complete"), "/complete");
        assert_eq!(current_path("/"), "/");
    }

    #[test]
    fn test_current_path_edge_cases() {
        assert_eq!(current_path(""), "/");
        assert_eq!(current_path("active"), "active");
    }

    #[test]
    fn test_router_initializes_from_the_location() {
        let router = Router::new("/lists/active");

        assert_eq!(router.route(), "/active");
        assert!(router.history().is_empty());
    }

    #[test]
    fn test_handle_link_click_updates_route_and_history() {
        let mut router = Router::new("/");

        router.handle_link_click("/complete");
        assert_eq!(router.route(), "/complete");

        router.handle_link_click("/active");
        assert_eq!(router.route(), "/active");
        assert_eq!(router.history(), ["/complete", "/active"]);
    }
}

//! Page-addressed routes for the GitHub list endpoints.
//!
//! GitHub pages are 1-indexed. The walk over pages lives in
//! [`crate::sync::fetch_all`]; this module only knows how to address one.

use crate::platform::ListEndpoint;

/// Items requested per page. A design constant, not user-configurable.
pub const PAGE_SIZE: u32 = 100;

/// Build the route (path + query) for one page of an endpoint.
#[must_use]
pub fn page_route(endpoint: &ListEndpoint, page: u32) -> String {
    format!("{}?page={}&per_page={}", endpoint.path(), page, PAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_following_route() {
        assert_eq!(
            page_route(&ListEndpoint::Following, 1),
            "/user/following?page=1&per_page=100"
        );
    }

    #[test]
    fn test_org_members_route() {
        assert_eq!(
            page_route(&ListEndpoint::org_members("rust-lang"), 3),
            "/orgs/rust-lang/members?page=3&per_page=100"
        );
    }
}

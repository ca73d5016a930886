//! Route table shared by pages, components, and the router.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const LOGIN_ROUTE: &str = "/login";
pub const DASHBOARD_ROUTE: &str = "/";
pub const PROJECT_BASE_ROUTE: &str = "/project";

/// Query parameter carrying the 1-based dashboard page.
pub const PAGE_QUERY_KEY: &str = "page";

/// Detail route for a single project.
pub fn project_route(id: &str) -> String {
    format!("{PROJECT_BASE_ROUTE}/{id}")
}

/// Dashboard route with the `page` query set.
pub fn dashboard_page_route(page: usize) -> String {
    format!("{DASHBOARD_ROUTE}?{PAGE_QUERY_KEY}={page}")
}

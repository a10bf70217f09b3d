//! The legacy route table of the web application.
//!
//! Identifier constraints are deliberately loose (`.*`) on most resources:
//! identifiers there are keys such as `my:project` or property names with
//! dots, not numeric ids.

#[cfg(test)]
#[path = "legacy_test.rs"]
mod legacy_test;

use crate::table::ResourceAction::{Create, Destroy, Index, Show};
use crate::{RouteError, RouteTable};

/// Constraint accepting any identifier, including `/` and `.`.
pub const ANY_ID: &str = ".*";

/// Controller segment of the default route: a top-level controller or one
/// inside the `api` namespace, so `/api/resources` reaches `api/resources`.
pub const CONTROLLER: &str = "(?:api/)?[^/.?]+";

/// Build the legacy route table.
///
/// # Errors
///
/// Returns [`RouteError`] if a pattern fails to compile.
pub fn legacy_routes() -> Result<RouteTable, RouteError> {
    RouteTable::builder()
        // api namespace
        .resources("api/events", "api/events", &[Index, Show, Create, Destroy], None)
        .resources("api/user_properties", "api/user_properties", &[Index, Show, Create, Destroy], Some(ANY_ID))
        .resources("api/projects", "api/projects", &[Index], Some(ANY_ID))
        .resources("api/favourites", "api/favourites", &[Index, Show, Create, Destroy], Some(ANY_ID))
        // aliases
        .connect("api", "api/java_ws", "redirect_to_ws_listing")
        .connect("api/resoures", "api/resources", "index")
        .resources("api/properties", "api/properties", &crate::ResourceAction::ALL, Some(ANY_ID))
        // page plugins
        .connect_with(
            "plugins/configuration/:page",
            Some("plugins/configuration"),
            Some("index"),
            &[("page", ANY_ID)],
        )
        .connect_with("plugins/home/:page", Some("plugins/home"), Some("index"), &[("page", ANY_ID)])
        .connect_with("plugins/resource/:id", Some("plugins/resource"), Some("index"), &[("id", ANY_ID)])
        // default route, lowest priority
        .connect_with(":controller(/:action(/:id))", None, None, &[("controller", CONTROLLER), ("id", ANY_ID)])
        .build()
}

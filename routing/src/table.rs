//! Ordered route table with first-match dispatch.
//!
//! DESIGN
//! ======
//! Routes are evaluated strictly in declaration order and the first route
//! whose verb and pattern both match wins. More specific routes must
//! therefore be declared before general ones; the table never reorders.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::RouteError;
use crate::pattern::{Pattern, normalize_path};

const CONTROLLER_PARAM: &str = "controller";
const ACTION_PARAM: &str = "action";
const DEFAULT_ACTION: &str = "index";

// =============================================================================
// VERBS
// =============================================================================

/// HTTP verb of an incoming request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Head,
    Post,
    Put,
    Delete,
}

impl Verb {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Whether a request with this verb satisfies a route declared for
    /// `declared`. `HEAD` requests are served by `GET` routes.
    fn satisfies(self, declared: Verb) -> bool {
        self == declared || (self == Self::Head && declared == Self::Get)
    }
}

impl FromStr for Verb {
    type Err = RouteError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "HEAD" => Ok(Self::Head),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            _ => Err(RouteError::UnknownVerb(raw.to_owned())),
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// RESOURCES
// =============================================================================

/// Standard actions generated for a resource collection.
///
/// Declaration order follows the legacy router: collection actions, then
/// `new`, then member actions with `edit` before `show` so that
/// `<id>/edit` is not swallowed by a permissive identifier constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceAction {
    Index,
    Create,
    New,
    Edit,
    Show,
    Update,
    Destroy,
}

impl ResourceAction {
    pub const ALL: [Self; 7] =
        [Self::Index, Self::Create, Self::New, Self::Edit, Self::Show, Self::Update, Self::Destroy];

    fn name(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Create => "create",
            Self::New => "new",
            Self::Edit => "edit",
            Self::Show => "show",
            Self::Update => "update",
            Self::Destroy => "destroy",
        }
    }

    fn verb(self) -> Verb {
        match self {
            Self::Index | Self::New | Self::Edit | Self::Show => Verb::Get,
            Self::Create => Verb::Post,
            Self::Update => Verb::Put,
            Self::Destroy => Verb::Delete,
        }
    }

    fn pattern(self, path: &str) -> String {
        match self {
            Self::Index | Self::Create => format!("{path}(.:format)"),
            Self::New => format!("{path}/new(.:format)"),
            Self::Edit => format!("{path}/:id/edit(.:format)"),
            Self::Show | Self::Update | Self::Destroy => format!("{path}/:id(.:format)"),
        }
    }

    fn has_member_id(self) -> bool {
        matches!(self, Self::Edit | Self::Show | Self::Update | Self::Destroy)
    }
}

// =============================================================================
// ROUTES
// =============================================================================

/// A compiled route.
#[derive(Clone, Debug)]
pub struct Route {
    verb: Option<Verb>,
    pattern: Pattern,
    controller: Option<String>,
    action: Option<String>,
}

impl Route {
    /// Verb restriction, `None` when the route accepts any verb.
    #[must_use]
    pub fn verb(&self) -> Option<Verb> {
        self.verb
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.source()
    }

    /// `controller#action` target, with `:controller`/`:action` standing in
    /// for values taken from the path.
    #[must_use]
    pub fn target(&self) -> String {
        let controller = self.controller.as_deref().unwrap_or(":controller");
        let action = self.action.as_deref().unwrap_or(":action");
        format!("{controller}#{action}")
    }

    fn dispatch(&self, verb: Verb, path: &str) -> Option<Dispatch> {
        if let Some(declared) = self.verb {
            if !verb.satisfies(declared) {
                return None;
            }
        }
        let mut params = self.pattern.captures(path)?;
        let controller = match &self.controller {
            Some(controller) => controller.clone(),
            None => params.remove(CONTROLLER_PARAM)?,
        };
        let action = match &self.action {
            Some(action) => action.clone(),
            None => params.remove(ACTION_PARAM).unwrap_or_else(|| DEFAULT_ACTION.to_owned()),
        };
        Some(Dispatch { pattern: self.pattern.source().to_owned(), controller, action, params })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = self.verb.map_or("ANY", Verb::as_str);
        write!(f, "{verb:<7} {:<48} {}", self.pattern.source(), self.target())
    }
}

/// Result of recognizing a request path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dispatch {
    /// Pattern of the route that matched.
    pub pattern: String,
    pub controller: String,
    pub action: String,
    /// Path parameters other than `controller` and `action`.
    pub params: BTreeMap<String, String>,
}

// =============================================================================
// TABLE
// =============================================================================

/// Ordered, immutable list of compiled routes.
#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    #[must_use]
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Find the first route matching `verb` and `path`.
    ///
    /// `path` may carry leading/trailing slashes and a query string; both are
    /// ignored.
    #[must_use]
    pub fn recognize(&self, verb: Verb, path: &str) -> Option<Dispatch> {
        let path = normalize_path(path);
        let found = self.routes.iter().find_map(|route| route.dispatch(verb, path));
        match &found {
            Some(dispatch) => tracing::debug!(
                %verb,
                path,
                pattern = %dispatch.pattern,
                controller = %dispatch.controller,
                action = %dispatch.action,
                "route recognized"
            ),
            None => tracing::debug!(%verb, path, "no route matched"),
        }
        found
    }
}

struct RouteSpec {
    verb: Option<Verb>,
    pattern: String,
    controller: Option<String>,
    action: Option<String>,
    constraints: BTreeMap<String, String>,
}

/// Declarative builder mirroring the legacy routing DSL.
#[derive(Default)]
pub struct RouteTableBuilder {
    specs: Vec<RouteSpec>,
}

impl RouteTableBuilder {
    /// Connect `pattern` to a fixed `controller#action` for any verb.
    #[must_use]
    pub fn connect(self, pattern: &str, controller: &str, action: &str) -> Self {
        self.connect_with(pattern, Some(controller), Some(action), &[])
    }

    /// Connect `pattern` for any verb. A missing controller or action is
    /// taken from the `:controller`/`:action` parameters of the path.
    #[must_use]
    pub fn connect_with(
        mut self,
        pattern: &str,
        controller: Option<&str>,
        action: Option<&str>,
        constraints: &[(&str, &str)],
    ) -> Self {
        self.specs.push(RouteSpec {
            verb: None,
            pattern: pattern.to_owned(),
            controller: controller.map(str::to_owned),
            action: action.map(str::to_owned),
            constraints: to_map(constraints),
        });
        self
    }

    /// Declare a resource collection at `path`, handled by `controller`.
    ///
    /// Only the listed `actions` are generated, always in
    /// [`ResourceAction::ALL`] order. `id_constraint` overrides the default
    /// identifier segment for member routes.
    #[must_use]
    pub fn resources(
        mut self,
        path: &str,
        controller: &str,
        actions: &[ResourceAction],
        id_constraint: Option<&str>,
    ) -> Self {
        for action in ResourceAction::ALL.into_iter().filter(|a| actions.contains(a)) {
            let constraints = match id_constraint {
                Some(constraint) if action.has_member_id() => to_map(&[("id", constraint)]),
                _ => BTreeMap::new(),
            };
            self.specs.push(RouteSpec {
                verb: Some(action.verb()),
                pattern: action.pattern(path),
                controller: Some(controller.to_owned()),
                action: Some(action.name().to_owned()),
                constraints,
            });
        }
        self
    }

    /// Compile every declared route.
    ///
    /// # Errors
    ///
    /// Returns the first [`RouteError`] raised while compiling a pattern.
    pub fn build(self) -> Result<RouteTable, RouteError> {
        let routes = self
            .specs
            .into_iter()
            .map(|spec| {
                let pattern = Pattern::compile(&spec.pattern, &spec.constraints)?;
                if spec.controller.is_none() && !pattern.params().iter().any(|p| p == CONTROLLER_PARAM) {
                    return Err(RouteError::MissingController { pattern: spec.pattern });
                }
                Ok(Route { verb: spec.verb, pattern, controller: spec.controller, action: spec.action })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RouteTable { routes })
    }
}

fn to_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

//! Fragment route table
//!
//! Declarative mapping of fragment paths to typed routes, matched exactly
//! segment by segment. Replaces the original string-prefix checks, whose
//! resolution depended on evaluation order.

use crate::session::AuthPhase;

/// Application routes with typed parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Signup,
    Drops,
    DropDetail(i64),
    Orders,
    OrderDetail(i64),
    AdminOrders,
}

/// Access level a route requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Public,
    Authenticated,
    /// UX convenience only; the server re-enforces the role on every
    /// admin endpoint
    Admin,
}

/// What the view layer should do for a given fragment and session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Show(Route),
    /// Identity check still pending; render the loading state
    Loading,
    Redirect(Route),
}

enum Seg {
    Lit(&'static str),
    ParamI64,
}

struct RouteDef {
    pattern: &'static [Seg],
    build: fn(&[i64]) -> Route,
    guard: Guard,
}

/// The route table. Patterns are matched exactly; `ParamI64` segments must
/// parse as non-negative integers or the pattern does not match at all.
static ROUTES: &[RouteDef] = &[
    RouteDef {
        pattern: &[],
        build: |_| Route::Home,
        guard: Guard::Authenticated,
    },
    RouteDef {
        pattern: &[Seg::Lit("login")],
        build: |_| Route::Login,
        guard: Guard::Public,
    },
    RouteDef {
        pattern: &[Seg::Lit("signup")],
        build: |_| Route::Signup,
        guard: Guard::Public,
    },
    RouteDef {
        pattern: &[Seg::Lit("drops")],
        build: |_| Route::Drops,
        guard: Guard::Authenticated,
    },
    RouteDef {
        pattern: &[Seg::Lit("drops"), Seg::ParamI64],
        build: |params| Route::DropDetail(params[0]),
        guard: Guard::Authenticated,
    },
    RouteDef {
        pattern: &[Seg::Lit("orders")],
        build: |_| Route::Orders,
        guard: Guard::Authenticated,
    },
    RouteDef {
        pattern: &[Seg::Lit("orders"), Seg::ParamI64],
        build: |params| Route::OrderDetail(params[0]),
        guard: Guard::Authenticated,
    },
    RouteDef {
        pattern: &[Seg::Lit("admin"), Seg::Lit("orders")],
        build: |_| Route::AdminOrders,
        guard: Guard::Admin,
    },
];

impl Route {
    /// Fragment path for this route
    pub fn path(self) -> String {
        match self {
            Route::Home => "#/".to_string(),
            Route::Login => "#/login".to_string(),
            Route::Signup => "#/signup".to_string(),
            Route::Drops => "#/drops".to_string(),
            Route::DropDetail(id) => format!("#/drops/{id}"),
            Route::Orders => "#/orders".to_string(),
            Route::OrderDetail(id) => format!("#/orders/{id}"),
            Route::AdminOrders => "#/admin/orders".to_string(),
        }
    }
}

/// Parse a fragment ("#/drops/3" or "/drops/3") against the route table.
pub fn parse(fragment: &str) -> Option<Route> {
    parse_with_guard(fragment).map(|(route, _)| route)
}

fn parse_with_guard(fragment: &str) -> Option<(Route, Guard)> {
    let path = fragment.trim_start_matches('#');
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    'routes: for def in ROUTES {
        if def.pattern.len() != segments.len() {
            continue;
        }
        let mut params = Vec::new();
        for (seg, actual) in def.pattern.iter().zip(&segments) {
            match seg {
                Seg::Lit(lit) => {
                    if *actual != *lit {
                        continue 'routes;
                    }
                }
                Seg::ParamI64 => match actual.parse::<i64>() {
                    Ok(id) if id >= 0 => params.push(id),
                    _ => continue 'routes,
                },
            }
        }
        return Some(((def.build)(&params), def.guard));
    }
    None
}

/// Resolve a fragment against the current session phase.
///
/// Unknown fragments fall back to the catalog, matching the original client.
pub fn resolve(fragment: &str, phase: &AuthPhase) -> Resolution {
    let (route, guard) =
        parse_with_guard(fragment).unwrap_or((Route::Drops, Guard::Authenticated));
    let route = if route == Route::Home { Route::Drops } else { route };

    match guard {
        Guard::Public => Resolution::Show(route),
        Guard::Authenticated => match phase {
            AuthPhase::Unknown => Resolution::Loading,
            AuthPhase::Anonymous => Resolution::Redirect(Route::Login),
            AuthPhase::Authenticated(_) => Resolution::Show(route),
        },
        Guard::Admin => match phase {
            AuthPhase::Unknown => Resolution::Loading,
            AuthPhase::Anonymous => Resolution::Redirect(Route::Login),
            AuthPhase::Authenticated(user) if user.is_admin() => Resolution::Show(route),
            AuthPhase::Authenticated(_) => Resolution::Redirect(Route::Drops),
        },
    }
}

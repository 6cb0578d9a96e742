use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::use_session;
use crate::pages::{DashboardPage, LoginPage, ProductsPage, RegisterPage};

#[derive(Routable, PartialEq, Clone, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[at("/products")]
    Products,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Clase de acceso de cada ruta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Solo con sesión; los anónimos rebotan a /login.
    Private,
    /// Solo sin sesión; los autenticados rebotan a /dashboard.
    PublicOnly,
    /// Nunca renderiza: redirige según el estado actual.
    RedirectOnly,
}

pub fn access_class(route: &Route) -> Access {
    match route {
        Route::Dashboard | Route::Products => Access::Private,
        Route::Login | Route::Register => Access::PublicOnly,
        Route::Home | Route::NotFound => Access::RedirectOnly,
    }
}

/// Adónde debe rebotar una ruta dado el estado de sesión.
/// `None` significa que la ruta se admite tal cual.
pub fn guard_redirect(route: &Route, authenticated: bool) -> Option<Route> {
    match access_class(route) {
        Access::Private if !authenticated => Some(Route::Login),
        Access::PublicOnly if authenticated => Some(Route::Dashboard),
        Access::RedirectOnly => Some(if authenticated {
            Route::Dashboard
        } else {
            Route::Login
        }),
        _ => None,
    }
}

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    pub route: Route,
    pub children: Children,
}

#[function_component(Guard)]
pub fn guard(props: &GuardProps) -> Html {
    let session = use_session();

    if let Some(target) = guard_redirect(&props.route, session.is_authenticated()) {
        return html! { <Redirect<Route> to={target} /> };
    }

    html! { <>{ props.children.clone() }</> }
}

pub fn switch(route: Route) -> Html {
    let page = match route {
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Products => html! { <ProductsPage /> },
        // Home y NotFound solo redirigen; el Guard decide el destino
        Route::Home | Route::NotFound => html! {},
    };

    html! { <Guard route={route}>{ page }</Guard> }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIVATE_ROUTES: [Route; 2] = [Route::Dashboard, Route::Products];
    const PUBLIC_ONLY_ROUTES: [Route; 2] = [Route::Login, Route::Register];

    #[test]
    fn anonymous_is_redirected_from_every_private_route() {
        for route in PRIVATE_ROUTES {
            assert_eq!(guard_redirect(&route, false), Some(Route::Login));
        }
    }

    #[test]
    fn authenticated_is_admitted_to_private_routes() {
        for route in PRIVATE_ROUTES {
            assert_eq!(guard_redirect(&route, true), None);
        }
    }

    #[test]
    fn authenticated_is_bounced_away_from_login_and_register() {
        for route in PUBLIC_ONLY_ROUTES {
            assert_eq!(guard_redirect(&route, true), Some(Route::Dashboard));
        }
    }

    #[test]
    fn anonymous_reaches_login_and_register() {
        for route in PUBLIC_ONLY_ROUTES {
            assert_eq!(guard_redirect(&route, false), None);
        }
    }

    #[test]
    fn root_redirects_by_session_state() {
        assert_eq!(guard_redirect(&Route::Home, true), Some(Route::Dashboard));
        assert_eq!(guard_redirect(&Route::Home, false), Some(Route::Login));
    }

    #[test]
    fn unknown_paths_behave_like_root() {
        assert_eq!(guard_redirect(&Route::NotFound, true), Some(Route::Dashboard));
        assert_eq!(guard_redirect(&Route::NotFound, false), Some(Route::Login));
    }
}

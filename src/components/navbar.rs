use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::use_session;
use crate::router::Route;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("Navbar rendered outside a router");

    let on_logout = {
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            session.logout();
            navigator.push(&Route::Login);
        })
    };

    html! {
        <nav class="navbar">
            <div class="navbar-inner">
                <Link<Route> to={Route::Dashboard} classes="navbar-brand">
                    { "EmmiDev" }
                </Link<Route>>

                <div class="navbar-links">
                    <Link<Route> to={Route::Dashboard} classes="navbar-link">
                        { "Dashboard" }
                    </Link<Route>>
                    <Link<Route> to={Route::Products} classes="navbar-link">
                        { "Products" }
                    </Link<Route>>
                    <button class="btn-logout" onclick={on_logout}>
                        { "Logout" }
                    </button>
                </div>
            </div>
        </nav>
    }
}

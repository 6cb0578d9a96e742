use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Navbar;
use crate::context::{use_session, SessionProvider};
use crate::router::{switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <BrowserRouter>
                <Shell />
            </BrowserRouter>
        </SessionProvider>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let session = use_session();

    html! {
        <div class="app">
            if session.is_authenticated() {
                <Navbar />
            }
            <Switch<Route> render={switch} />
        </div>
    }
}

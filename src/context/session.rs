// ============================================================================
// SESSION STATE - la presencia del token es la única fuente de verdad
// ============================================================================
// Inyectable vía ContextProvider en lugar de estado global, para que el
// guard del router sea testeable de forma aislada. La presencia del token
// se lee UNA vez al montar el provider; un token invalidado del lado
// servidor solo se descubre cuando falla una llamada autenticada.
// ============================================================================

use yew::prelude::*;

use crate::utils::storage::{load_raw, remove_from_storage, save_raw};
use crate::utils::STORAGE_KEY_ACCESS_TOKEN;

#[derive(Clone, PartialEq)]
pub struct Session {
    authenticated: bool,
    set_authenticated: Callback<bool>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Login exitoso: persistir el token y pasar a autenticado.
    pub fn login(&self, token: &str) {
        if let Err(e) = save_raw(STORAGE_KEY_ACCESS_TOKEN, token) {
            log::error!("❌ Error guardando token: {}", e);
        }
        self.set_authenticated.emit(true);
    }

    /// Logout: borrar el token y volver a anónimo.
    pub fn logout(&self) {
        let _ = remove_from_storage(STORAGE_KEY_ACCESS_TOKEN);
        log::info!("👋 Logout");
        self.set_authenticated.emit(false);
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    // Boot check: una sola lectura de storage al arrancar
    let authenticated = use_state(|| {
        let logged_in = load_raw(STORAGE_KEY_ACCESS_TOKEN).is_some();
        if logged_in {
            log::info!("✅ Token encontrado, sesión restaurada");
        }
        logged_in
    });

    let set_authenticated = {
        let authenticated = authenticated.clone();
        Callback::from(move |value: bool| authenticated.set(value))
    };

    let session = Session {
        authenticated: *authenticated,
        set_authenticated,
    };

    html! {
        <ContextProvider<Session> context={session}>
            { props.children.clone() }
        </ContextProvider<Session>>
    }
}

#[hook]
pub fn use_session() -> Session {
    use_context::<Session>().expect("SessionProvider missing above this component")
}

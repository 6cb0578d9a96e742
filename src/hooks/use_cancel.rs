use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

/// Token de cancelación para llamadas en vuelo. Una página que se
/// desmonta cancela su token; la tarea async comprueba el token después
/// de cada await antes de tocar el estado, así el resultado tardío se
/// descarta de forma explícita en vez de por accidente.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

impl PartialEq for CancelToken {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cancelled, &other.cancelled)
    }
}

/// Crea un token ligado al ciclo de vida del componente: se cancela
/// automáticamente al desmontar.
#[hook]
pub fn use_cancel_token() -> CancelToken {
    let token = (*use_memo((), |_| CancelToken::new())).clone();

    {
        let token = token.clone();
        use_effect_with((), move |_| move || token.cancel());
    }

    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_live_and_stays_cancelled() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());

        token.cancel();
        assert!(token.is_cancelled());

        // cancelar dos veces es inocuo
        token.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn clones_share_the_same_flag() {
        let token = CancelToken::new();
        let clone = token.clone();

        token.cancel();
        assert!(clone.is_cancelled());
        assert_eq!(token, clone);
    }
}

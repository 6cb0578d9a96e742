// Notificador de toasts: mensajes efímeros que se auto-destruyen cuando
// expira su vida útil o al descartarlos explícitamente. Se muestran en
// orden de inserción; sin deduplicación ni límite de cola.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::utils::DEFAULT_TOAST_LIFETIME_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    Success,
    Error,
    Info,
}

impl ToastSeverity {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastSeverity::Success => "toast-success",
            ToastSeverity::Error => "toast-error",
            ToastSeverity::Info => "toast-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastMessage {
    pub id: u32,
    pub text: String,
    pub severity: ToastSeverity,
    pub lifetime_ms: u32,
}

#[derive(Debug, PartialEq, Default)]
pub struct ToastList {
    pub items: Vec<ToastMessage>,
}

pub enum ToastAction {
    Push(ToastMessage),
    Dismiss(u32),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Push(toast) => {
                let mut items = self.items.clone();
                items.push(toast);
                Rc::new(ToastList { items })
            }
            // Descartar un id ya expirado no hace nada
            ToastAction::Dismiss(id) => Rc::new(ToastList {
                items: self.items.iter().filter(|t| t.id != id).cloned().collect(),
            }),
        }
    }
}

#[derive(Clone)]
pub struct ToastHandle {
    list: UseReducerHandle<ToastList>,
    next_id: Rc<Cell<u32>>,
}

impl PartialEq for ToastHandle {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl ToastHandle {
    pub fn list(&self) -> Vec<ToastMessage> {
        self.list.items.clone()
    }

    pub fn notify(&self, text: impl Into<String>, severity: ToastSeverity) -> u32 {
        self.notify_with_lifetime(text, severity, DEFAULT_TOAST_LIFETIME_MS)
    }

    pub fn notify_with_lifetime(
        &self,
        text: impl Into<String>,
        severity: ToastSeverity,
        lifetime_ms: u32,
    ) -> u32 {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));

        self.list.dispatch(ToastAction::Push(ToastMessage {
            id,
            text: text.into(),
            severity,
            lifetime_ms,
        }));

        // Auto-expiración pasada la vida útil
        let list = self.list.clone();
        Timeout::new(lifetime_ms, move || {
            list.dispatch(ToastAction::Dismiss(id));
        })
        .forget();

        id
    }

    pub fn dismiss(&self, id: u32) {
        self.list.dispatch(ToastAction::Dismiss(id));
    }

    pub fn dismiss_callback(&self) -> Callback<u32> {
        let list = self.list.clone();
        Callback::from(move |id: u32| list.dispatch(ToastAction::Dismiss(id)))
    }
}

#[hook]
pub fn use_toasts() -> ToastHandle {
    let list = use_reducer(ToastList::default);
    let next_id = (*use_memo((), |_| Rc::new(Cell::new(0u32)))).clone();

    ToastHandle { list, next_id }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u32, text: &str) -> ToastMessage {
        ToastMessage {
            id,
            text: text.to_string(),
            severity: ToastSeverity::Info,
            lifetime_ms: DEFAULT_TOAST_LIFETIME_MS,
        }
    }

    fn push(list: Rc<ToastList>, t: ToastMessage) -> Rc<ToastList> {
        list.reduce(ToastAction::Push(t))
    }

    #[test]
    fn preserves_insertion_order() {
        let list = Rc::new(ToastList::default());
        let list = push(list, toast(0, "first"));
        let list = push(list, toast(1, "second"));
        let list = push(list, toast(2, "third"));

        let texts: Vec<_> = list.items.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn dismiss_removes_only_the_given_id() {
        let list = Rc::new(ToastList::default());
        let list = push(list, toast(0, "keep"));
        let list = push(list, toast(1, "drop"));
        let list = push(list, toast(2, "keep too"));

        let list = list.reduce(ToastAction::Dismiss(1));
        let ids: Vec<_> = list.items.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[test]
    fn dismissing_a_stale_id_is_a_no_op() {
        let list = Rc::new(ToastList::default());
        let list = push(list, toast(0, "only"));

        let list = list.reduce(ToastAction::Dismiss(99));
        assert_eq!(list.items.len(), 1);

        // la doble expiración (timeout + dismiss manual) tampoco rompe nada
        let list = list.reduce(ToastAction::Dismiss(0));
        let list = list.reduce(ToastAction::Dismiss(0));
        assert!(list.items.is_empty());
    }

    #[test]
    fn coexisting_toasts_are_not_deduplicated() {
        let list = Rc::new(ToastList::default());
        let list = push(list, toast(0, "same"));
        let list = push(list, toast(1, "same"));
        assert_eq!(list.items.len(), 2);
    }
}

use yew::prelude::*;

use crate::hooks::ToastMessage;

#[derive(Properties, PartialEq)]
pub struct ToastContainerProps {
    pub toasts: Vec<ToastMessage>,
    pub on_dismiss: Callback<u32>,
}

/// Renderiza los toasts vivos en orden de inserción, cada uno con su
/// botón de descarte manual.
#[function_component(ToastContainer)]
pub fn toast_container(props: &ToastContainerProps) -> Html {
    html! {
        <div class="toast-container">
            {
                for props.toasts.iter().map(|toast| {
                    let id = toast.id;
                    let on_click = props.on_dismiss.reform(move |_: MouseEvent| id);
                    html! {
                        <div key={toast.id} class={classes!("toast", toast.severity.css_class())}>
                            <span class="toast-text">{ &toast.text }</span>
                            <button class="toast-dismiss" onclick={on_click}>{ "×" }</button>
                        </div>
                    }
                })
            }
        </div>
    }
}

// Página de productos: el caso CRUD completo. Máquina de estados por
// formulario: idle → submitting → (éxito → idle + lista refrescada) |
// (fallo → idle + toast de error). Tras cada mutación se re-obtiene la
// lista completa del servidor en lugar de parchearla localmente: lo
// mostrado siempre refleja la verdad del servidor.

use web_sys::{window, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::ToastContainer;
use crate::config::CONFIG;
use crate::hooks::{use_cancel_token, use_toasts, CancelToken, ToastHandle, ToastSeverity};
use crate::models::{Category, Product, ProductUpdate};
use crate::services::ApiClient;
use crate::utils::validation::validate_product_form;

/// Borrador local del formulario; nunca se comparte entre páginas.
#[derive(Clone, PartialEq, Default)]
struct FormDraft {
    name: String,
    price: String,
    category: String,
}

impl FormDraft {
    fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            category: product.category.as_str().to_string(),
        }
    }
}

async fn refresh_list(
    products: UseStateHandle<Vec<Product>>,
    toasts: ToastHandle,
    cancel: CancelToken,
) {
    match ApiClient::new()
        .list_products(0, CONFIG.products_page_limit)
        .await
    {
        Ok(list) => {
            if cancel.is_cancelled() {
                return;
            }
            log::info!("📦 Productos obtenidos: {}", list.len());
            products.set(list);
        }
        Err(e) => {
            if cancel.is_cancelled() {
                return;
            }
            log::error!("❌ Error obteniendo productos: {}", e);
            toasts.notify("Failed to fetch products", ToastSeverity::Error);
        }
    }
}

#[function_component(ProductsPage)]
pub fn products_page() -> Html {
    let toasts = use_toasts();
    let cancel = use_cancel_token();

    let products = use_state(Vec::<Product>::new);
    let loading = use_state(|| true);
    let submitting = use_state(|| false);
    let show_form = use_state(|| false);
    let editing_id = use_state(|| None::<String>);
    let draft = use_state(FormDraft::default);

    // Fetch inicial al montar
    {
        let toasts = toasts.clone();
        let cancel = cancel.clone();
        let products = products.clone();
        let loading = loading.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                refresh_list(products, toasts, cancel.clone()).await;
                if !cancel.is_cancelled() {
                    loading.set(false);
                }
            });
            || ()
        });
    }

    // Botón de cabecera: alterna el formulario y limpia el borrador
    let on_toggle_form = {
        let show_form = show_form.clone();
        let editing_id = editing_id.clone();
        let draft = draft.clone();

        Callback::from(move |_: MouseEvent| {
            show_form.set(!*show_form);
            editing_id.set(None);
            draft.set(FormDraft::default());
        })
    };

    let on_name_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.name = input.value();
            draft.set(next);
        })
    };

    let on_price_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.price = input.value();
            draft.set(next);
        })
    };

    let on_category_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.category = select.value();
            draft.set(next);
        })
    };

    // Edit mode: pre-poblar el borrador desde el producto seleccionado
    let on_edit = {
        let show_form = show_form.clone();
        let editing_id = editing_id.clone();
        let draft = draft.clone();

        Callback::from(move |product: Product| {
            draft.set(FormDraft::from_product(&product));
            editing_id.set(Some(product.id));
            show_form.set(true);
        })
    };

    let on_submit = {
        let toasts = toasts.clone();
        let cancel = cancel.clone();
        let products = products.clone();
        let submitting = submitting.clone();
        let show_form = show_form.clone();
        let editing_id = editing_id.clone();
        let draft = draft.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *submitting {
                return;
            }

            // Chequeos básicos antes de enviar; el servidor valida el resto
            let payload = match validate_product_form(&draft.name, &draft.price, &draft.category) {
                Ok(payload) => payload,
                Err(msg) => {
                    toasts.notify(msg, ToastSeverity::Error);
                    return;
                }
            };

            submitting.set(true);

            let toasts = toasts.clone();
            let cancel = cancel.clone();
            let products = products.clone();
            let submitting = submitting.clone();
            let show_form = show_form.clone();
            let editing_id = editing_id.clone();
            let draft = draft.clone();
            let edit_target = (*editing_id).clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = match &edit_target {
                    Some(id) => ApiClient::new()
                        .update_product(id, &ProductUpdate::from(payload))
                        .await
                        .map(|_| "Product updated successfully"),
                    None => ApiClient::new()
                        .create_product(&payload)
                        .await
                        .map(|_| "Product created successfully"),
                };

                if cancel.is_cancelled() {
                    return;
                }

                match result {
                    Ok(message) => {
                        toasts.notify(message, ToastSeverity::Success);
                        draft.set(FormDraft::default());
                        editing_id.set(None);
                        show_form.set(false);
                        refresh_list(products, toasts.clone(), cancel.clone()).await;
                    }
                    Err(e) => {
                        log::error!("❌ Error guardando producto: {}", e);
                        toasts.notify(e.to_string(), ToastSeverity::Error);
                    }
                }

                if !cancel.is_cancelled() {
                    submitting.set(false);
                }
            });
        })
    };

    let on_delete = {
        let toasts = toasts.clone();
        let cancel = cancel.clone();
        let products = products.clone();

        Callback::from(move |id: String| {
            // Confirmación bloqueante antes de borrar
            let confirmed = window()
                .and_then(|w| {
                    w.confirm_with_message("Are you sure you want to delete this product?")
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let toasts = toasts.clone();
            let cancel = cancel.clone();
            let products = products.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().delete_product(&id).await {
                    Ok(()) => {
                        if cancel.is_cancelled() {
                            return;
                        }
                        toasts.notify("Product deleted successfully", ToastSeverity::Success);
                    }
                    Err(e) => {
                        if cancel.is_cancelled() {
                            return;
                        }
                        log::error!("❌ Error eliminando producto {}: {}", id, e);
                        toasts.notify(e.to_string(), ToastSeverity::Error);
                    }
                }
                // Re-fetch también tras un fallo (p.ej. id obsoleto): la
                // lista mostrada debe seguir a la del servidor
                refresh_list(products, toasts, cancel).await;
            });
        })
    };

    let is_editing = editing_id.is_some();

    let toggle_label = if *show_form && !is_editing {
        "Cancel"
    } else {
        "Add Product"
    };

    html! {
        <div class="page page-products">
            <div class="page-header">
                <h1>{ "Products" }</h1>
                <button class="btn btn-primary" onclick={on_toggle_form}>
                    { toggle_label }
                </button>
            </div>

            if *show_form {
                <div class="card form-card">
                    <div class="card-header">
                        <h2>{ if is_editing { "Edit Product" } else { "Create New Product" } }</h2>
                    </div>

                    <form class="product-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="name">{ "Product Name" }</label>
                            <input
                                type="text"
                                id="name"
                                name="name"
                                placeholder="Product name"
                                value={draft.name.clone()}
                                oninput={on_name_input}
                                required=true
                            />
                        </div>

                        <div class="form-row">
                            <div class="form-group">
                                <label for="price">{ "Price" }</label>
                                <input
                                    type="number"
                                    id="price"
                                    name="price"
                                    placeholder="0.00"
                                    step="0.01"
                                    min="0"
                                    value={draft.price.clone()}
                                    oninput={on_price_input}
                                    required=true
                                />
                            </div>

                            <div class="form-group">
                                <label for="category">{ "Category" }</label>
                                <select
                                    id="category"
                                    name="category"
                                    value={draft.category.clone()}
                                    onchange={on_category_change}
                                    required=true
                                >
                                    <option value="" selected={draft.category.is_empty()}>
                                        { "Select category" }
                                    </option>
                                    {
                                        for Category::ALL.iter().map(|category| html! {
                                            <option
                                                value={category.as_str()}
                                                selected={draft.category == category.as_str()}
                                            >
                                                { category.as_str() }
                                            </option>
                                        })
                                    }
                                </select>
                            </div>
                        </div>

                        <button type="submit" class="btn btn-primary" disabled={*submitting}>
                            {
                                if *submitting {
                                    "Saving..."
                                } else if is_editing {
                                    "Update Product"
                                } else {
                                    "Create Product"
                                }
                            }
                        </button>
                    </form>
                </div>
            }

            {
                if *loading && !*show_form {
                    html! { <p class="empty-state">{ "Loading products..." }</p> }
                } else if products.is_empty() {
                    html! {
                        <p class="empty-state">{ "No products yet. Create one to get started!" }</p>
                    }
                } else {
                    html! {
                        <div class="products-grid">
                            {
                                for products.iter().map(|product| {
                                    let on_edit = {
                                        let on_edit = on_edit.clone();
                                        let product = product.clone();
                                        Callback::from(move |_: MouseEvent| on_edit.emit(product.clone()))
                                    };
                                    let on_delete = {
                                        let on_delete = on_delete.clone();
                                        let id = product.id.clone();
                                        Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                                    };

                                    html! {
                                        <div key={product.id.clone()} class="card product-card">
                                            <div class="card-header">
                                                <h3>{ &product.name }</h3>
                                            </div>
                                            <div class="product-body">
                                                <div class="product-category">
                                                    { format!("Category: {}", product.category) }
                                                </div>
                                                <div class="product-price">
                                                    { format!("${:.2}", product.price) }
                                                </div>
                                            </div>
                                            <div class="card-footer">
                                                <button class="btn btn-secondary btn-sm" onclick={on_edit}>
                                                    { "Edit" }
                                                </button>
                                                <button class="btn btn-destructive btn-sm" onclick={on_delete}>
                                                    { "Delete" }
                                                </button>
                                            </div>
                                        </div>
                                    }
                                })
                            }
                        </div>
                    }
                }
            }

            <ToastContainer toasts={toasts.list()} on_dismiss={toasts.dismiss_callback()} />
        </div>
    }
}

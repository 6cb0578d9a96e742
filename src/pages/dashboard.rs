use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::ToastContainer;
use crate::config::CONFIG;
use crate::hooks::{use_cancel_token, use_toasts, ToastSeverity};
use crate::models::{Product, ProductStats};
use crate::router::Route;
use crate::services::ApiClient;

/// Agregación de solo lectura sobre los últimos N productos. No muta nada
/// y se recalcula con cada fetch exitoso.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let toasts = use_toasts();
    let cancel = use_cancel_token();

    let products = use_state(Vec::<Product>::new);
    let loading = use_state(|| true);

    {
        let toasts = toasts.clone();
        let cancel = cancel.clone();
        let products = products.clone();
        let loading = loading.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new()
                    .list_products(0, CONFIG.dashboard_recent_limit)
                    .await
                {
                    Ok(list) => {
                        if cancel.is_cancelled() {
                            return;
                        }
                        log::info!("📦 Productos recientes: {}", list.len());
                        products.set(list);
                    }
                    Err(e) => {
                        if cancel.is_cancelled() {
                            return;
                        }
                        log::error!("❌ Error cargando dashboard: {}", e);
                        toasts.notify("Failed to load dashboard data", ToastSeverity::Error);
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let stats = ProductStats::compute(&*products);

    html! {
        <div class="page page-dashboard">
            <h1>{ "Dashboard" }</h1>

            <div class="stats-grid">
                <div class="card stat-card">
                    <div class="stat-value">{ stats.total }</div>
                    <div class="stat-label">{ "Total Products" }</div>
                </div>
                <div class="card stat-card">
                    <div class="stat-value">{ format!("${:.2}", stats.total_value) }</div>
                    <div class="stat-label">{ "Total Value" }</div>
                </div>
                <div class="card stat-card">
                    <div class="stat-value">{ format!("${:.2}", stats.average_price) }</div>
                    <div class="stat-label">{ "Average Price" }</div>
                </div>
            </div>

            <div class="card">
                <div class="card-header">
                    <h2>{ "Recent Products" }</h2>
                    <p class="card-description">
                        { format!("Your {} most recently added products", CONFIG.dashboard_recent_limit) }
                    </p>
                </div>

                {
                    if *loading {
                        html! { <p class="empty-state">{ "Loading..." }</p> }
                    } else if products.is_empty() {
                        html! {
                            <div class="empty-state">
                                <p>{ "No products yet" }</p>
                                <Link<Route> to={Route::Products} classes="btn btn-primary">
                                    { "Create Your First Product" }
                                </Link<Route>>
                            </div>
                        }
                    } else {
                        html! {
                            <table class="products-table">
                                <thead>
                                    <tr>
                                        <th>{ "Name" }</th>
                                        <th>{ "Category" }</th>
                                        <th>{ "Price" }</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {
                                        for products.iter().map(|product| html! {
                                            <tr key={product.id.clone()}>
                                                <td>{ &product.name }</td>
                                                <td>{ product.category.as_str() }</td>
                                                <td>{ format!("${:.2}", product.price) }</td>
                                            </tr>
                                        })
                                    }
                                </tbody>
                            </table>
                        }
                    }
                }

                <div class="card-footer">
                    <Link<Route> to={Route::Products} classes="btn btn-secondary">
                        { "View All Products" }
                    </Link<Route>>
                </div>
            </div>

            <ToastContainer toasts={toasts.list()} on_dismiss={toasts.dismiss_callback()} />
        </div>
    }
}

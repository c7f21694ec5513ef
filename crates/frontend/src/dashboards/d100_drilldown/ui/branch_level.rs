use contracts::dashboards::d100_drilldown::ProductCard;
use leptos::prelude::*;

use crate::dashboards::d100_drilldown::state::BranchSlot;
use crate::shared::components::ProgressIndicator;
use crate::shared::format::{format_money, format_thousands};

/// Middle level: the selected branch with its product breakdown. The
/// branch summary renders immediately from the clicked card; the product
/// table appears when the detail response arrives.
#[component]
pub fn BranchLevel(
    #[prop(into)] state: Signal<BranchSlot>,
    on_select_product: Callback<ProductCard>,
    on_back: Callback<()>,
) -> impl IntoView {
    let summary = move || state.get().summary().clone();

    let body = move || {
        let slot = state.get();
        match slot.detail() {
            Some(detail) => {
                let products = detail.branch.products.clone();
                let company_name = detail.company_name.clone();
                view! {
                    <div class="drilldown__detail">
                        <p class="drilldown__parent">{format!("Company: {}", company_name)}</p>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Product"</th>
                                    <th>"Category"</th>
                                    <th class="data-table__num">"Qty"</th>
                                    <th class="data-table__num">"Sales"</th>
                                    <th>"Target"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || products.clone()
                                    key=|p| p.id.clone()
                                    children=move |product| {
                                        let selected = product.clone();
                                        view! {
                                            <tr
                                                class="data-table__row data-table__row--clickable"
                                                on:click=move |_| on_select_product.run(selected.clone())
                                            >
                                                <td>{product.name.clone()}</td>
                                                <td>{product.category.clone()}</td>
                                                <td class="data-table__num">
                                                    {format_thousands(product.quantity_sold)}
                                                </td>
                                                <td class="data-table__num">
                                                    {format_money(product.total_sales)}
                                                </td>
                                                <td>
                                                    <ProgressIndicator
                                                        current=product.total_sales
                                                        target=product.target
                                                        percent=product.progress_percent
                                                        status=product.status
                                                    />
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                }
                .into_any()
            }
            None if slot.is_pending() => {
                view! { <div class="drilldown__loading">"Loading products..."</div> }.into_any()
            }
            None => view! {
                <div class="drilldown__stale">"Could not refresh products for this branch."</div>
            }
            .into_any(),
        }
    };

    view! {
        <div class="drilldown__level">
            <div class="drilldown__breadcrumbs">
                <button class="button button--ghost" on:click=move |_| on_back.run(())>
                    "< Companies"
                </button>
                <span class="drilldown__crumb">{move || summary().name}</span>
            </div>
            <section class="card card--branch">
                <div class="card__header">
                    <h2 class="card__title">{move || summary().name}</h2>
                    <span class="card__badge">{move || summary().location}</span>
                </div>
                {move || {
                    let s = summary();
                    view! {
                        <ProgressIndicator
                            current=s.total_sales
                            target=s.target
                            percent=s.progress_percent
                            status=s.status
                        />
                    }
                }}
            </section>
            {body}
        </div>
    }
}

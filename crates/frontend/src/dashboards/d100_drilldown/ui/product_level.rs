use leptos::prelude::*;

use crate::dashboards::d100_drilldown::state::ProductSlot;
use crate::shared::components::ProgressIndicator;
use crate::shared::format::{format_money, format_thousands};

/// Deepest level: sale rows for one product within the selected branch.
#[component]
pub fn ProductLevel(
    #[prop(into)] state: Signal<ProductSlot>,
    on_back: Callback<()>,
) -> impl IntoView {
    let summary = move || state.get().summary().clone();

    let body = move || {
        let slot = state.get();
        match slot.detail() {
            Some(detail) => {
                let rows = detail.sales.clone();
                if rows.is_empty() {
                    view! {
                        <div class="drilldown__empty">"No sales recorded for this product."</div>
                    }
                    .into_any()
                } else {
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Date"</th>
                                    <th>"Branch"</th>
                                    <th>"Location"</th>
                                    <th class="data-table__num">"Qty"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || rows.clone()
                                    key=|r| format!("{}-{}-{}", r.branch_id, r.sold_at, r.quantity)
                                    children=move |row| {
                                        view! {
                                            <tr class="data-table__row">
                                                <td>{row.sold_at.clone()}</td>
                                                <td>{row.branch_name.clone()}</td>
                                                <td>{row.branch_location.clone()}</td>
                                                <td class="data-table__num">
                                                    {format_thousands(row.quantity)}
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    }
                    .into_any()
                }
            }
            None if slot.is_pending() => {
                view! { <div class="drilldown__loading">"Loading sales..."</div> }.into_any()
            }
            None => view! {
                <div class="drilldown__stale">"Could not load sales for this product."</div>
            }
            .into_any(),
        }
    };

    view! {
        <div class="drilldown__level">
            <div class="drilldown__breadcrumbs">
                <button class="button button--ghost" on:click=move |_| on_back.run(())>
                    "< Branch"
                </button>
                <span class="drilldown__crumb">{move || summary().name}</span>
            </div>
            <section class="card card--product">
                <div class="card__header">
                    <h2 class="card__title">{move || summary().name}</h2>
                    <span class="card__badge">{move || summary().category}</span>
                </div>
                <div class="card__facts">
                    <span>{move || format!("Unit price: {}", format_money(summary().unit_price))}</span>
                    <span>{move || format!("Sold: {}", format_thousands(summary().quantity_sold))}</span>
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

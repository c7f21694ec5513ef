use contracts::dashboards::d100_drilldown::{BranchCard, CompanyCard, ProductCard};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d100_drilldown::api;
use crate::dashboards::d100_drilldown::state::{DrilldownMachine, Level};
use crate::dashboards::d100_drilldown::ui::branch_level::BranchLevel;
use crate::dashboards::d100_drilldown::ui::company_level::CompanyLevel;
use crate::dashboards::d100_drilldown::ui::product_level::ProductLevel;

/// Company → branch → product drill-down over cumulative sales vs targets.
#[component]
pub fn DrilldownDashboard() -> impl IntoView {
    let companies = RwSignal::new(Vec::<CompanyCard>::new());
    let loading = RwSignal::new(true);
    let error_msg = RwSignal::new(None::<String>);
    let seeding = RwSignal::new(false);
    let machine = RwSignal::new(DrilldownMachine::new());

    let load_companies = move || {
        loading.set(true);
        error_msg.set(None);
        spawn_local(async move {
            match api::get_companies().await {
                Ok(list) => {
                    companies.set(list);
                    loading.set(false);
                }
                Err(e) => {
                    log::error!("Failed to load companies: {}", e);
                    error_msg.set(Some(e));
                    loading.set(false);
                }
            }
        });
    };

    load_companies();

    let on_select_branch = Callback::new(move |card: BranchCard| {
        let Some(fetch) = machine
            .try_update(|m| m.select_branch(card))
            .flatten()
        else {
            return;
        };
        spawn_local(async move {
            match api::get_branch_detail(&fetch.branch_id).await {
                Ok(detail) => {
                    machine.update(|m| {
                        m.apply_branch_detail(fetch.generation, detail);
                    });
                }
                Err(e) => {
                    log::error!("Branch detail failed: {}", e);
                    machine.update(|m| {
                        m.branch_detail_failed(fetch.generation);
                    });
                }
            }
        });
    });

    let on_select_product = Callback::new(move |card: ProductCard| {
        let Some(fetch) = machine
            .try_update(|m| m.select_product(card))
            .flatten()
        else {
            return;
        };
        spawn_local(async move {
            match api::get_product_detail(&fetch.product_id, Some(&fetch.branch_id)).await {
                Ok(detail) => {
                    machine.update(|m| {
                        m.apply_product_detail(fetch.generation, detail);
                    });
                }
                Err(e) => {
                    log::error!("Product detail failed: {}", e);
                    machine.update(|m| {
                        m.product_detail_failed(fetch.generation);
                    });
                }
            }
        });
    });

    let on_back = Callback::new(move |_: ()| {
        machine.update(|m| m.go_back());
    });

    let on_seed = move |_| {
        if seeding.get() {
            return;
        }
        seeding.set(true);
        spawn_local(async move {
            match api::insert_test_data().await {
                Ok(()) => {
                    machine.set(DrilldownMachine::new());
                    load_companies();
                }
                Err(e) => {
                    log::error!("Failed to insert demo data: {}", e);
                    error_msg.set(Some(e));
                }
            }
            seeding.set(false);
        });
    };

    let company_view = move || {
        if loading.get() {
            return view! { <div class="drilldown__loading">"Loading companies..."</div> }
                .into_any();
        }
        if let Some(err) = error_msg.get() {
            return view! {
                <div class="error-banner">
                    <span>{format!("Failed to load data: {}", err)}</span>
                    <button class="button" on:click=move |_| load_companies()>"Retry"</button>
                </div>
            }
            .into_any();
        }
        if companies.get().is_empty() {
            return view! {
                <div class="drilldown__empty">
                    "No companies yet. Load the demo dataset to get started."
                </div>
            }
            .into_any();
        }
        view! { <CompanyLevel companies=companies on_select_branch /> }.into_any()
    };

    let level_view = move || match machine.get().level().clone() {
        Level::Company => view! {
            <div class="drilldown__level">
                <div class="drilldown__toolbar">
                    <button class="button" on:click=on_seed disabled=move || seeding.get()>
                        {move || if seeding.get() { "Loading..." } else { "Load demo data" }}
                    </button>
                </div>
                {company_view}
            </div>
        }
        .into_any(),
        Level::Branch { slot } => view! {
            <BranchLevel state=slot on_select_product on_back />
        }
        .into_any(),
        Level::Product { slot, .. } => view! {
            <ProductLevel state=slot on_back />
        }
        .into_any(),
    };

    view! { <div class="drilldown">{level_view}</div> }
}

use contracts::dashboards::d100_drilldown::{BranchCard, CompanyCard};
use leptos::prelude::*;

use crate::shared::components::ProgressIndicator;
use crate::shared::format::format_thousands;

/// Top level: one card per company, its branches listed inside as
/// clickable drill-down entries.
#[component]
pub fn CompanyLevel(
    #[prop(into)] companies: Signal<Vec<CompanyCard>>,
    on_select_branch: Callback<BranchCard>,
) -> impl IntoView {
    view! {
        <div class="drilldown__grid">
            <For
                each=move || companies.get()
                key=|c| c.id.clone()
                children=move |company| {
                    view! { <CompanyCardView company on_select_branch /> }
                }
            />
        </div>
    }
}

#[component]
fn CompanyCardView(company: CompanyCard, on_select_branch: Callback<BranchCard>) -> impl IntoView {
    let branches = company.branches.clone();

    view! {
        <section class="card card--company">
            <div class="card__header">
                <h2 class="card__title">{company.name.clone()}</h2>
                <span class="card__badge">
                    {format!("{} branches", format_thousands(company.branch_count as i64))}
                </span>
            </div>
            <ProgressIndicator
                current=company.total_sales
                target=company.target
                percent=company.progress_percent
                status=company.status
            />
            <ul class="card__list">
                <For
                    each=move || branches.clone()
                    key=|b| b.id.clone()
                    children=move |branch| {
                        let selected = branch.clone();
                        view! {
                            <li class="card__list-item">
                                <button
                                    class="card__drill-button"
                                    on:click=move |_| on_select_branch.run(selected.clone())
                                >
                                    <span class="card__drill-name">{branch.name.clone()}</span>
                                    <span class="card__drill-sub">{branch.location.clone()}</span>
                                    <ProgressIndicator
                                        current=branch.total_sales
                                        target=branch.target
                                        percent=branch.progress_percent
                                        status=branch.status
                                    />
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}

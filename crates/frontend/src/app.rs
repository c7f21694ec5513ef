use leptos::prelude::*;

use crate::dashboards::d100_drilldown::ui::DrilldownDashboard;
use crate::layout::header::HeaderBar;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app-shell">
            <HeaderBar title="Sales & Branches Dashboard" />
            <main class="app-main">
                <DrilldownDashboard />
            </main>
        </div>
    }
}

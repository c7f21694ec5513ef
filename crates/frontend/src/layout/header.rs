use contracts::system::session::SessionUser;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::session::api as session_api;

#[component]
pub fn HeaderBar(
    /// Title shown on the left side of the bar
    #[prop(into)]
    title: String,
) -> impl IntoView {
    let user = RwSignal::new(None::<SessionUser>);

    spawn_local(async move {
        match session_api::get_session().await {
            Ok(info) => user.set(info.user),
            Err(e) => log::warn!("Failed to load session: {}", e),
        }
    });

    let on_logout = move |_| {
        spawn_local(async move {
            if let Err(e) = session_api::logout().await {
                log::warn!("Logout failed: {}", e);
            }
            user.set(None);
        });
    };

    let user_view = move || {
        user.get().map(|u| {
            view! {
                <div class="header__user">
                    <span class="header__user-name">{u.display_name}</span>
                    <button class="button button--ghost" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            }
        })
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">{title}</span>
            </div>
            <div class="header__actions">{user_view}</div>
        </header>
    }
}

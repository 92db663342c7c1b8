//! Leptos application with routing.

use leptos::*;
use leptos_router::*;

use bizdesk_core::DomainError;

use crate::frontend::components::{PanelView, StockTableView};
use crate::navigation::{self, Role, View};
use crate::stock_table::StockTable;
use crate::style;

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let home = navigation::route(Role::Sales, Role::Sales.home());

    view! {
        <Router>
            <Routes>
                <Route path="/" view=move || view! { <Redirect path=home.clone()/> }/>
                <Route path="/:role/:view" view=RolePage/>
            </Routes>
        </Router>
    }
}

/// Resolves `/:role/:view` and renders the page, or explains why it can't.
#[component]
fn RolePage() -> impl IntoView {
    let params = use_params_map();
    let resolved = move || {
        params.with(|p| {
            let role: Role = p.get("role").cloned().unwrap_or_default().parse()?;
            let slug = p.get("view").cloned().unwrap_or_default();
            let view = navigation::resolve(role, &slug)?;
            Ok::<_, DomainError>((role, view))
        })
    };

    view! {
        {move || match resolved() {
            Ok((role, page)) => view! { <Page role=role page=page/> }.into_view(),
            Err(err) => view! { <Unavailable message=err.to_string()/> }.into_view(),
        }}
    }
}

#[component]
fn Page(role: Role, page: View) -> impl IntoView {
    let links = role
        .views()
        .iter()
        .map(|v| {
            let class = if *v == page {
                format!("{} {}", style::NAV_LINK, style::ACTIVE)
            } else {
                style::NAV_LINK.to_string()
            };
            view! { <A href=navigation::route(role, *v) class=class>{v.title()}</A> }
        })
        .collect_view();

    let body = match page {
        View::Panel(panel) => view! { <PanelView card=panel.card()/> }.into_view(),
        View::Stock => view! { <StockTableView table=StockTable::sample()/> }.into_view(),
    };

    view! {
        <div class="app">
            <header>
                <h1>{navigation::APP_NAME}</h1>
                <span class="role">{role.label()}</span>
            </header>
            <nav class=style::NAV>{links}</nav>
            <main>{body}</main>
        </div>
    }
}

#[component]
fn Unavailable(message: String) -> impl IntoView {
    view! {
        <div class="app">
            <header>
                <h1>{navigation::APP_NAME}</h1>
            </header>
            <main>
                <p class=style::PLACEHOLDER>{message}</p>
                <A href="/">"Back to start"</A>
            </main>
        </div>
    }
}

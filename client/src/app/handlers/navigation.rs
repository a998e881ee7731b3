//! # Navigation Handlers
//!
//! Guarded route changes and the data loads that happen when a dashboard opens.

use crate::app::{handlers, BakeryApp};
use crate::facades::DashboardTab;
use crate::routing::Route;

/// Run the router and, when the landing route changed, load what that screen needs.
pub(crate) fn handle_navigate(app: &mut BakeryApp, target: Route) -> Route {
    let previous = app.router.current();
    let landed = app.router.navigate(target, &app.auth);

    if landed != previous {
        tracing::info!(from = %previous, to = %landed, "Route changed");
        handle_route_entered(app, landed);
    }
    landed
}

fn handle_route_entered(app: &mut BakeryApp, route: Route) {
    match route {
        Route::Login => {}
        Route::AdminDashboard => {
            let dashboard = app.admin.dashboard.clone();
            app.tasks.run(async move { dashboard.initialize().await });
            let tab = app.admin.dashboard.state().active_tab();
            if tab != DashboardTab::Overview {
                handlers::admin::handle_tab_change(&app.admin, &app.tasks, tab);
            }
        }
        Route::CustomerDashboard => {
            let customer = app.customer.clone();
            app.tasks.run(async move {
                let _ = customer.load_products().await;
            });
        }
    }
}

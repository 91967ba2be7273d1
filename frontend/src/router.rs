use shared::AppView;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{
    dashboard::Dashboard, not_found::NotFound, settings::Settings,
    settings_view::SettingsViewPage,
};

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/settings")]
    Settings,
    #[at("/settings/:view")]
    SettingsSubView { view: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<AppView> for Route {
    fn from(view: AppView) -> Self {
        match view {
            AppView::Dashboard => Route::Dashboard,
            AppView::Settings => Route::Settings,
        }
    }
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Dashboard => html! { <Dashboard /> },
        Route::Settings => html! { <Settings /> },
        Route::SettingsSubView { view } => html! { <SettingsViewPage {view} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_tokens_map_to_routes() {
        assert_eq!(Route::from(AppView::Dashboard), Route::Dashboard);
        assert_eq!(Route::from(AppView::Settings), Route::Settings);
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Dashboard.to_path(), "/");
        assert_eq!(
            Route::SettingsSubView {
                view: "payments".to_string()
            }
            .to_path(),
            "/settings/payments"
        );
        assert_eq!(
            Route::recognize("/settings/theme"),
            Some(Route::SettingsSubView {
                view: "theme".to_string()
            })
        );
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::categorize::CategorizePage;
use crate::components::summary::SummaryPage;
use crate::components::trends::TrendsPage;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Summary,
    #[at("/categorize")]
    Categorize,
    #[at("/trends")]
    Trends,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Summary => html! { <SummaryPage /> },
        Route::Categorize => html! { <CategorizePage /> },
        Route::Trends => html! { <TrendsPage /> },
        Route::NotFound => html! {
            <section class="not-found">
                <h2>{"Page not found"}</h2>
                <Link<Route> to={Route::Summary}>{"Back to summary"}</Link<Route>>
            </section>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Summary.to_path(), "/");
        assert_eq!(Route::Categorize.to_path(), "/categorize");
        assert_eq!(Route::Trends.to_path(), "/trends");
    }

    #[test]
    fn test_recognize_paths() {
        assert_eq!(Route::recognize("/categorize"), Some(Route::Categorize));
        assert_eq!(Route::recognize("/trends"), Some(Route::Trends));
        assert_eq!(Route::recognize("/nowhere"), Some(Route::NotFound));
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(Header)]
pub fn header() -> Html {
    let route = use_route::<Route>();
    let nav_class = |target: Route| {
        if route.as_ref() == Some(&target) {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    html! {
        <header class="header">
            <div class="container">
                <h1>{"Budget Dashboard"}</h1>
                <nav class="header-nav">
                    <Link<Route> to={Route::Summary} classes={classes!(nav_class(Route::Summary))}>
                        {"Summary"}
                    </Link<Route>>
                    <Link<Route> to={Route::Categorize} classes={classes!(nav_class(Route::Categorize))}>
                        {"Categorize"}
                    </Link<Route>>
                    <Link<Route> to={Route::Trends} classes={classes!(nav_class(Route::Trends))}>
                        {"Trends"}
                    </Link<Route>>
                </nav>
            </div>
        </header>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod hooks;
mod router;
mod services;

use components::Header;
use router::{switch, Route};
use services::{ApiClient, Logger};

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Header />
            <main class="main">
                <div class="container">
                    <Switch<Route> render={switch} />
                </div>
            </main>
        </BrowserRouter>
    }
}

fn main() {
    let api_client = ApiClient::new();
    Logger::info_with_component("app", &format!("Budget dashboard starting against {}", api_client.base_url()));

    yew::Renderer::<App>::new().render();
}

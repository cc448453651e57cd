use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page" style="padding: 8rem 1rem; text-align: center;">
            <h2>{"This page hasn't bubbled up yet."}</h2>
            <Link<Route> to={Route::Home}>
                {"Back to the home page"}
            </Link<Route>>
        </div>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: AttrValue,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{ props.title.clone() }</h1>
                <nav>
                    <Link<Route> to={Route::Dashboard}>{ "Dashboard" }</Link<Route>>
                    { " | " }
                    <Link<Route> to={Route::Settings}>{ "Settings" }</Link<Route>>
                </nav>
            </div>
        </header>
    }
}

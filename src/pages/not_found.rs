use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animation::TextReveal;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-screen bg-black text-white flex items-center justify-center px-6">
            <TextReveal class="text-center">
                <h1 class="text-5xl font-bold mb-6">{"Page not found"}</h1>
                <p class="text-xl text-gray-300 mb-8">{"There is nothing at this address."}</p>
                <Link<Route> to={Route::Home} classes="text-blue-400 hover:text-blue-300">
                    {"Back to the home page"}
                </Link<Route>>
            </TextReveal>
        </div>
    }
}

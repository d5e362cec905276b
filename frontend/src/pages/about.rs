use yew::prelude::*;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <div class="about">
            <h1>{ "Weather without the fuss" }</h1>
            <h3>{ "Type a city, get the current conditions and a three day outlook." }</h3>
            <p>
                { "Live data comes from OpenWeatherMap. Without an API key the \
                   server answers from a small set of sample cities, so the page \
                   works out of the box." }
            </p>
        </div>
    }
}

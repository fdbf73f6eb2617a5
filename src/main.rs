use angle_number_input::route::Route;
use dioxus::{logger::tracing::debug, prelude::*};

const MAIN_CSS: Asset = asset!("./assets/main.css");

fn main() {
    debug!("Starting number input demo");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

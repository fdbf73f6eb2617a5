use crate::route::Route;
use dioxus::prelude::*;

#[component]
fn NavLink(to: Route, label: String) -> Element {
    rsx! {
        Link { class: "navlink w-48 text-center", to, "{label}" }
    }
}

/// Switches between the angle layouts of the demo.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div { id: "navbar",
            span { class: "title", "number input" }
            NavLink { to: Route::Horizontal {}, label: "left / right" }
            NavLink { to: Route::Vertical {}, label: "up / down" }
        }

        Outlet::<Route> {}
    }
}

use dioxus::prelude::*;

use crate::components;

#[component]
pub fn Horizontal() -> Element {
    rsx! {
        div { id: "horizontal",
            header { "Time" }
            components::TimePicker {}
        }
    }
}

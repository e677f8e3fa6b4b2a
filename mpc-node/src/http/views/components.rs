use dioxus::prelude::*;

#[component]
pub fn PageTitle(title: String) -> Element {
    rsx! {
        div { class: "text-center text-3xl py-5", {title} }
    }
}

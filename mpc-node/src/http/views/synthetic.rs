use dioxus::prelude::*;

use crate::http::views::components::PageTitle;

pub fn SyntheticObjectPage(designation: String) -> Element {
    rsx! {
        PageTitle { title: "Synthetic Object".to_string() }
        DesignationSection { designation }
    }
}

#[component]
fn DesignationSection(designation: String) -> Element {
    rsx! {
        p { class: "text-center text-lg py-5",
            "Designation {designation} appears to be a synthetic object."
        }
    }
}

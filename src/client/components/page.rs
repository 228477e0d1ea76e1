use dioxus::prelude::*;

/// Page body offset below the fixed site header
#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = if let Some(class) = class { class } else { "" };

    rsx!(
        main {
            class: "min-h-screen pt-24 md:pt-32 px-4 md:px-16 lg:px-24 xl:px-32 {class}",
            {children}
        }
    )
}

use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class = class.unwrap_or_default();

    rsx!(
        main {
            class: "min-h-screen pt-[72px] p-4 {class}",
            div { class: "w-full max-w-[1440px] mx-auto",
                {children}
            }
        }
    )
}

use dioxus::prelude::*;

struct NavItem {
    label: &'static str,
    href: &'static str,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", href: "/" },
    NavItem { label: "About", href: "/about" },
];

pub const BRAND: &str = "Resume Analyzer AI";

#[allow(non_snake_case)]
#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: "bg-white shadow-md",
            div { class: "container mx-auto px-6 py-4",
                div { class: "flex items-center justify-between",
                    div { class: "text-xl font-bold text-gray-800", "{BRAND}" }
                    div { class: "flex items-center space-x-4",
                        for item in NAV_ITEMS.iter() {
                            {
                                let href = item.href;
                                let label = item.label;
                                rsx! { a { href: href, class: "text-gray-600 hover:text-gray-800", "{label}" } }
                            }
                        }
                    }
                }
            }
        }
    }
}

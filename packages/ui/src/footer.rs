use dioxus::prelude::*;

/// Logo path relative to the page: the site root serves `./assets`, subpages
/// sit one level down.
pub fn logo_path(root: bool) -> &'static str {
    if root {
        "./assets/images/logo/logo.png"
    } else {
        "../assets/images/logo/logo.png"
    }
}

const COLUMNS: [(&str, [&str; 3]); 3] = [
    ("Company", ["About", "Careers", "Press"]),
    ("Support", ["Account", "Help Center", "Contact Us"]),
    ("Legals", ["Terms & Conditions", "Privacy Policy", "Licensing"]),
];

#[component]
pub fn Footer(#[props(default)] root: bool) -> Element {
    rsx! {
        footer {
            class: "footer",
            div {
                class: "footer-container",
                div {
                    class: "footer-logo",
                    img { src: logo_path(root), alt: "Hospital CMS Logo" }
                    p { "© Copyright 2025. All Rights Reserved by Hospital CMS." }
                }
                div {
                    class: "footer-links",
                    for (title, links) in COLUMNS {
                        div {
                            key: "{title}",
                            class: "footer-column",
                            h4 { "{title}" }
                            for link in links {
                                a { key: "{link}", href: "#", "{link}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_path_by_page_depth() {
        assert_eq!(logo_path(true), "./assets/images/logo/logo.png");
        assert_eq!(logo_path(false), "../assets/images/logo/logo.png");
    }
}

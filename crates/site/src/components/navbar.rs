use maud::{Markup, html};
use trekway_domain::content::NAV_ITEMS;

/// Top navigation with grouped dropdowns.
pub fn navbar() -> Markup {
    html! {
        header class="navbar" {
            a class="brand" href="/" { "Trekway" }
            nav {
                ul class="nav-items" {
                    @for item in NAV_ITEMS {
                        li class=(if item.has_dropdown() { "nav-item has-dropdown" } else { "nav-item" }) {
                            a href=(item.href) { (item.label) }
                            @if item.has_dropdown() {
                                div class="dropdown" {
                                    @for group in item.children {
                                        div class="dropdown-group" {
                                            h4 { (group.group) }
                                            ul {
                                                @for link in group.items {
                                                    li {
                                                        a href=(link.href) {
                                                            span class="link-label" { (link.label) }
                                                            span class="link-description" { (link.description) }
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            a class="btn btn-outline" href="/contact" { "Contact Us" }
        }
    }
}

use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{ProblemsView, TableView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", ProblemsView)] Problems {},
        #[route("/table", TableView)] Table {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Maths Drill" }
            ul {
                li { Link { to: Route::Problems {}, "Problems" } }
                li { Link { to: Route::Table {}, "Times table" } }
            }
        }
    }
}

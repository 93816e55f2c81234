use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use drill_core::model::PracticeDefaults;

use crate::context::{UiApp, build_app_context};
use crate::views::{ProblemsView, TableView};

#[derive(Clone)]
struct TestApp {
    defaults: PracticeDefaults,
    generate_on_launch: bool,
}

impl UiApp for TestApp {
    fn defaults(&self) -> PracticeDefaults {
        self.defaults
    }

    fn generate_on_launch(&self) -> bool {
        self.generate_on_launch
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Problems,
    Table,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Problems => rsx! { ProblemsView {} },
        ViewKind::Table => rsx! { TableView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(
    view: ViewKind,
    defaults: PracticeDefaults,
    generate_on_launch: bool,
) -> ViewHarness {
    let app = Arc::new(TestApp {
        defaults,
        generate_on_launch,
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom }
}

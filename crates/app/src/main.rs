use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use drill_core::model::PracticeDefaults;
use tracing::info;
use ui::{App, UiApp, build_app_context};

mod config;
mod logging;

use config::{Args, Command};

struct DesktopApp {
    defaults: PracticeDefaults,
    generate_on_launch: bool,
}

impl UiApp for DesktopApp {
    fn defaults(&self) -> PracticeDefaults {
        self.defaults
    }

    fn generate_on_launch(&self) -> bool {
        self.generate_on_launch
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let command = config::parse(std::env::args().skip(1), |key| std::env::var(key).ok())
        .inspect_err(|_| config::print_usage())?;

    let Args { defaults, start } = match command {
        Command::Run(args) => args,
        Command::Help => {
            config::print_usage();
            return Ok(());
        }
    };

    info!(settings = %config::describe(&defaults), start, "launching");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        defaults,
        generate_on_launch: start,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Maths Drill")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

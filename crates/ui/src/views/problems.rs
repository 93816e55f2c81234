use std::time::Duration;

use dioxus::prelude::*;
use drill_core::TICK_MS;
use tracing::debug;

use crate::context::AppContext;
use super::focus_input;
use crate::vm::{ProblemSheetVm, problem_input_id};

#[component]
pub fn ProblemsView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut sheet = use_signal(move || {
        let mut sheet: ProblemSheetVm = ctx.problem_sheet();
        if ctx.take_generate_on_launch() {
            let _ = sheet.generate();
        }
        sheet
    });

    // Host-side tick source; the engine decides whether a tick counts.
    use_future(move || async move {
        let mut sheet = sheet;
        let mut interval = tokio::time::interval(Duration::from_millis(TICK_MS));
        interval.tick().await;
        loop {
            interval.tick().await;
            if sheet.peek().is_timer_running() {
                sheet.write().tick();
            }
        }
    });

    let vm = sheet.read();
    let toggles = vm.operator_toggles();
    let rows = vm.rows();
    let timer_label = vm.timer_label();
    let timer_class = if vm.is_complete() {
        "timer timer--done"
    } else if vm.is_timer_running() {
        "timer timer--running"
    } else {
        "timer"
    };
    let count_text = vm.count_text().to_string();
    let min_text = vm.min_text().to_string();
    let max_text = vm.max_text().to_string();
    let error = vm.error().map(str::to_string);
    let division_hint = vm.shows_division_hint();
    drop(vm);

    rsx! {
        section { class: "page problems-page",
            header { class: "view-header",
                h2 { class: "view-title", "Generate random math problems" }
            }
            div { class: "view-divider" }

            div { class: "problem-settings",
                div { class: "settings-label", "Type of problem" }
                div { class: "operator-toggles",
                    for toggle in toggles {
                        label { key: "{toggle.name}", class: "operator-toggle",
                            input {
                                r#type: "checkbox",
                                checked: toggle.checked,
                                onchange: move |_| sheet.write().toggle_operator(toggle.operator),
                            }
                            span { "{toggle.name}" }
                        }
                    }
                }

                div { class: "settings-grid",
                    div { class: "settings-label", "Number of problems" }
                    input {
                        class: "settings-input",
                        r#type: "text",
                        inputmode: "numeric",
                        size: "4",
                        value: "{count_text}",
                        oninput: move |evt| sheet.write().set_count_text(evt.value()),
                    }

                    div { class: "settings-label", "Number range" }
                    div { class: "settings-range",
                        input {
                            class: "settings-input",
                            r#type: "text",
                            size: "4",
                            value: "{min_text}",
                            oninput: move |evt| sheet.write().set_min_text(evt.value()),
                        }
                        span { "-" }
                        input {
                            class: "settings-input",
                            r#type: "text",
                            size: "4",
                            value: "{max_text}",
                            oninput: move |evt| sheet.write().set_max_text(evt.value()),
                        }
                    }
                }

                div { class: "settings-actions",
                    button {
                        class: "{timer_class}",
                        r#type: "button",
                        title: "Pause / resume",
                        onclick: move |_| sheet.write().toggle_pause(),
                        "{timer_label}"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| {
                            if sheet.write().generate().is_ok() {
                                focus_input(&problem_input_id(0));
                            }
                        },
                        "Generate"
                    }
                }

                if let Some(message) = error {
                    p { class: "form-error", "{message}" }
                }
            }

            if division_hint {
                p { class: "view-hint", "*precision to the nearest hundredth decimal exp: 1.03" }
            }

            div { class: "problem-list",
                for row in rows {
                    div { key: "{row.input_id}", class: "problem-row",
                        div { class: "problem-prompt",
                            span { "{row.prompt}" }
                            if let Some(step) = row.step_label.as_ref() {
                                span { class: "problem-step", "{step}" }
                            }
                        }
                        input {
                            id: "{row.input_id}",
                            class: "problem-answer {row.feedback.class()}",
                            r#type: "text",
                            inputmode: "decimal",
                            size: "5",
                            value: "{row.entry}",
                            oninput: move |evt| {
                                let next = sheet.write().input(row.index, evt.value());
                                if let Some(next) = next {
                                    debug!(next, "advancing focus");
                                    focus_input(&problem_input_id(next));
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use super::focus_input;
use crate::context::AppContext;
use crate::vm::cell_input_id;

#[component]
pub fn TableView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut table = use_signal(move || ctx.times_table());

    let vm = table.read();
    let corner = vm.corner();
    let axis = vm.axis();
    let rows = axis.iter().map(|row| (*row, vm.row(*row))).collect::<Vec<_>>();
    let min_text = vm.min_text().to_string();
    let max_text = vm.max_text().to_string();
    let error = vm.error().map(str::to_string);
    drop(vm);

    rsx! {
        section { class: "page table-page",
            header { class: "view-header",
                h2 { class: "view-title", "Multiplication table" }
            }
            div { class: "view-divider" }

            p { class: "table-range",
                span { "Enter Range" }
                input {
                    class: "settings-input",
                    r#type: "text",
                    inputmode: "numeric",
                    size: "4",
                    value: "{min_text}",
                    oninput: move |evt| table.write().set_min_text(evt.value()),
                }
                span { "-" }
                input {
                    class: "settings-input",
                    r#type: "text",
                    inputmode: "numeric",
                    size: "4",
                    value: "{max_text}",
                    oninput: move |evt| table.write().set_max_text(evt.value()),
                }
            }
            if let Some(message) = error {
                p { class: "form-error", "{message}" }
            }

            div { class: "times-table-wrap",
                table { class: "times-table",
                    thead {
                        tr {
                            th { class: "times-corner", "{corner}" }
                            for column in axis.iter().copied() {
                                th { key: "x-{column}", class: "times-header", "{column}" }
                            }
                        }
                    }
                    tbody {
                        for (row, cells) in rows {
                            tr { key: "row-{row}",
                                th { class: "times-header", "{row}" }
                                for cell in cells {
                                    td { key: "{cell.input_id}", class: "times-cell",
                                        input {
                                            id: "{cell.input_id}",
                                            class: "cell-input {cell.feedback.class()}",
                                            r#type: "text",
                                            inputmode: "numeric",
                                            value: "{cell.entry}",
                                            oninput: move |evt| {
                                                let next = table.write().input(cell.row, cell.column, evt.value());
                                                if let Some((row, column)) = next {
                                                    focus_input(&cell_input_id(row, column));
                                                }
                                            },
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

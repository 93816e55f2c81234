mod problems;
mod table;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use problems::ProblemsView;
pub use table::TableView;

/// Move keyboard focus to the input with the given DOM id, if it exists.
fn focus_input(id: &str) {
    let _ = dioxus::document::eval(&focus_script(id));
}

fn focus_script(id: &str) -> String {
    format!("document.getElementById('{id}')?.focus();")
}

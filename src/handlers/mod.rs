mod auth;
mod editor;
mod import;
mod inventory;

pub use auth::{serve_login_page, handle_login, handle_logout};
pub use editor::{serve_edit_page, handle_edit, cancel_edit};
pub use import::process_import;
pub use inventory::serve_inventory_page;

pub(crate) use auth::SESSION_KEY;

// Minimal escaping for values interpolated into the HTML templates
pub(crate) fn html_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// One message banner; class is error, info or warning
pub(crate) fn banner(class: &str, message: &str) -> String {
    format!(r#"<div class="banner {}">{}</div>"#, class, html_escape(message))
}

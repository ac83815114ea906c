//! HTML fragment rendering for htmx partial updates.
//!
//! # Design
//! Every function here is a pure value-to-markup mapping: no I/O, no global
//! state, and the same input always produces byte-identical output. Element
//! ids derive from the todo id only.
//!
//! The `hx-*` attributes form the contract with the client:
//! - an item's checkbox and delete button both replace the item's own
//!   `<div>` (`hx-target="closest div"`, `hx-swap="outerHTML"`);
//! - the creation form appends the returned item into `[data-id=list]`;
//! - a rejected create is retargeted by the server into the `#form-error`
//!   slot, and the page shell lets htmx swap those `400` responses.

use crate::types::Todo;

/// htmx release loaded by the page shell.
pub const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.6";

/// Path of the stylesheet linked from the page shell.
pub const STYLESHEET_PATH: &str = "/public/index.css";

/// Element id of the slot that receives create errors.
pub const FORM_ERROR_ID: &str = "form-error";

/// Swaps `400` responses that the server explicitly retargeted.
const SWAP_RETARGETED_ERRORS: &str = concat!(
    r#"document.addEventListener("htmx:beforeSwap", function (evt) {"#,
    " var xhr = evt.detail.xhr;",
    r#" if (xhr.status === 400 && xhr.getResponseHeader("HX-Retarget")) {"#,
    " evt.detail.shouldSwap = true; evt.detail.isError = false; }",
    " });",
);

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// One todo row: toggle checkbox, content, delete button.
pub fn render_item(todo: &Todo) -> String {
    let id = todo.id;
    let checked = if todo.completed { " checked" } else { "" };
    let span = if todo.completed {
        r#"<span class="line-through">"#
    } else {
        "<span>"
    };
    format!(
        concat!(
            r#"<div id="todo-{id}" class="flex flex-row gap-4 items-center">"#,
            r#"<input type="checkbox" hx-put="/todos/{id}" hx-target="closest div" hx-swap="outerHTML"{checked}>"#,
            "{span}{content}</span>",
            r#"<button class="bg-red-500 py-1 px-2 text-white rounded-md" hx-delete="/todos/{id}" hx-target="closest div" hx-swap="outerHTML">Delete</button>"#,
            "</div>",
        ),
        id = id,
        checked = checked,
        span = span,
        content = escape_html(&todo.content),
    )
}

/// The creation form. Independent of any todo data.
///
/// A successful submit clears the input and any previous error.
pub fn render_form() -> String {
    format!(
        concat!(
            r#"<form class="grid" hx-post="/todos" hx-target="[data-id=list]" hx-swap="beforeend" hx-on::after-request="if (event.detail.successful) {{ this.reset(); document.getElementById('{error}').innerHTML = ''; }}">"#,
            r#"<input class="border border-black" type="text" name="content" required>"#,
            r#"<button class="bg-black text-white p-2" type="submit">Submit</button>"#,
            "</form>",
        ),
        error = FORM_ERROR_ID,
    )
}

/// The list container: every item in the supplied order, then the form and
/// its error slot.
pub fn render_list(todos: &[Todo]) -> String {
    let items: String = todos.iter().map(render_item).collect();
    format!(
        r#"<div class="grid gap-3"><div data-id="list" class="flex flex-col gap-2">{items}</div>{form}<div id="{error}"></div></div>"#,
        items = items,
        form = render_form(),
        error = FORM_ERROR_ID,
    )
}

/// Full page shell. The placeholder loads the list once htmx is ready.
pub fn render_page() -> String {
    format!(
        concat!(
            "<!DOCTYPE html>",
            r#"<html lang="en">"#,
            "<head>",
            r#"<meta charset="UTF-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#,
            r#"<script src="{htmx}"></script>"#,
            r#"<link href="{css}" rel="stylesheet" type="text/css">"#,
            "<script>{swap}</script>",
            "<title>HTMX Todo</title>",
            "</head>",
            "<body>",
            r#"<div class="flex h-screen justify-center items-center">"#,
            r#"<div hx-get="/todos" hx-trigger="load" hx-swap="innerHTML"></div>"#,
            "</div>",
            "</body>",
            "</html>",
        ),
        htmx = HTMX_SRC,
        css = STYLESHEET_PATH,
        swap = SWAP_RETARGETED_ERRORS,
    )
}

/// Inline error message for a rejected request.
pub fn render_error(message: &str) -> String {
    format!(
        r#"<p class="text-red-500" role="alert">{}</p>"#,
        escape_html(message)
    )
}

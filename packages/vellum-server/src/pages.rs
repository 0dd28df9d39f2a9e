//! HTML shells for the editor and share views.
//!
//! Deliberately small: a standalone document, inline styles, the data
//! embedded. Note text is escaped into the textarea; share content is
//! client-rendered HTML and goes in verbatim, which is the contract of
//! the share payload.

use axum::response::Html;

use crate::share::store::ShareSnapshot;

/// The note editor page, with the current content embedded.
pub fn editor_page(note_name: &str, content: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{name} · Vellum</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: #fafaf7;
            color: #222;
            margin: 0;
            display: flex;
            flex-direction: column;
            min-height: 100vh;
        }}
        header {{
            padding: 10px 16px;
            font-size: 14px;
            color: #888;
            border-bottom: 1px solid #e8e6df;
        }}
        header b {{
            color: #444;
        }}
        form {{
            flex: 1;
            display: flex;
            flex-direction: column;
        }}
        textarea {{
            flex: 1;
            border: none;
            outline: none;
            resize: none;
            padding: 16px;
            font-family: ui-monospace, 'SF Mono', Menlo, Consolas, monospace;
            font-size: 14px;
            line-height: 1.6;
            background: transparent;
        }}
        button {{
            align-self: flex-start;
            margin: 0 16px 16px;
            padding: 6px 18px;
            border: 1px solid #ccc;
            border-radius: 6px;
            background: #fff;
            cursor: pointer;
        }}
    </style>
</head>
<body>
    <header>Editing <b>{name}</b> · saving empty text deletes the note</header>
    <form method="post" action="/{name}">
        <textarea name="text" placeholder="Start typing…" autofocus>{content}</textarea>
        <button type="submit">Save</button>
    </form>
</body>
</html>"#,
        name = escape_html(note_name),
        content = escape_html(content),
    ))
}

/// The share view page wrapping a stored snapshot.
pub fn share_page(snapshot: &ShareSnapshot) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Shared note · Vellum</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: #fafaf7;
            color: #222;
            margin: 0 auto;
            max-width: 720px;
            padding: 32px 16px;
            line-height: 1.6;
        }}
        footer {{
            margin-top: 48px;
            padding-top: 12px;
            border-top: 1px solid #e8e6df;
            font-size: 13px;
            color: #888;
        }}
    </style>
</head>
<body>
    <article>{content}</article>
    <footer>Shared {created} · last edited {edited} · viewed {visits} time(s)</footer>
</body>
</html>"#,
        content = snapshot.content,
        created = escape_html(&snapshot.create_time),
        edited = escape_html(&snapshot.last_edit_time),
        visits = snapshot.visit_count,
    ))
}

/// Minimal HTML escape for text placed inside markup.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

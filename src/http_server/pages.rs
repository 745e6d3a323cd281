//! HTML page rendering for the web views
//!
//! Pages are built with plain formatting. Every piece of user content goes
//! through `escape_html` before it is written into markup.

use crate::store::Record;

/// Stylesheet served at `/static/style.css`
pub const STYLESHEET: &str = "\
body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; color: #222; }
h1 { font-size: 1.6rem; }
ul.messages { list-style: none; padding: 0; }
ul.messages li { padding: 0.5rem 0; border-bottom: 1px solid #ddd; }
.id { color: #888; margin-right: 0.5rem; }
textarea { width: 100%; min-height: 6rem; }
nav a { margin-right: 1rem; }
";

/// Escape the characters that are significant in HTML text and attributes
pub fn escape_html(s: &str) -> String {
    let mut output = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#39;"),
            c => output.push(c),
        }
    }
    output
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <link rel=\"stylesheet\" href=\"/static/style.css\">\n\
         </head>\n\
         <body>\n\
         <nav><a href=\"/web/messages\">Messages</a><a href=\"/web/messages/create\">New message</a></nav>\n\
         {body}\n\
         </body>\n\
         </html>\n",
        title = escape_html(title),
        body = body,
    )
}

/// List of all messages
pub fn render_list(messages: &[Record]) -> String {
    let body = if messages.is_empty() {
        "<h1>Messages</h1>\n<p>No messages yet.</p>".to_string()
    } else {
        let items: String = messages
            .iter()
            .map(|m| {
                format!(
                    "<li><span class=\"id\">#{id}</span><a href=\"/web/messages/{id}\">{content}</a></li>\n",
                    id = m.id,
                    content = escape_html(&m.content),
                )
            })
            .collect();
        format!("<h1>Messages</h1>\n<ul class=\"messages\">\n{}</ul>", items)
    };
    layout("Messages", &body)
}

/// Single message page
pub fn render_detail(message: &Record) -> String {
    let body = format!(
        "<h1>Message #{id}</h1>\n<p>{content}</p>\n<a href=\"/web/messages\">Back to list</a>",
        id = message.id,
        content = escape_html(&message.content),
    );
    layout(&format!("Message #{}", message.id), &body)
}

/// Form posting to `/web/messages`
pub fn render_create_form() -> String {
    let body = "<h1>New message</h1>\n\
                <form method=\"post\" action=\"/web/messages\">\n\
                <textarea name=\"content\" required></textarea>\n\
                <button type=\"submit\">Create</button>\n\
                </form>";
    layout("New message", body)
}

/// Error page used for not-found and rejected form submissions
pub fn render_error(title: &str, message: &str) -> String {
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<a href=\"/web/messages\">Back to list</a>",
        escape_html(title),
        escape_html(message),
    );
    layout(title, &body)
}

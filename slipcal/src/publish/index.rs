//! HTML index page linking every published calendar.

/// Render the subscription index page from `(vessel name, calendar url)`
/// pairs, in fleet order.
#[must_use]
pub fn render(entries: &[(String, String)]) -> String {
    let mut out = String::new();
    out.push_str("<html>\n<head>\n<title>Boat Calendars</title>\n</head>\n<body>\n");
    out.push_str("<h1>Subscribe to Boat Calendars</h1>\n<ul>\n");
    for (name, url) in entries {
        out.push_str(&format!(
            "<li><a href=\"{}\">{} Calendar</a></li>\n",
            escape_attr(url),
            escape_text(name)
        ));
    }
    out.push_str("</ul>\n</body>\n</html>");
    out
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

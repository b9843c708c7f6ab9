//! Page renderer: wraps HTML fragments in the common site layout.

/// Options applied to the surrounding layout.
#[derive(Debug, Clone)]
pub struct PageOptions {
    pub title: String,
    pub lang: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Page".to_string(),
            lang: "en".to_string(),
        }
    }
}

impl PageOptions {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Escape text for interpolation into HTML content or attribute values.
pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Wrap a rendered fragment in the full page layout.
///
/// The fragment is trusted markup produced by the caller; anything
/// interpolated into it from user data must already be [`escape`]d.
pub fn render(fragment: &str, options: &PageOptions) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <meta name="viewport" content="width=device-width,initial-scale=1">
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.2.3/dist/css/bootstrap.min.css" rel="stylesheet">
</head>
<body>
    <div id="app">
        <header class="navbar bg-light">
            <div class="container-fluid">
                <p class="navbar-brand mb-0 h1">Book Inventory</p>
                <ul class="navbar-nav me-auto mb-2 mb-lg-0">
                    <li class="nav-item">
                        <a class="nav-link" href="/">List of Books</a>
                    </li>
                </ul>
            </div>
        </header>
        <main class="container mt-4">{fragment}</main>
    </div>
</body>
</html>
"#,
        lang = escape(&options.lang),
        title = escape(&options.title),
        fragment = fragment,
    )
}

use crate::renderer::escape_html;

/// Wrap a rendered fragment into a standalone HTML document.
pub fn wrap_page(fragment: &str, title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<meta name=\"color-scheme\" content=\"light dark\">\n<title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape_html(title),
        fragment
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_page() {
        let page = wrap_page("<div>x</div>", "a & b");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>a &amp; b</title>"));
        assert!(page.contains("<body>\n<div>x</div>\n</body>"));
    }
}

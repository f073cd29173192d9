//! Page shell.
//!
//! Wraps the generated form markup in the complete HTML document: head,
//! stylesheet link, back-button script, page heading, and the trailing
//! Back button. Fixed text around the renderer's output.

/// Document lead-in, through the heading block.
const DOCUMENT_TOP: &str = r#"<!DOCTYPE html>
<html lang="en">
<!-- -->
<!-- THIS FILE IS GENERATED BY lampcfg -->
<!-- -->
<!-- MAKE ANY CHANGES IN ITS SCHEMA DEFINITION, OTHERWISE THEY WILL BE LOST ON THE NEXT RUN! -->
<!-- -->
<head>
    <title>ESP32 LED Strip Configuration</title>
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <link rel="stylesheet" href="style.css">
    <link rel="icon" href="data:,">
</head>

<body>
    <script>
        function backButton() {
            setTimeout(function () { window.open("index.html", "_self"); }, 300);
        }
    </script>
    <h1>Configuration</h1>
    <p>Mandatory values are underlined.</p>
"#;

/// Back button and document close.
const DOCUMENT_BOTTOM: &str = r#"    <button onclick="backButton()">Back</button>
</body>
</html>
"#;

/// Wrap rendered form markup into the complete configuration document.
pub fn wrap(body: &str) -> String {
    let mut document =
        String::with_capacity(DOCUMENT_TOP.len() + body.len() + DOCUMENT_BOTTOM.len());
    document.push_str(DOCUMENT_TOP);
    document.push_str(body);
    document.push_str(DOCUMENT_BOTTOM);
    document
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_places_body_between_heading_and_back_button() {
        let document = wrap("    <div class=\"category\">\n    </div>\n");
        assert!(document.starts_with("<!DOCTYPE html>"));
        assert!(document.ends_with("</html>\n"));

        let heading = document.find("<h1>Configuration</h1>").unwrap();
        let body = document.find("<div class=\"category\">").unwrap();
        let back = document.find("<button onclick=\"backButton()\">").unwrap();
        assert!(heading < body);
        assert!(body < back);
    }

    #[test]
    fn test_wrap_links_stylesheet() {
        let document = wrap("");
        assert!(document.contains("<link rel=\"stylesheet\" href=\"style.css\">"));
    }
}

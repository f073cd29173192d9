//! Stylesheet emission.
//!
//! The stylesheet is fixed text. The rendered markup depends on its
//! `.group` and `.required` hooks plus the bare element styling; nothing
//! here is computed from the schema.

/// The stylesheet served next to the generated document.
const STYLESHEET: &str = "\
html {
    font-family: Arial;
    display: inline-block;
    text-align: left;
}

h1 {
    font-size: 2.0rem;
    color: rgb(250, 225, 210);
}

h2 {
    font-size: 1.5rem;
    color: rgb(250, 225, 210);
}

h3 {
    font-size: 1.2rem;
    color: rgb(250, 225, 210);
}

p {
    font-size: 1.0rem;
    color: rgb(225, 225, 225);
}

label {
    font-size: 125%;
    color: rgb(225, 225, 225);
    width: 40%;
    display: inline-block;
}

input {
    font-size: 1.0rem;
    color: #000000;
    width: 40%;
    display: inline-block;
    &:invalid {
        border: 6px solid red;
    }
}

button {
    padding: .4em .8em;
    background: #08173f;
    border: thin solid #1c4eda;
    color: white;
    text-shadow: 0 -.05em .05em #333;
    font-size: 125%;
    line-height: 1.5;
}

body {
    max-width: 600px;
    margin: 0px auto;
    padding-bottom: 25px;
    background-color: #133592;
}

.group {
  background-color: #1640b4;
}

.required {
    text-decoration: underline;
}
";

/// Produce the stylesheet contents.
pub fn generate() -> String {
    STYLESHEET.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_renderer_hooks() {
        let css = generate();
        assert!(css.contains(".group"));
        assert!(css.contains(".required"));
        assert!(css.contains("text-decoration: underline"));
    }

    #[test]
    fn test_styles_bare_form_elements() {
        let css = generate();
        for element in ["input", "button", "label", "h1", "h2", "h3", "p"] {
            assert!(css.contains(&format!("{element} {{")), "missing {element}");
        }
    }
}

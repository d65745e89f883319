//! Handlebars templates for server-rendered pages.
//!
//! Every page is rendered inside the shared `layout` partial, which prints
//! the title and any flash messages before the page body. Values are HTML
//! escaped by Handlebars unless a template uses triple braces.

use handlebars::Handlebars;
use serde::Serialize;
use std::sync::Arc;

use crate::session::Flash;

pub use handlebars::{RenderError, TemplateError};

const LAYOUT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{title}}</title>
</head>
<body>
<main>
<h1>{{title}}</h1>
{{#each flashes}}
<div class="alert alert-{{level}}" role="alert">{{message}}</div>
{{/each}}
{{> @partial-block}}
</main>
</body>
</html>
"#;

const ERROR_TEMPLATE: &str = r#"{{#> layout}}
<p>{{page.message}}</p>
{{/layout}}"#;

/// Name of the built-in error page template
pub const ERROR_PAGE: &str = "error";

#[derive(Serialize)]
struct PageContext<'a, T: Serialize> {
    title: &'a str,
    flashes: &'a [Flash],
    page: &'a T,
}

/// Registry of page templates sharing one layout.
///
/// Page templates wrap their body in `{{#> layout}}...{{/layout}}` and read
/// their own data under `page`.
#[derive(Clone)]
pub struct Templates {
    handlebars: Arc<Handlebars<'static>>,
}

impl Templates {
    /// Register the layout, the error page and each `(name, source)` pair
    pub fn new(pages: &[(&str, &str)]) -> Result<Self, TemplateError> {
        let mut handlebars = Handlebars::new();

        handlebars.register_partial("layout", LAYOUT_TEMPLATE)?;
        handlebars.register_template_string(ERROR_PAGE, ERROR_TEMPLATE)?;

        for (name, source) in pages {
            handlebars.register_template_string(name, source)?;
        }

        Ok(Self {
            handlebars: Arc::new(handlebars),
        })
    }

    /// Render template `name` with a title, pending flashes and page data
    pub fn render_page<T: Serialize>(
        &self,
        name: &str,
        title: &str,
        flashes: &[Flash],
        page: &T,
    ) -> Result<String, RenderError> {
        let context = PageContext {
            title,
            flashes,
            page,
        };
        self.handlebars.render(name, &context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FORM_TEMPLATE: &str = r#"{{#> layout}}
<form method="post"></form>
{{/layout}}"#;

    #[test]
    fn test_layout_renders_flashes_before_body() {
        let templates = Templates::new(&[("form", FORM_TEMPLATE)]).unwrap();
        let flashes = vec![
            Flash::success("You may now login."),
            Flash::error("<script>"),
        ];

        let page = templates
            .render_page("form", "Login", &flashes, &())
            .unwrap();

        let success = page.find("alert alert-success").unwrap();
        let form = page.find("<form").unwrap();
        assert!(success < form);
        assert!(page.contains("<title>Login</title>"));
        assert!(page.contains("alert alert-error"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>"));
    }

    #[test]
    fn test_page_data_is_escaped() {
        let templates = Templates::new(&[]).unwrap();

        let page = templates
            .render_page(
                ERROR_PAGE,
                "Oops",
                &[],
                &json!({ "message": r#"<a href="x">Tom & 'Jerry'</a>"# }),
            )
            .unwrap();

        assert!(page.contains("&lt;a href"));
        assert!(page.contains("&quot;x&quot;"));
        assert!(page.contains("Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"));
        assert!(!page.contains("<a href"));
    }

    #[test]
    fn test_no_flashes_renders_no_alerts() {
        let templates = Templates::new(&[("form", FORM_TEMPLATE)]).unwrap();

        let page = templates.render_page("form", "Login", &[], &()).unwrap();

        assert!(!page.contains("alert"));
    }

    #[test]
    fn test_malformed_template_is_rejected() {
        assert!(Templates::new(&[("broken", "{{#each items}}")]).is_err());
    }

    #[test]
    fn test_unknown_template_is_render_error() {
        let templates = Templates::new(&[]).unwrap();
        assert!(templates.render_page("missing", "x", &[], &()).is_err());
    }
}

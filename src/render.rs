//! HTML rendering for a rule book.
//!
//! Rules are numbered with a single counter that runs across every section,
//! so the second list picks up where the first one stopped.
//!
//! Titles and rules are inserted verbatim. The source rule book is trusted
//! content and may carry its own inline markup.

use crate::document::RuleDocument;
use crate::i18n::LocaleTable;
use std::fmt::Write;

const RTL_OPEN: &str = "<div style=\"direction: rtl; text-align: right;\">\n";
const RTL_CLOSE: &str = "</div>\n";

/// Render `document` as an HTML fragment for `locale_key`.
///
/// The locale named by [`LocaleTable::rtl_key`] is wrapped in a right-to-left
/// container. Output depends only on the arguments.
pub fn render_html(document: &RuleDocument, locale_key: &str, locales: &LocaleTable) -> String {
    let rtl = locales.is_rtl(locale_key);
    let mut html = String::new();

    if rtl {
        html.push_str(RTL_OPEN);
    }

    let mut counter: usize = 1;

    for section in &document.sections {
        // Writing into a String cannot fail
        let _ = write!(html, "\n<h3>{}</h3>\n", section.title);

        if counter == 1 {
            html.push_str("<ol>\n");
        } else {
            let _ = writeln!(html, "<ol start=\"{}\">", counter);
        }

        for rule in &section.rules {
            let _ = writeln!(html, "  <li>{}</li>", rule);
            counter += 1;
        }

        html.push_str("</ol>\n");
    }

    if rtl {
        html.push_str(RTL_CLOSE);
    }

    html
}

//! Minimal inline pages. The tool is a single form and a result view; no
//! template engine is warranted.

use azp_core::RewriteResult;

pub fn form_page(flash: Option<&str>) -> String {
    let flash_html = match flash {
        Some(msg) => format!("<p class=\"flash\">{}</p>", escape(msg)),
        None => String::new(),
    };
    format!(
        "<!doctype html>\n<html lang=\"nl\"><head><meta charset=\"utf-8\">\
         <title>azpress</title></head><body>\n\
         <h1>azpress</h1>\n{flash_html}\
         <form method=\"post\" action=\"/\">\n\
         <input type=\"url\" name=\"url\" placeholder=\"https://...\" size=\"60\">\n\
         <button type=\"submit\">Herschrijf</button>\n\
         </form>\n</body></html>"
    )
}

pub fn result_page(result: &RewriteResult) -> String {
    let title_html = if result.title.is_empty() {
        String::new()
    } else {
        format!("<h2>{}</h2>\n", escape(&result.title))
    };
    let paragraphs = result
        .body_paragraphs
        .iter()
        .map(|p| format!("<p>{}</p>", escape(p)))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "<!doctype html>\n<html lang=\"nl\"><head><meta charset=\"utf-8\">\
         <title>azpress</title></head><body>\n\
         <h1>azpress</h1>\n{title_html}{paragraphs}\n\
         <p><a href=\"/\">Nog een artikel</a></p>\n</body></html>"
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_page_carries_flash() {
        let page = form_page(Some("Vul een URL in."));
        assert!(page.contains("Vul een URL in."));
        assert!(page.contains("<form"));
    }

    #[test]
    fn test_result_page_escapes_html() {
        let result = RewriteResult {
            title: "AZ <wint>".to_string(),
            body_paragraphs: vec!["a & b".to_string()],
            attribution_required: false,
            attribution_line: String::new(),
        };
        let page = result_page(&result);
        assert!(page.contains("AZ &lt;wint&gt;"));
        assert!(page.contains("a &amp; b"));
    }

    #[test]
    fn test_result_page_omits_empty_title() {
        let result = RewriteResult::plain("alleen tekst");
        let page = result_page(&result);
        assert!(!page.contains("<h2>"));
        assert!(page.contains("alleen tekst"));
    }
}

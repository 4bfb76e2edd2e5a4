use azp_core::RewriteResult;
use regex::Regex;

/// Guarantees the publisher alias appears, word-bounded, in the first
/// paragraph of a result that requires attribution.
///
/// When the alias is missing, a short clause is spliced in before the
/// paragraph's terminal punctuation; the wording follows the source text
/// ("in gesprek met" for quote-bearing copy, "zo meldt" otherwise). Results
/// that do not require attribution get their attribution line cleared.
pub fn ensure_attribution(result: &mut RewriteResult, alias: &str, quote_signal: bool) {
    if !result.attribution_required {
        result.attribution_line.clear();
        return;
    }

    if result.body_paragraphs.is_empty() {
        result.body_paragraphs.push(String::new());
    }

    if alias_present(&result.body_paragraphs[0], alias) {
        return;
    }

    let clause = if quote_signal {
        format!("in gesprek met {alias}")
    } else {
        format!("zo meldt {alias}")
    };

    let paragraph = &mut result.body_paragraphs[0];
    let trimmed = paragraph.trim_end().to_string();
    *paragraph = match trimmed.chars().last() {
        Some(last) if matches!(last, '.' | '!' | '?') => {
            let mut head = trimmed.clone();
            head.pop();
            format!("{head}, {clause}{last}")
        }
        Some(_) => format!("{trimmed}, {clause}."),
        None => {
            let mut chars = clause.chars();
            let sentence = match chars.next() {
                Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            };
            format!("{sentence}.")
        }
    };
    result.attribution_line = clause;
}

/// Whole-word presence check for the alias.
pub fn alias_present(paragraph: &str, alias: &str) -> bool {
    if alias.is_empty() {
        return false;
    }
    let pattern = format!(r"(?i)\b{}\b", regex::escape(alias));
    Regex::new(&pattern).map(|re| re.is_match(paragraph)).unwrap_or(false)
}

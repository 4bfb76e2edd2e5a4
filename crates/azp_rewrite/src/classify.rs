use lazy_static::lazy_static;
use regex::Regex;

/// Outcome of the keyword classification.
///
/// The variants keep enough signal for the attribution inserter to pick the
/// clause wording ("in gesprek met" for quote-bearing text, "zo meldt"
/// otherwise).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Transfer or rumor content; attribution required.
    Transfer,
    /// Quotes or interview content; attribution required.
    Quote,
    /// Factual match report; no attribution.
    MatchReport,
    /// None of the signals matched; no attribution.
    Unmarked,
}

impl Classification {
    pub fn attribution_required(&self) -> bool {
        matches!(self, Classification::Transfer | Classification::Quote)
    }
}

const TRANSFER_VOCAB: &[&str] = &[
    "transfer",
    "gerucht",
    "geruchten",
    "bod",
    "tekent",
    "overstap",
    "transfersom",
    "huurt",
    "verhuurt",
    "akkoord",
    "contract",
    "clausule",
];

const QUOTE_VOCAB: &[&str] = &[
    "zegt",
    "aldus",
    "vertelt",
    "verklaart",
    "in gesprek met",
    "reageert",
    "\"",
    "\u{201c}", // “
    "\u{201d}", // ”
    // U+2019 is deliberately absent: it doubles as the Dutch typographic
    // apostrophe ("zo'n", "'s avonds") and would over-attribute plain copy.
    "\u{2018}", // ‘
];

const MATCH_REPORT_VOCAB: &[&str] = &[
    "uitslag",
    "eindstand",
    "ruststand",
    "stand",
    "speelronde",
    "minuut",
];

lazy_static! {
    static ref SCORELINE: Regex = Regex::new(r"\b\d{1,2}-\d{1,2}\b").unwrap();
}

/// Classifies concatenated title+body text against fixed keyword sets, in
/// strict priority order: transfer beats quote beats match report. The
/// default is no attribution, a conservative bias against over-attributing
/// routine content.
pub fn classify(text: &str) -> Classification {
    let lowered = text.to_lowercase();

    if contains_any(&lowered, TRANSFER_VOCAB) {
        return Classification::Transfer;
    }
    if has_quote_signal(&lowered) {
        return Classification::Quote;
    }
    if contains_any(&lowered, MATCH_REPORT_VOCAB) || SCORELINE.is_match(&lowered) {
        return Classification::MatchReport;
    }
    Classification::Unmarked
}

/// True when the (already lowercased) text carries quote or reported-speech
/// vocabulary. Also used by the attribution inserter to pick clause wording.
pub fn has_quote_signal(lowered: &str) -> bool {
    contains_any(lowered, QUOTE_VOCAB)
}

fn contains_any(text: &str, vocab: &[&str]) -> bool {
    vocab.iter().any(|kw| text.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_keyword_requires_attribution() {
        let c = classify("AZ ontvangt een bod op de spits");
        assert_eq!(c, Classification::Transfer);
        assert!(c.attribution_required());
    }

    #[test]
    fn test_transfer_beats_other_signals() {
        // Transfer vocabulary wins even when quote and scoreline signals are
        // present in the same text.
        let c = classify("\u{201c}Het transfergerucht klopt\u{201d}, zegt hij na de 2-1");
        assert_eq!(c, Classification::Transfer);
        assert!(c.attribution_required());
    }

    #[test]
    fn test_quote_signal_requires_attribution() {
        let c = classify("PSV verliest van AZ, zegt de trainer.");
        assert_eq!(c, Classification::Quote);
        assert!(c.attribution_required());
    }

    #[test]
    fn test_match_report_needs_no_attribution() {
        let c = classify("De uitslag van de speelronde: AZ won met 3-0");
        assert_eq!(c, Classification::MatchReport);
        assert!(!c.attribution_required());
    }

    #[test]
    fn test_scoreline_alone_is_match_report() {
        assert_eq!(classify("AZ klopt Ajax: 2-1"), Classification::MatchReport);
    }

    #[test]
    fn test_default_is_unmarked() {
        let c = classify("De club presenteert het nieuwe tenue");
        assert_eq!(c, Classification::Unmarked);
        assert!(!c.attribution_required());
    }

    #[test]
    fn test_typographic_apostrophe_is_not_a_quote_signal() {
        // "zo'n" and "'s avonds" with U+2019 are ordinary Dutch prose, not
        // quoted speech.
        let c = classify("De ploeg speelt zo\u{2019}n duel \u{2019}s avonds in eigen huis");
        assert_eq!(c, Classification::Unmarked);
        assert!(!c.attribution_required());
    }

    #[test]
    fn test_quote_beats_match_report() {
        let c = classify("\u{201c}De 2-1 was verdiend\u{201d}, aldus de aanvoerder");
        assert_eq!(c, Classification::Quote);
    }
}

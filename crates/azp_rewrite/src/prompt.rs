//! Prompt strings for the two model calls. All prose is Dutch: the tool
//! rewrites Dutch football copy for an AZ-branded feed.

pub const PARAPHRASE_SYSTEM: &str = "Je bent een redacteur die complete, feitelijke \
    Nederlandstalige nieuwsartikelen schrijft zonder sensatie.";

pub const FORMAT_SYSTEM: &str = "Je bent een ervaren Nederlandse nieuwsredacteur. \
    Je houdt je strikt aan instructies en hallucineert niet.";

/// Per-chunk paraphrase request: faithful, roughly length-preserving.
pub fn paraphrase_prompt(chunk: &str, alias: &str) -> String {
    format!(
        "Parafraseer de onderstaande tekst in het Nederlands, behoud alle feiten en nuance, \
         en houd de lengte ongeveer gelijk aan de input (\u{b1}10%). \
         Schrijf in een neutrale, nieuwswaardige toon. \
         Verwerk eventueel een korte bronzin in de lopende tekst wanneer logisch, \
         bijv. '..., zo meldt {alias}.' \
         Voeg geen URL's toe en geen losse bronregel.\n\n\
         TEKST:\n{chunk}"
    )
}

/// Final structuring request: title, perspective flip, paragraph budget,
/// conditional attribution, and the fixed JSON schema.
pub fn format_prompt(
    full_text: &str,
    alias: &str,
    approx_words: usize,
    attribution_required: bool,
) -> String {
    let target_words = std::cmp::max(120, approx_words * 9 / 10);
    let attribution_rule = if attribution_required {
        format!(
            "Noem de bron vroeg in de eerste alinea, in de lopende tekst, \
             bijv. '..., zo meldt {alias}.' of '..., schrijft {alias}.' \
             Zet attribution_required op true en herhaal de gebruikte bronzin in attribution_line."
        )
    } else {
        "Dit is feitelijke verslaggeving: geen bronvermelding nodig. \
         Zet attribution_required op false en laat attribution_line leeg."
            .to_string()
    };

    format!(
        "Zet de onderstaande tekst om naar een AZ-waardig nieuwsartikel met deze eisen:\n\
         1) E\u{e9}n korte titel.\n\
         2) Schrijf altijd vanuit het perspectief van AZ. Draai het onderwerp om wanneer \
            de tegenstander als winnaar wordt opgevoerd: 'PSV verliest van AZ' wordt \
            'AZ wint van PSV'. Een gelijkspel of een nederlaag van AZ blijft feitelijk \
            ongewijzigd staan.\n\
         3) Eerste alinea = de hoofdboodschap. {attribution_rule}\n\
         4) Deel daarna op in korte alinea's: introductie (1 alinea) \u{2192} kernpunten \
            (1-3 alinea's) \u{2192} context/achtergrond (1-2 alinea's). Minimaal 2 en \
            maximaal 7 alinea's in totaal.\n\
         5) Directe citaten blijven tussen aanhalingstekens staan, met de spreker in de \
            lopende tekst.\n\
         6) Geen URL's, geen losse bronregel onderaan, geen reclame en geen speculatie.\n\
         7) Lengte: ongeveer gelijk aan de input (\u{2013}10% tot +10%), streef naar \
            ~{target_words} woorden. Alles in het Nederlands en uitsluitend feiten uit de input.\n\
         8) Antwoord uitsluitend met JSON in exact dit formaat, zonder uitleg eromheen:\n\
         {{\"title\": \"...\", \"body_paragraphs\": [\"...\"], \
           \"attribution_required\": true, \"attribution_line\": \"...\"}}\n\n\
         INPUT:\n{full_text}"
    )
}

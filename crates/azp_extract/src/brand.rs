use url::Url;

/// Resolves a URL to a publisher display name.
///
/// Exact match against a fixed domain table (with the `www.` prefix
/// stripped); unknown hosts fall back to the capitalized first label of the
/// domain.
pub fn publisher_name(url: &str) -> String {
    let host = Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_lowercase()))
        .unwrap_or_default();
    let host = host.strip_prefix("www.").unwrap_or(&host);

    match host {
        "vi.nl" | "voetbalinternational.nl" => "Voetbal International".to_string(),
        "nu.nl" => "NU.nl".to_string(),
        "nos.nl" => "NOS".to_string(),
        "ad.nl" => "AD".to_string(),
        "telegraaf.nl" => "De Telegraaf".to_string(),
        "parool.nl" => "Het Parool".to_string(),
        "volkskrant.nl" => "de Volkskrant".to_string(),
        "nrc.nl" => "NRC".to_string(),
        "rtlnieuws.nl" | "rtl.nl" => "RTL Nieuws".to_string(),
        "bbc.com" => "BBC".to_string(),
        "espn.nl" => "ESPN".to_string(),
        "voetbalprimeur.nl" => "VoetbalPrimeur".to_string(),
        "voetbalzone.nl" => "Voetbalzone".to_string(),
        "az.nl" => "AZ".to_string(),
        "fcupdate.nl" => "FCUpdate".to_string(),
        "soccernews.nl" => "SoccerNews".to_string(),
        _ => {
            let base = host.split('.').next().unwrap_or_default();
            if base.is_empty() {
                host.to_string()
            } else {
                let mut chars = base.chars();
                match chars.next() {
                    Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
                    None => base.to_string(),
                }
            }
        }
    }
}

/// Shortened publisher name used in generated prose.
///
/// Known long names map to the short variant common in Dutch copy; anything
/// else passes through unchanged.
pub fn brand_alias(name: &str) -> String {
    match name {
        "Voetbal International" => "VI".to_string(),
        // Voluit is veilig; 'VP' wordt zelden gebruikt.
        "VoetbalPrimeur" => "VoetbalPrimeur".to_string(),
        "RTL Nieuws" => "RTL Nieuws".to_string(),
        "De Telegraaf" => "De Telegraaf".to_string(),
        other => other.to_string(),
    }
}

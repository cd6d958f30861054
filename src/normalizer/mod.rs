//! Text and metadata cleanup shared by the content clients.

use std::collections::HashMap;

use html_escape::decode_html_entities;

use crate::domain::PlaceType;

/// Used when no candidate image survives sanitizing.
pub const DEFAULT_IMAGE: &str =
    "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?auto=format&fit=crop&w=1200&q=60";

/// Remove `<...>` tags and decode entities. An unterminated `<` is kept
/// as text.
pub fn strip_html(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('<') {
        match rest[start..].find('>') {
            Some(end) => {
                cleaned.push_str(&rest[..start]);
                rest = &rest[start + end + 1..];
            }
            None => break,
        }
    }
    cleaned.push_str(rest);

    decode_html_entities(cleaned.trim()).to_string()
}

/// Like [`strip_html`] but maps blank results to `None`.
pub fn strip_html_opt(text: Option<&str>) -> Option<String> {
    text.map(strip_html).filter(|s| !s.is_empty())
}

/// Reject blank values and HTML fragments masquerading as URLs.
pub fn sanitize_image_url(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() || trimmed.starts_with('<') {
        return None;
    }
    Some(trimmed.to_string())
}

/// First usable candidate, or [`DEFAULT_IMAGE`].
pub fn resolve_image_source(candidates: &[Option<&str>]) -> String {
    candidates
        .iter()
        .find_map(|c| sanitize_image_url(*c))
        .unwrap_or_else(|| DEFAULT_IMAGE.to_string())
}

/// Commons `extmetadata` entry.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct MetadataValue {
    pub value: String,
}

/// "Artist • License" (or credit when no license), HTML stripped.
pub fn build_attribution(metadata: Option<&HashMap<String, MetadataValue>>) -> Option<String> {
    let metadata = metadata?;
    let field = |key: &str| strip_html_opt(metadata.get(key).map(|m| m.value.as_str()));

    let artist = field("Artist");
    let license = field("LicenseShortName").or_else(|| field("Credit"));

    let parts: Vec<String> = [artist, license].into_iter().flatten().collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" • "))
    }
}

/// "Street, Number" or just "Street" from OSM address tags.
pub fn format_address(tags: &HashMap<String, String>) -> Option<String> {
    let street = tags.get("addr:street")?;
    match tags.get("addr:housenumber") {
        Some(number) => Some(format!("{}, {}", street, number)),
        None => Some(street.clone()),
    }
}

/// Whether `tags` satisfy an OSM filter such as `amenity=cafe` or `historic=*`.
pub fn tag_matches(filter: &str, tags: &HashMap<String, String>) -> bool {
    let (key, value) = split_filter(filter);
    match value {
        None | Some("*") => tags.contains_key(key),
        Some(value) => tags.get(key).map(|v| v == value).unwrap_or(false),
    }
}

pub fn split_filter(filter: &str) -> (&str, Option<&str>) {
    match filter.split_once('=') {
        Some((key, value)) => (key.trim().trim_matches('"'), Some(value.trim())),
        None => (filter.trim().trim_matches('"'), None),
    }
}

/// First place type (in declaration order) whose filters match the tags,
/// else the first requested type.
pub fn infer_place_type(
    requested: &[PlaceType],
    filters: &[(PlaceType, Vec<String>)],
    tags: &HashMap<String, String>,
) -> PlaceType {
    filters
        .iter()
        .find(|(_, type_filters)| type_filters.iter().any(|f| tag_matches(f, tags)))
        .map(|(place_type, _)| *place_type)
        .or_else(|| requested.first().copied())
        .unwrap_or(PlaceType::Loja)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<i>Ovos</i> moles"), "Ovos moles");
        assert_eq!(strip_html("  plain  "), "plain");
        assert_eq!(strip_html("a < b"), "a < b");
        assert_eq!(strip_html("P&atilde;o de L&oacute;"), "Pão de Ló");
    }

    #[test]
    fn test_strip_html_opt_blank() {
        assert_eq!(strip_html_opt(Some("<br/>")), None);
        assert_eq!(strip_html_opt(None), None);
    }

    #[test]
    fn test_sanitize_image_url() {
        assert_eq!(sanitize_image_url(Some(" https://x/y.jpg ")), Some("https://x/y.jpg".into()));
        assert_eq!(sanitize_image_url(Some("   ")), None);
        assert_eq!(sanitize_image_url(Some("<img src=x>")), None);
        assert_eq!(sanitize_image_url(None), None);
    }

    #[test]
    fn test_resolve_image_source() {
        assert_eq!(resolve_image_source(&[None, Some(""), Some("b")]), "b");
        assert_eq!(resolve_image_source(&[Some("a"), Some("b")]), "a");
        assert_eq!(resolve_image_source(&[None]), DEFAULT_IMAGE);
    }

    #[test]
    fn test_build_attribution() {
        let mut meta = HashMap::new();
        meta.insert("Artist".to_string(), MetadataValue { value: "<a href='x'>Ana</a>".into() });
        meta.insert("LicenseShortName".to_string(), MetadataValue { value: "CC BY-SA 4.0".into() });
        meta.insert("Credit".to_string(), MetadataValue { value: "Own work".into() });
        assert_eq!(build_attribution(Some(&meta)), Some("Ana • CC BY-SA 4.0".into()));

        meta.remove("LicenseShortName");
        assert_eq!(build_attribution(Some(&meta)), Some("Ana • Own work".into()));

        assert_eq!(build_attribution(Some(&HashMap::new())), None);
        assert_eq!(build_attribution(None), None);
    }

    #[test]
    fn test_format_address() {
        let full = tags(&[("addr:street", "Rua Direita"), ("addr:housenumber", "12")]);
        assert_eq!(format_address(&full), Some("Rua Direita, 12".into()));

        let street = tags(&[("addr:street", "Rua Direita")]);
        assert_eq!(format_address(&street), Some("Rua Direita".into()));

        let number_only = tags(&[("addr:housenumber", "12")]);
        assert_eq!(format_address(&number_only), None);
    }

    #[test]
    fn test_tag_matches() {
        let t = tags(&[("amenity", "cafe"), ("historic", "monument")]);
        assert!(tag_matches("amenity=cafe", &t));
        assert!(!tag_matches("amenity=restaurant", &t));
        assert!(tag_matches("historic=*", &t));
        assert!(!tag_matches("tourism=*", &t));
    }

    #[test]
    fn test_infer_place_type() {
        let filters = vec![
            (PlaceType::Loja, vec!["shop=pastry".to_string()]),
            (PlaceType::Restaurante, vec!["amenity=cafe".to_string()]),
            (PlaceType::Historico, vec!["historic=*".to_string()]),
        ];

        let cafe = tags(&[("amenity", "cafe"), ("historic", "yes")]);
        assert_eq!(
            infer_place_type(&[PlaceType::Historico], &filters, &cafe),
            PlaceType::Restaurante
        );

        let unknown = tags(&[("leisure", "park")]);
        assert_eq!(
            infer_place_type(&[PlaceType::Historico, PlaceType::Loja], &filters, &unknown),
            PlaceType::Historico
        );
    }
}

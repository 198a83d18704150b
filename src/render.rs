//! Terminal formatting for catalog pages and detail records.
//!
//! Pure string building, kept out of `run()` so it can be tested without a
//! network or a terminal.

use crate::api::{PokemonDetailed, PokemonResponse};

/// Render one page of the listing. `offset` is the page's starting position
/// in the overall catalog, used to number entries 1-based across pages.
pub fn format_list(page: &PokemonResponse, offset: u32) -> String {
    let mut out = String::new();
    for (i, entry) in page.results.iter().enumerate() {
        out.push_str(&format!(
            "{:>5}  {:<16} {}\n",
            offset as u64 + i as u64 + 1,
            entry.name,
            entry.url
        ));
    }
    out.push_str(&format!(
        "showing {} of {} entries\n",
        page.results.len(),
        page.count
    ));
    if page.next.is_some() {
        out.push_str("more available: raise --offset to continue\n");
    }
    if page.previous.is_some() {
        out.push_str("earlier entries: lower --offset to go back\n");
    }
    out
}

/// Render a detail record: physical attributes, type tags in slot order, and
/// the artwork URL when present.
pub fn format_detail(detail: &PokemonDetailed) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", detail.name));
    out.push_str(&format!("  height: {}\n", detail.height));
    out.push_str(&format!("  weight: {}\n", detail.weight));
    out.push_str(&format!("  types:  {}\n", detail.type_names().join(", ")));
    match detail.artwork_url() {
        Some(url) => out.push_str(&format!("  art:    {}\n", url)),
        None => out.push_str("  art:    (none)\n"),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_page(next: bool, previous: bool) -> PokemonResponse {
        serde_json::from_str(&format!(
            r#"{{
                "count": 1302,
                "next": {},
                "previous": {},
                "results": [
                    {{"name": "charmander", "url": "https://pokeapi.co/api/v2/pokemon/4/"}},
                    {{"name": "charmeleon", "url": "https://pokeapi.co/api/v2/pokemon/5/"}}
                ]
            }}"#,
            if next { "\"https://pokeapi.co/api/v2/pokemon?offset=20\"" } else { "null" },
            if previous { "\"https://pokeapi.co/api/v2/pokemon?offset=0\"" } else { "null" },
        ))
        .unwrap()
    }

    #[test]
    fn list_numbers_entries_from_offset() {
        let out = format_list(&sample_page(false, false), 3);
        let mut lines = out.lines();
        assert!(lines.next().unwrap().starts_with("    4  charmander"));
        assert!(lines.next().unwrap().starts_with("    5  charmeleon"));
        assert!(out.contains("showing 2 of 1302 entries"));
    }

    #[test]
    fn list_mentions_continuation_only_when_cursors_exist() {
        let first = format_list(&sample_page(true, false), 0);
        assert!(first.contains("more available"));
        assert!(!first.contains("earlier entries"));

        let middle = format_list(&sample_page(true, true), 20);
        assert!(middle.contains("more available"));
        assert!(middle.contains("earlier entries"));
    }

    #[test]
    fn detail_lists_types_and_art() {
        let detail = serde_json::from_str(
            r#"{
                "height": 6, "name": "charmander", "weight": 85,
                "sprites": {"other": {"official-artwork": {"front_default": "https://example.com/art/4.png"}}},
                "types": [{"slot": 1, "type": {"name": "fire", "url": "https://pokeapi.co/api/v2/type/10/"}}]
            }"#,
        )
        .unwrap();
        let out = format_detail(&detail);
        assert!(out.starts_with("charmander\n"));
        assert!(out.contains("height: 6"));
        assert!(out.contains("weight: 85"));
        assert!(out.contains("types:  fire"));
        assert!(out.contains("art:    https://example.com/art/4.png"));
    }

    #[test]
    fn detail_handles_missing_art() {
        let detail = serde_json::from_str(
            r#"{
                "height": 1, "name": "missingno", "weight": 1,
                "sprites": {"other": {"official-artwork": {"front_default": null}}},
                "types": []
            }"#,
        )
        .unwrap();
        assert!(format_detail(&detail).contains("art:    (none)"));
    }
}

//! Data shapes for the species catalog API.
//!
//! These structs are read-only views over JSON responses from the remote API:
//! nothing in this crate constructs or mutates them. Deserialization is
//! deliberately permissive — unknown fields are ignored, `results` may be
//! empty, and the pagination cursors are nullable — matching what the API
//! actually returns rather than what a stricter schema would demand.

use serde::Deserialize;

/// A named API resource: one catalog entry in the listing, or any nested
/// `{ name, url }` reference inside a detail record.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub name: String,
    pub url: String,
}

/// One page of the paginated listing.
///
/// `results` ordering is display order. `next` and `previous` are
/// continuation cursors (absolute URLs); `None` means there is no page in
/// that direction.
#[derive(Debug, Deserialize)]
pub struct PokemonResponse {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<Pokemon>,
}

/// Full record for one catalog entry.
#[derive(Debug, Deserialize)]
pub struct PokemonDetailed {
    pub height: u64,
    pub name: String,
    pub sprites: Sprites,
    pub types: Vec<TypeSlot>,
    pub weight: u64,
}

#[derive(Debug, Deserialize)]
pub struct Sprites {
    pub other: SpritesOther,
}

#[derive(Debug, Deserialize)]
pub struct SpritesOther {
    #[serde(rename = "official-artwork")]
    pub official_artwork: OfficialArtwork,
}

/// The artwork URL may be absent for some records.
#[derive(Debug, Deserialize)]
pub struct OfficialArtwork {
    pub front_default: Option<String>,
}

/// A categorical type tag on a detail record. `slot` values are unique per
/// record and denote display precedence when a record carries several tags.
#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    pub slot: u64,
    #[serde(rename = "type")]
    pub kind: Pokemon,
}

impl PokemonDetailed {
    /// Type tag names ordered by `slot`.
    pub fn type_names(&self) -> Vec<&str> {
        let mut slots: Vec<&TypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|t| t.slot);
        slots.iter().map(|t| t.kind.name.as_str()).collect()
    }

    /// Official artwork URL, if the record has one.
    pub fn artwork_url(&self) -> Option<&str> {
        self.sprites.other.official_artwork.front_default.as_deref()
    }
}

//! HTTP access to the catalog API.
//!
//! Thin blocking wrapper around `reqwest`: one request per operation, no
//! retries, no caching. Errors (transport failures, non-success statuses,
//! malformed bodies) are flattened into a descriptive `String` for the CLI
//! to print.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::api::{PokemonDetailed, PokemonResponse};

/// Public instance of the catalog API.
pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";

/// Fetch one page of the listing.
pub fn fetch_page(base: &str, limit: u32, offset: u32) -> Result<PokemonResponse, String> {
    let url = format!(
        "{}/pokemon?limit={}&offset={}",
        base.trim_end_matches('/'),
        limit,
        offset
    );
    get_json(&url)
}

/// Fetch the detail record for one entry by name.
pub fn fetch_detail(base: &str, name: &str) -> Result<PokemonDetailed, String> {
    let url = format!("{}/pokemon/{}", base.trim_end_matches('/'), name);
    get_json(&url)
}

fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| format!("failed to build http client: {}", e))?;

    let resp = client
        .get(url)
        .send()
        .map_err(|e| format!("request to {} failed: {}", url, e))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(format!("{} returned {}", url, status));
    }

    resp.json()
        .map_err(|e| format!("malformed response from {}: {}", url, e))
}

//! Card models

use super::common::IconUrls;
use serde::Deserialize;

/// A card, either from the catalogue or a player's collection
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub max_level: Option<u32>,
    #[serde(default)]
    pub elixir_cost: Option<u32>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub icon_urls: Option<IconUrls>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_catalogue_card() {
        let card: Card = serde_json::from_value(json!({
            "id": 26000000,
            "name": "Knight",
            "maxLevel": 14,
            "elixirCost": 3,
            "rarity": "common",
            "iconUrls": { "medium": "https://api-assets.clashroyale.com/cards/300/knight.png" }
        }))
        .unwrap();

        assert_eq!(card.name, "Knight");
        assert_eq!(card.elixir_cost, Some(3));
        assert!(card.icon_urls.unwrap().medium.unwrap().ends_with(".png"));
    }
}

//! Message card price table
//!
//! Flat config document (`config/mensagem`) holding one price per message
//! card tier. Tier prices are edited leniently: anything that does not parse
//! stores zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Collection and document id of the message card price table
pub const MESSAGE_CARD_COLLECTION: &str = "config";
pub const MESSAGE_CARD_DOCUMENT: &str = "mensagem";

/// Tiers the console knows about
pub const MESSAGE_CARD_TIERS: [&str; 6] = [
    "digital",
    "digital_audio",
    "digital_fisico_audio",
    "digital_video",
    "fisico",
    "full_premium",
];

/// Tier name → price. Unknown tiers already in the document are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCardPrices {
    #[serde(with = "tier_prices")]
    tiers: BTreeMap<String, Decimal>,
}

impl MessageCardPrices {
    pub fn get(&self, tier: &str) -> Option<Decimal> {
        self.tiers.get(tier).copied()
    }

    /// Set a tier from raw form text; empty or unparseable text stores 0,
    /// negatives clamp to 0.
    pub fn set_tier(&mut self, tier: impl Into<String>, raw: &str) -> Decimal {
        let tier = tier.into();
        let price = match crate::util::parse_decimal(raw.trim()) {
            Some(value) => value.max(Decimal::ZERO),
            None => {
                tracing::debug!(tier = %tier, input = raw, "Unparseable tier price stored as zero");
                Decimal::ZERO
            }
        };
        self.tiers.insert(tier, price);
        price
    }

    /// Tiers in display order (alphabetical, as the document stores them)
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.tiers.iter().map(|(tier, price)| (tier.as_str(), *price))
    }

    /// Display label for a tier key (`digital_audio` → `digital audio`)
    pub fn label(tier: &str) -> String {
        tier.replace('_', " ")
    }
}

mod tier_prices {
    use rust_decimal::Decimal;
    use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::BTreeMap;

    pub fn serialize<S: Serializer>(
        tiers: &BTreeMap<String, Decimal>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        tiers
            .iter()
            .map(|(tier, price)| (tier.as_str(), price.to_f64().unwrap_or_default()))
            .collect::<BTreeMap<_, _>>()
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<String, Decimal>, D::Error> {
        let raw = BTreeMap::<String, f64>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .map(|(tier, price)| (tier, Decimal::from_f64(price).unwrap_or_default()))
            .collect())
    }
}

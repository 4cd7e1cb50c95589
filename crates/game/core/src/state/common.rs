/// Reward tier, ordered from lowest to highest.
///
/// The *top rarity* of a banner is the highest tier present in its rate
/// table (legendary on every shipped banner).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

/// Currency a banner charges in.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CurrencyKind {
    Gold,
    /// Premium currency.
    Gems,
    SummonTicket,
    SpecialTicket,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn rarity_orders_low_to_high() {
        let tiers: Vec<Rarity> = Rarity::iter().collect();
        let mut sorted = tiers.clone();
        sorted.sort();
        assert_eq!(tiers, sorted);
        assert!(Rarity::Legendary > Rarity::Epic);
    }

    #[test]
    fn parses_snake_case_names() {
        assert_eq!(Rarity::from_str("legendary").unwrap(), Rarity::Legendary);
        assert_eq!(
            CurrencyKind::from_str("summon_ticket").unwrap(),
            CurrencyKind::SummonTicket
        );
        assert_eq!(CurrencyKind::Gems.to_string(), "gems");
    }
}

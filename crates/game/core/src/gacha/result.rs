use chrono::{DateTime, Utc};

use crate::state::{
    BannerId, HeroTypeId, HeroWithDetails, ItemTemplateId, ItemWithTemplate, Rarity,
    SummonResultId, UserId,
};

/// Template a pull landed on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "result_type", content = "result_id", rename_all = "snake_case")
)]
pub enum SummonReward {
    Hero(HeroTypeId),
    Item(ItemTemplateId),
}

impl SummonReward {
    pub fn id(&self) -> &str {
        match self {
            Self::Hero(id) => id.as_str(),
            Self::Item(id) => id.as_str(),
        }
    }
}

/// Immutable record of one pull. Append-only.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummonResult {
    pub id: SummonResultId,
    pub user_id: UserId,
    pub banner_id: BannerId,
    pub timestamp: DateTime<Utc>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub reward: SummonReward,
    pub rarity: Rarity,
    pub is_featured: bool,
    pub is_pity_break: bool,
    /// 1-based pull index on this (user, banner) session.
    pub pull_number: u32,
}

/// Response for one summon request, results in pull order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummonMultiResult {
    pub banner_id: BannerId,
    pub banner_name: String,
    pub results: Vec<SummonResult>,
    pub new_heroes: Vec<HeroWithDetails>,
    pub new_items: Vec<ItemWithTemplate>,
}

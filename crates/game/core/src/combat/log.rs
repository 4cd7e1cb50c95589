/// One logged action. Area skills produce one entry per target hit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleAction {
    pub actor: String,
    pub target: String,
    pub skill_used: String,
    pub damage_dealt: u32,
    pub target_hp_remaining: u32,
}

/// Every action taken in one full turn, in acting order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleTurn {
    pub turn: u32,
    pub actions: Vec<BattleAction>,
}

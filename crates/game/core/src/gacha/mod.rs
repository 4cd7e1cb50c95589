//! Gacha summoning: rarity/pity resolution, reward selection, and the summon
//! engine that turns a request into results and a state delta.
mod engine;
mod pool;
mod rates;
mod resolver;
mod result;

pub use engine::{
    PullKind, SpentCurrency, SummonContext, SummonError, SummonOutcome, SummonRequest, summon,
};
pub use pool::{SelectedReward, select_reward};
pub use rates::{SummonRateInfo, rate_info};
pub use resolver::{PullResolution, ResolveError, resolve_pull, settle_guarantee};
pub use result::{SummonMultiResult, SummonResult, SummonReward};

//! Banner oracle implementation for runtime.

use std::collections::BTreeMap;

use game_core::env::{Banner, BannerOracle};
use game_core::state::BannerId;

/// Runtime implementation of BannerOracle backed by loaded content.
pub struct BannerOracleImpl {
    banners: BTreeMap<BannerId, Banner>,
}

impl BannerOracleImpl {
    pub fn new(banners: impl IntoIterator<Item = Banner>) -> Self {
        Self {
            banners: banners
                .into_iter()
                .map(|banner| (banner.id.clone(), banner))
                .collect(),
        }
    }
}

impl BannerOracle for BannerOracleImpl {
    fn banner(&self, id: &BannerId) -> Option<Banner> {
        self.banners.get(id).cloned()
    }

    fn banner_ids(&self) -> Vec<BannerId> {
        self.banners.keys().cloned().collect()
    }
}

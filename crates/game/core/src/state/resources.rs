use chrono::{DateTime, Utc};

use crate::state::{CurrencyKind, UserId};

/// Player wallet plus the idle-reward claim marker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerResources {
    pub user_id: UserId,
    pub gold: u64,
    pub gems: u64,
    pub summon_tickets: u64,
    pub special_tickets: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub last_idle_claim: Option<DateTime<Utc>>,
}

/// Debit rejected because the balance is too low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("need {required} {currency}, have {available}")]
pub struct InsufficientFunds {
    pub currency: CurrencyKind,
    pub required: u64,
    pub available: u64,
}

impl PlayerResources {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            ..Self::default()
        }
    }

    pub fn balance(&self, currency: CurrencyKind) -> u64 {
        match currency {
            CurrencyKind::Gold => self.gold,
            CurrencyKind::Gems => self.gems,
            CurrencyKind::SummonTicket => self.summon_tickets,
            CurrencyKind::SpecialTicket => self.special_tickets,
        }
    }

    fn balance_mut(&mut self, currency: CurrencyKind) -> &mut u64 {
        match currency {
            CurrencyKind::Gold => &mut self.gold,
            CurrencyKind::Gems => &mut self.gems,
            CurrencyKind::SummonTicket => &mut self.summon_tickets,
            CurrencyKind::SpecialTicket => &mut self.special_tickets,
        }
    }

    /// Removes `amount`; leaves the balance untouched on failure.
    pub fn debit(&mut self, currency: CurrencyKind, amount: u64) -> Result<(), InsufficientFunds> {
        let balance = self.balance_mut(currency);
        if *balance < amount {
            return Err(InsufficientFunds {
                currency,
                required: amount,
                available: *balance,
            });
        }
        *balance -= amount;
        Ok(())
    }

    pub fn credit(&mut self, currency: CurrencyKind, amount: u64) {
        let balance = self.balance_mut(currency);
        *balance = balance.saturating_add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debit_rejects_without_mutation() {
        let mut wallet = PlayerResources::new(UserId::from("u1"));
        wallet.gems = 50;
        let err = wallet.debit(CurrencyKind::Gems, 100).unwrap_err();
        assert_eq!(
            err,
            InsufficientFunds {
                currency: CurrencyKind::Gems,
                required: 100,
                available: 50
            }
        );
        assert_eq!(wallet.gems, 50);

        wallet.debit(CurrencyKind::Gems, 50).unwrap();
        assert_eq!(wallet.balance(CurrencyKind::Gems), 0);
    }

    #[test]
    fn credit_saturates() {
        let mut wallet = PlayerResources::new(UserId::from("u1"));
        wallet.gold = u64::MAX - 1;
        wallet.credit(CurrencyKind::Gold, 10);
        assert_eq!(wallet.gold, u64::MAX);
    }
}

//! String identifiers for players, owned records, and catalog templates.
//!
//! Every identifier is a distinct newtype so a hero id can never be passed
//! where a hero *type* id is expected.

use std::borrow::Borrow;
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Account that owns heroes, items, teams and sessions.
    UserId
);
string_id!(
    /// An owned hero record.
    HeroId
);
string_id!(
    /// An owned item stack.
    ItemId
);
string_id!(TeamId);
string_id!(MissionId);
string_id!(
    /// A single immutable pull record.
    SummonResultId
);
string_id!(BattleId);
string_id!(
    /// Catalog key of a summon banner.
    BannerId
);
string_id!(
    /// Catalog key of a hero template.
    HeroTypeId
);
string_id!(
    /// Catalog key of an item template.
    ItemTemplateId
);
string_id!(StageId);
string_id!(EnemyTypeId);
string_id!(SkillId);
string_id!(MissionTemplateId);

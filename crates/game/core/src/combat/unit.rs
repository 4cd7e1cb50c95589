use crate::env::Skill;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Side {
    Team,
    Enemy,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Self::Team => Self::Enemy,
            Self::Enemy => Self::Team,
        }
    }
}

/// One participant in a fight, built fresh from a template for each battle.
#[derive(Clone, Debug, PartialEq)]
pub struct Combatant {
    /// Hero id for team members, `{enemy_type}-{position}` for enemies.
    pub id: String,
    pub name: String,
    pub side: Side,
    /// 1-based slot on its side.
    pub position: usize,
    pub max_hp: u32,
    pub current_hp: u32,
    pub atk: u32,
    pub skills: Vec<Skill>,
    /// Remaining cooldown per skill, parallel to `skills`.
    pub cooldowns: Vec<u32>,
}

impl Combatant {
    /// Full-HP combatant with every skill ready. An empty skill list becomes
    /// a basic attack.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        side: Side,
        position: usize,
        hp: u32,
        atk: u32,
        skills: Vec<Skill>,
    ) -> Self {
        let skills = if skills.is_empty() {
            vec![Skill::basic_attack()]
        } else {
            skills
        };
        let cooldowns = vec![0; skills.len()];
        Self {
            id: id.into(),
            name: name.into(),
            side,
            position,
            max_hp: hp,
            current_hp: hp,
            atk,
            skills,
            cooldowns,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    /// Index of the first skill whose cooldown has run out.
    pub fn first_ready_skill(&self) -> Option<usize> {
        self.cooldowns.iter().position(|remaining| *remaining == 0)
    }
}

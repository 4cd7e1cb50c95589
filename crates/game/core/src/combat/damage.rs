//! Damage calculation and application.

use super::unit::Combatant;

/// `floor(atk * multiplier)`, never negative.
pub fn calculate_damage(atk: u32, multiplier: f64) -> u32 {
    let raw = (atk as f64 * multiplier).floor();
    if raw.is_nan() || raw <= 0.0 {
        0
    } else if raw >= u32::MAX as f64 {
        u32::MAX
    } else {
        raw as u32
    }
}

/// Subtracts `damage` from `target`, flooring HP at zero.
///
/// Returns the remaining HP.
pub fn apply_damage(target: &mut Combatant, damage: u32) -> u32 {
    target.current_hp = target.current_hp.saturating_sub(damage);
    target.current_hp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_is_floored() {
        assert_eq!(calculate_damage(50, 1.0), 50);
        assert_eq!(calculate_damage(33, 1.5), 49);
        assert_eq!(calculate_damage(10, 0.0), 0);
        assert_eq!(calculate_damage(10, -2.0), 0);
    }
}

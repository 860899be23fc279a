//! Experience, level-ups and skill-point allocation
//!
//! # Leveling
//!
//! Each grant adds to `xp`; crossing `xp_needed` levels up once per grant.
//! The next threshold grows by a rate picked from the new level:
//!
//! ```
//! use sidescroll_quest::progression::{ProgressionModel, Stats};
//!
//! let mut model = ProgressionModel::new(Stats { xp: 45, ..Stats::default() });
//! assert_eq!(model.add_experience(10), Some(1));
//! assert_eq!(model.stats().xp_needed, 75);
//! ```
//!
//! # Skill points
//!
//! Points are spent through a [`StatAllocation`], a pending copy of the
//! record that can be spent into and refunded from before it is applied.
//! Both directions are guarded no-ops when there is nothing to move.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Threshold for the first level-up
pub const BASE_XP_NEEDED: u32 = 50;

/// A character's stat record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Stats {
    pub hp: i32,
    pub mana: i32,
    pub stamina: i32,
    pub strength: f32,
    pub attack_speed: f32,
    pub armor: i32,
    /// Experience collected toward the next level
    pub xp: u32,
    /// Experience at which the next level-up happens
    pub xp_needed: u32,
    /// Unspent skill points
    pub skill_points: u32,
    pub level: u32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            hp: 100,
            mana: 100,
            stamina: 100,
            strength: 1.0,
            attack_speed: 1.0,
            armor: 0,
            xp: 0,
            xp_needed: BASE_XP_NEEDED,
            skill_points: 0,
            level: 0,
        }
    }
}

impl Stats {
    /// Flat `name -> number` record for an external store
    pub fn to_record(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                log::error!("Stat record encoded as a non-object: {other}");
                Map::new()
            }
            Err(e) => {
                log::error!("Could not encode stat record: {e}");
                Map::new()
            }
        }
    }

    /// Restore from a flat record. Missing fields take their defaults.
    pub fn from_record(record: &Map<String, Value>) -> Result<Self, serde_json::Error> {
        let mut stats: Stats = serde_json::from_value(Value::Object(record.clone()))?;
        if stats.xp_needed == 0 {
            log::warn!("Stat record has xpNeeded = 0; using {BASE_XP_NEEDED}");
            stats.xp_needed = BASE_XP_NEEDED;
        }
        Ok(stats)
    }

    /// Label/value rows for a stat table
    pub fn sheet(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Max HP:", self.hp.to_string()),
            ("Max Mana:", self.mana.to_string()),
            ("Max Stamina:", self.stamina.to_string()),
            ("Strength:", format!("{:.2}", self.strength)),
            ("Attack Speed:", format!("{:.2}", self.attack_speed)),
            ("Armor:", self.armor.to_string()),
            ("Experience:", format!("{} / {}", self.xp, self.xp_needed)),
            ("Level:", self.level.to_string()),
            ("Available Skill Points:", self.skill_points.to_string()),
        ]
    }
}

/// Growth rate applied to `xp_needed` when reaching `level`.
///
/// The tiers are checked top to bottom and the first match wins, so once
/// `level > 8` the 0.4 and 0.3 tiers are never reached.
pub fn growth_rate(level: u32) -> f64 {
    if level > 8 {
        0.45
    } else if level > 16 {
        0.4
    } else if level > 25 {
        0.3
    } else {
        0.5
    }
}

/// Owns a stat record and applies experience to it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressionModel {
    stats: Stats,
}

impl ProgressionModel {
    pub fn new(stats: Stats) -> Self {
        Self { stats }
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn into_stats(self) -> Stats {
        self.stats
    }

    /// Add experience. Levels up at most once per call.
    ///
    /// Returns the new level if a level-up happened.
    pub fn add_experience(&mut self, amount: u32) -> Option<u32> {
        self.stats.xp = self.stats.xp.saturating_add(amount);
        if self.stats.xp >= self.stats.xp_needed {
            self.level_up();
            Some(self.stats.level)
        } else {
            None
        }
    }

    /// Gain a level and a skill point, then raise the next threshold
    pub fn level_up(&mut self) {
        self.stats.level += 1;
        self.stats.skill_points += 1;

        let rate = growth_rate(self.stats.level);
        let needed = self.stats.xp_needed as f64;
        self.stats.xp_needed = (needed + needed * rate).floor() as u32;

        log::info!(
            "Level up: level {} (next at {} xp, {} skill points)",
            self.stats.level,
            self.stats.xp_needed,
            self.stats.skill_points
        );
    }

    /// Start spending skill points against the current record
    pub fn begin_allocation(&self) -> StatAllocation {
        StatAllocation::new(&self.stats)
    }

    /// Apply an allocation's spends to the current record.
    ///
    /// Spends are added on top of the live stats so experience gained while
    /// the allocation was open is kept. Returns false (and changes nothing)
    /// if the record no longer has enough skill points.
    pub fn apply_allocation(&mut self, allocation: &StatAllocation) -> bool {
        let total = allocation.total_spent();
        if total > self.stats.skill_points {
            log::warn!(
                "Allocation spends {total} points but only {} are available",
                self.stats.skill_points
            );
            return false;
        }

        for kind in StatKind::ALL {
            kind.apply(&mut self.stats, allocation.spent(kind));
        }
        self.stats.skill_points -= total;
        log::debug!("Applied {total} skill points");
        true
    }
}

/// Stats that skill points can raise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Hp,
    Mana,
    Stamina,
    Strength,
    AttackSpeed,
}

impl StatKind {
    pub const ALL: [StatKind; 5] = [
        StatKind::Hp,
        StatKind::Mana,
        StatKind::Stamina,
        StatKind::Strength,
        StatKind::AttackSpeed,
    ];

    fn index(self) -> usize {
        match self {
            StatKind::Hp => 0,
            StatKind::Mana => 1,
            StatKind::Stamina => 2,
            StatKind::Strength => 3,
            StatKind::AttackSpeed => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatKind::Hp => "hp",
            StatKind::Mana => "mana",
            StatKind::Stamina => "stamina",
            StatKind::Strength => "strength",
            StatKind::AttackSpeed => "attackSpeed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "hp" => Some(StatKind::Hp),
            "mana" => Some(StatKind::Mana),
            "stamina" => Some(StatKind::Stamina),
            "strength" => Some(StatKind::Strength),
            "attackSpeed" | "attack_speed" => Some(StatKind::AttackSpeed),
            _ => None,
        }
    }

    /// Raise this stat by `points` increments
    fn apply(self, stats: &mut Stats, points: u32) {
        if points == 0 {
            return;
        }
        match self {
            StatKind::Hp => stats.hp += 5 * points as i32,
            StatKind::Mana => stats.mana += 5 * points as i32,
            StatKind::Stamina => stats.stamina += 5 * points as i32,
            StatKind::Strength => stats.strength += 0.1 * points as f32,
            StatKind::AttackSpeed => stats.attack_speed += 0.05 * points as f32,
        }
    }
}

/// Pending skill-point spends against a base record
#[derive(Debug, Clone, PartialEq)]
pub struct StatAllocation {
    base: Stats,
    spent: [u32; 5],
}

impl StatAllocation {
    pub fn new(base: &Stats) -> Self {
        Self {
            base: base.clone(),
            spent: [0; 5],
        }
    }

    pub fn spent(&self, kind: StatKind) -> u32 {
        self.spent[kind.index()]
    }

    pub fn total_spent(&self) -> u32 {
        self.spent.iter().sum()
    }

    /// Points still free to spend
    pub fn available(&self) -> u32 {
        self.base.skill_points - self.total_spent()
    }

    /// Spend one point on `kind`. No-op when no points are left.
    pub fn spend(&mut self, kind: StatKind) -> bool {
        if self.available() == 0 {
            return false;
        }
        self.spent[kind.index()] += 1;
        log::debug!("Spent a point on {}", kind.as_str());
        true
    }

    /// Take back one point from `kind`. No-op when none was spent there.
    pub fn refund(&mut self, kind: StatKind) -> bool {
        let slot = &mut self.spent[kind.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        log::debug!("Refunded a point from {}", kind.as_str());
        true
    }

    /// The record as it would look with these spends
    pub fn pending(&self) -> Stats {
        let mut stats = self.base.clone();
        for kind in StatKind::ALL {
            kind.apply(&mut stats, self.spent(kind));
        }
        stats.skill_points = self.available();
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults() {
        let stats = Stats::default();
        assert_eq!(stats.hp, 100);
        assert_eq!(stats.strength, 1.0);
        assert_eq!(stats.xp_needed, 50);
        assert_eq!(stats.level, 0);
    }

    #[test]
    fn test_single_level_up_per_grant() {
        let mut model = ProgressionModel::new(Stats {
            xp: 45,
            ..Stats::default()
        });
        assert_eq!(model.add_experience(10), Some(1));
        let stats = model.stats();
        assert_eq!(stats.level, 1);
        assert_eq!(stats.skill_points, 1);
        assert_eq!(stats.xp_needed, 75);
        assert_eq!(stats.xp, 55);
    }

    #[test]
    fn test_large_grant_still_levels_once() {
        let mut model = ProgressionModel::default();
        // 500 clears 50 and 75 and more, but only one level is gained
        assert_eq!(model.add_experience(500), Some(1));
        assert_eq!(model.stats().level, 1);
        assert_eq!(model.stats().xp_needed, 75);
        // The next grant of any size levels again
        assert_eq!(model.add_experience(0), Some(2));
        assert_eq!(model.stats().xp_needed, 112);
    }

    #[test]
    fn test_below_threshold_no_level() {
        let mut model = ProgressionModel::default();
        assert_eq!(model.add_experience(49), None);
        assert_eq!(model.stats().xp, 49);
        assert_eq!(model.stats().level, 0);
    }

    #[test]
    fn test_experience_is_additive() {
        let mut model = ProgressionModel::default();
        model.add_experience(10);
        model.add_experience(15);
        assert_eq!(model.stats().xp, 25);
    }

    #[test]
    fn test_growth_rate_precedence() {
        assert_eq!(growth_rate(1), 0.5);
        assert_eq!(growth_rate(8), 0.5);
        assert_eq!(growth_rate(9), 0.45);
        assert_eq!(growth_rate(17), 0.45);
        assert_eq!(growth_rate(26), 0.45);
        assert_eq!(growth_rate(100), 0.45);
    }

    #[test]
    fn test_level_nine_uses_045() {
        let mut model = ProgressionModel::new(Stats {
            level: 8,
            xp_needed: 1000,
            ..Stats::default()
        });
        model.level_up();
        assert_eq!(model.stats().level, 9);
        assert_eq!(model.stats().xp_needed, 1450);

        let mut model = ProgressionModel::new(Stats {
            level: 30,
            xp_needed: 1000,
            ..Stats::default()
        });
        model.level_up();
        assert_eq!(model.stats().xp_needed, 1450);
    }

    #[test]
    fn test_threshold_never_decreases() {
        let mut model = ProgressionModel::default();
        let mut last = model.stats().xp_needed;
        for _ in 0..30 {
            model.level_up();
            assert!(model.stats().xp_needed >= last);
            last = model.stats().xp_needed;
        }
    }

    #[test]
    fn test_spend_without_points_is_noop() {
        let mut alloc = StatAllocation::new(&Stats::default());
        assert!(!alloc.spend(StatKind::Hp));
        assert_eq!(alloc.pending(), Stats::default());
    }

    #[test]
    fn test_refund_without_spend_is_noop() {
        let stats = Stats {
            skill_points: 2,
            ..Stats::default()
        };
        let mut alloc = StatAllocation::new(&stats);
        alloc.spend(StatKind::Mana);
        assert!(!alloc.refund(StatKind::Hp));
        assert_eq!(alloc.spent(StatKind::Mana), 1);
    }

    #[test]
    fn test_spend_increments() {
        let stats = Stats {
            skill_points: 5,
            ..Stats::default()
        };
        let mut alloc = StatAllocation::new(&stats);
        for kind in StatKind::ALL {
            assert!(alloc.spend(kind));
        }
        assert!(!alloc.spend(StatKind::Hp));

        let pending = alloc.pending();
        assert_eq!(pending.hp, 105);
        assert_eq!(pending.mana, 105);
        assert_eq!(pending.stamina, 105);
        assert!((pending.strength - 1.1).abs() < 1e-6);
        assert!((pending.attack_speed - 1.05).abs() < 1e-6);
        assert_eq!(pending.skill_points, 0);
    }

    #[test]
    fn test_spend_then_refund_round_trip() {
        let stats = Stats {
            skill_points: 3,
            ..Stats::default()
        };
        let mut alloc = StatAllocation::new(&stats);
        assert!(alloc.spend(StatKind::Strength));
        assert!(alloc.refund(StatKind::Strength));
        assert_eq!(alloc.pending(), stats);
    }

    #[test]
    fn test_apply_allocation_keeps_new_experience() {
        let mut model = ProgressionModel::new(Stats {
            skill_points: 2,
            ..Stats::default()
        });
        let mut alloc = model.begin_allocation();
        alloc.spend(StatKind::Hp);
        alloc.spend(StatKind::Hp);

        model.add_experience(20);
        assert!(model.apply_allocation(&alloc));
        assert_eq!(model.stats().hp, 110);
        assert_eq!(model.stats().skill_points, 0);
        assert_eq!(model.stats().xp, 20);
    }

    #[test]
    fn test_apply_allocation_rejects_overspend() {
        let stats = Stats {
            skill_points: 1,
            ..Stats::default()
        };
        let mut alloc = StatAllocation::new(&stats);
        alloc.spend(StatKind::Mana);

        let mut model = ProgressionModel::default();
        assert!(!model.apply_allocation(&alloc));
        assert_eq!(model.stats(), &Stats::default());
    }

    #[test]
    fn test_record_round_trip() {
        let stats = Stats {
            hp: 120,
            strength: 1.5,
            xp: 30,
            level: 3,
            ..Stats::default()
        };
        let record = stats.to_record();
        assert_eq!(record.len(), 10);
        assert_eq!(record["hp"], Value::from(120));
        assert_eq!(record["attackSpeed"], Value::from(1.0));
        assert!(record.contains_key("xpNeeded"));
        assert!(record.contains_key("skillPoints"));
        assert_eq!(Stats::from_record(&record).unwrap(), stats);
    }

    #[test]
    fn test_record_missing_fields_use_defaults() {
        let mut record = Map::new();
        record.insert("level".into(), Value::from(4));
        record.insert("xpNeeded".into(), Value::from(0));
        let stats = Stats::from_record(&record).unwrap();
        assert_eq!(stats.level, 4);
        assert_eq!(stats.hp, 100);
        assert_eq!(stats.xp_needed, BASE_XP_NEEDED);
    }

    #[test]
    fn test_record_rejects_negative_xp() {
        let mut record = Map::new();
        record.insert("xp".into(), Value::from(-5));
        assert!(Stats::from_record(&record).is_err());
    }

    #[test]
    fn test_sheet_formatting() {
        let sheet = Stats::default().sheet();
        assert_eq!(sheet[0], ("Max HP:", "100".to_string()));
        assert_eq!(sheet[3], ("Strength:", "1.00".to_string()));
        assert_eq!(sheet[6], ("Experience:", "0 / 50".to_string()));
        assert_eq!(sheet.len(), 9);
    }

    #[test]
    fn test_stat_kind_names() {
        for kind in StatKind::ALL {
            assert_eq!(StatKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(StatKind::from_str("armor"), None);
    }

    proptest! {
        #[test]
        fn prop_spend_refund_round_trip(
            points in 0u32..10,
            picks in proptest::collection::vec(0usize..5, 0..20),
        ) {
            let stats = Stats { skill_points: points, ..Stats::default() };
            let mut alloc = StatAllocation::new(&stats);

            let mut spent = Vec::new();
            for i in picks {
                let kind = StatKind::ALL[i];
                if alloc.spend(kind) {
                    spent.push(kind);
                }
            }
            prop_assert!(alloc.total_spent() <= points);

            for kind in spent.into_iter().rev() {
                prop_assert!(alloc.refund(kind));
            }
            prop_assert_eq!(alloc.pending(), stats);
        }
    }
}

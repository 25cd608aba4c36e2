//! Seven-day sign-in rewards.
//!
//! Signing in on consecutive days advances a streak that cycles through
//! days 1 to 7. Missing a day resets it to 1. The reward for the current
//! streak day can be claimed once per calendar day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Length of the reward cycle.
pub const SIGN_IN_CYCLE_DAYS: u32 = 7;

/// A static sign-in reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SignInReward {
    /// Streak day (1..=7).
    pub day: u32,
    /// Points awarded.
    pub reward: u64,
    /// Display icon.
    pub icon: &'static str,
    /// Description.
    pub description: &'static str,
}

/// Rewards for each day of the cycle.
pub const SIGN_IN_REWARDS: &[SignInReward] = &[
    SignInReward {
        day: 1,
        reward: 100,
        icon: "🎁",
        description: "Welcome back! Earn 100 points",
    },
    SignInReward {
        day: 2,
        reward: 150,
        icon: "🎀",
        description: "2-day streak, earn 150 points",
    },
    SignInReward {
        day: 3,
        reward: 200,
        icon: "🎊",
        description: "3-day streak, earn 200 points",
    },
    SignInReward {
        day: 4,
        reward: 250,
        icon: "🏆",
        description: "4-day streak, earn 250 points",
    },
    SignInReward {
        day: 5,
        reward: 300,
        icon: "⭐",
        description: "5-day streak, earn 300 points",
    },
    SignInReward {
        day: 6,
        reward: 400,
        icon: "💫",
        description: "6-day streak, earn 400 points",
    },
    SignInReward {
        day: 7,
        reward: 500,
        icon: "👑",
        description: "Full week! Earn 500 points and a special badge",
    },
];

/// The reward for a streak day, if `day` is within the cycle.
pub fn sign_in_reward_for_day(day: u32) -> Option<&'static SignInReward> {
    SIGN_IN_REWARDS.iter().find(|r| r.day == day)
}

/// Next streak value when signing in on `today`.
///
/// * no previous sign-in: 1
/// * same day (or a clock that went backwards): unchanged
/// * exactly one day later: next day in the cycle, wrapping 7 to 1
/// * any longer gap: 1
pub fn advance_sign_in_streak(previous: Option<NaiveDate>, streak: u32, today: NaiveDate) -> u32 {
    let Some(previous) = previous else {
        return 1;
    };
    let current = streak.max(1);
    match today.signed_duration_since(previous).num_days() {
        days if days <= 0 => current,
        1 => current
            .checked_rem(SIGN_IN_CYCLE_DAYS)
            .map_or(1, |d| d.saturating_add(1)),
        _ => 1,
    }
}

/// Persisted sign-in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInProgress {
    /// Date of the last sign-in.
    pub last_sign_in_date: Option<NaiveDate>,
    /// Current streak day (1..=7, 0 before the first sign-in).
    pub streak: u32,
    /// Total rewards claimed over all time.
    pub rewards_claimed: u32,
    /// Date the last reward was claimed.
    pub last_claim_date: Option<NaiveDate>,
}

impl SignInProgress {
    /// Record a sign-in on `today` and return the current streak day.
    pub fn check_in(&mut self, today: NaiveDate) -> u32 {
        if self.last_sign_in_date != Some(today) {
            self.streak = advance_sign_in_streak(self.last_sign_in_date, self.streak, today);
            self.last_sign_in_date = Some(today);
        }
        self.streak
    }

    /// Whether the reward for `day` can be claimed on `today`.
    pub fn can_claim(&self, day: u32, today: NaiveDate) -> bool {
        self.last_sign_in_date == Some(today)
            && day == self.streak
            && self.last_claim_date != Some(today)
    }

    /// Claim the reward for `day`, returning it if the claim is allowed.
    pub fn claim(&mut self, day: u32, today: NaiveDate) -> Option<&'static SignInReward> {
        if !self.can_claim(day, today) {
            return None;
        }
        let reward = sign_in_reward_for_day(day)?;
        self.last_claim_date = Some(today);
        self.rewards_claimed = self.rewards_claimed.saturating_add(1);
        Some(reward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_sign_in_starts_at_one() {
        assert_eq!(advance_sign_in_streak(None, 0, date(2026, 1, 1)), 1);
        assert_eq!(advance_sign_in_streak(None, 5, date(2026, 1, 1)), 1);
    }

    #[test]
    fn consecutive_day_advances() {
        let today = date(2026, 1, 2);
        assert_eq!(advance_sign_in_streak(Some(date(2026, 1, 1)), 3, today), 4);
    }

    #[test]
    fn seventh_day_wraps_to_one() {
        let today = date(2026, 1, 8);
        assert_eq!(advance_sign_in_streak(Some(date(2026, 1, 7)), 7, today), 1);
    }

    #[test]
    fn same_day_and_gaps() {
        let today = date(2026, 1, 10);
        assert_eq!(advance_sign_in_streak(Some(today), 4, today), 4);
        assert_eq!(advance_sign_in_streak(Some(date(2026, 1, 7)), 4, today), 1);
        assert_eq!(advance_sign_in_streak(Some(date(2026, 1, 12)), 4, today), 4);
    }

    #[test]
    fn rewards_escalate() {
        assert_eq!(sign_in_reward_for_day(1).map(|r| r.reward), Some(100));
        assert_eq!(sign_in_reward_for_day(7).map(|r| r.reward), Some(500));
        assert!(sign_in_reward_for_day(0).is_none());
        assert!(sign_in_reward_for_day(8).is_none());
        assert_eq!(SIGN_IN_REWARDS.len(), 7);
    }

    #[test]
    fn check_in_then_claim_once_per_day() {
        let mut progress = SignInProgress::default();
        let day1 = date(2026, 2, 1);
        assert_eq!(progress.check_in(day1), 1);
        assert!(progress.claim(2, day1).is_none());
        assert_eq!(progress.claim(1, day1).map(|r| r.reward), Some(100));
        assert!(progress.claim(1, day1).is_none());

        let day2 = date(2026, 2, 2);
        assert_eq!(progress.check_in(day2), 2);
        assert_eq!(progress.check_in(day2), 2);
        assert_eq!(progress.claim(2, day2).map(|r| r.reward), Some(150));
        assert_eq!(progress.rewards_claimed, 2);
    }
}

use serde::{Deserialize, Serialize};

/// How the UI should present an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Positive,
    Warning,
    Urgent,
    Encouragement,
}

/// Which rule produced an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsightKind {
    FrivolousSpending,
    AheadOfPlan,
    BehindPlan,
    BillsDueSoon,
    StreakStrong,
    StreakMild,
    GoalReached,
}

impl InsightKind {
    pub fn icon(&self) -> &'static str {
        match self {
            InsightKind::FrivolousSpending => "⚠️",
            InsightKind::AheadOfPlan => "🎉",
            InsightKind::BehindPlan => "📉",
            InsightKind::BillsDueSoon => "🔔",
            InsightKind::StreakStrong => "🔥",
            InsightKind::StreakMild => "⚡",
            InsightKind::GoalReached => "🏆",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            InsightKind::FrivolousSpending | InsightKind::BehindPlan => Severity::Warning,
            InsightKind::AheadOfPlan | InsightKind::GoalReached => Severity::Positive,
            InsightKind::BillsDueSoon => Severity::Urgent,
            InsightKind::StreakStrong | InsightKind::StreakMild => Severity::Encouragement,
        }
    }
}

/// A rule-based message shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub icon: String,
    pub text: String,
    pub severity: Severity,
}

impl Insight {
    pub fn new(kind: InsightKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            icon: kind.icon().to_string(),
            text: text.into(),
            severity: kind.severity(),
        }
    }
}

/// Goal-progress tier used to pick the motivational message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotivationTier {
    /// 100% or more
    GoalReached,
    /// 75% or more
    AlmostThere,
    /// 50% or more
    Halfway,
    /// 25% or more
    GoodStart,
    JustStarting,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotivationalMessage {
    pub tier: MotivationTier,
    pub text: String,
}

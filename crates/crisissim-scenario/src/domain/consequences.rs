//! Consequence rules: the ordered policy that turns a decision into outcome
//! text.
//!
//! A decision yields, in order: an acknowledgement echoing the decision, the
//! matching tone consequences, the crisis template's own consequences, and
//! one line per matching role rule. All matching is case-insensitive
//! substring matching.

use std::collections::BTreeMap;

/// When a consequence rule fires.
#[derive(Debug, Clone, Copy)]
pub enum Condition {
    /// The decision text contains `needle`.
    DecisionMentions(&'static str),
    /// The decision text contains `needle` and does not contain `unless`.
    DecisionMentionsUnless {
        /// Required substring.
        needle: &'static str,
        /// Substring that suppresses the rule.
        unless: &'static str,
    },
    /// Some acting role containing `role` submitted a decision containing
    /// `keyword`.
    RoleDecision {
        /// Substring of the role name.
        role: &'static str,
        /// Substring of that role's decision.
        keyword: &'static str,
    },
}

/// A `(condition, text)` pair.
#[derive(Debug, Clone, Copy)]
pub struct ConsequenceRule {
    /// When the rule fires.
    pub condition: Condition,
    /// Consequence text reported when it does.
    pub text: &'static str,
}

const fn rule(condition: Condition, text: &'static str) -> ConsequenceRule {
    ConsequenceRule { condition, text }
}

/// Panic and calm outcomes. Panic takes precedence when a decision mentions
/// both.
pub const TONE_RULES: &[ConsequenceRule] = &[
    rule(
        Condition::DecisionMentions("panic"),
        "Panic spreads through the crowd; the evacuation slows and injuries rise.",
    ),
    rule(
        Condition::DecisionMentions("panic"),
        "Responders lose time managing bystanders instead of executing the plan.",
    ),
    rule(
        Condition::DecisionMentionsUnless {
            needle: "calm",
            unless: "panic",
        },
        "Your calm direction keeps the public orderly and cooperative.",
    ),
    rule(
        Condition::DecisionMentionsUnless {
            needle: "calm",
            unless: "panic",
        },
        "Teams execute the plan efficiently under steady leadership.",
    ),
];

/// Role-specific outcomes.
pub const ROLE_RULES: &[ConsequenceRule] = &[
    rule(
        Condition::RoleDecision {
            role: "medic",
            keyword: "first aid",
        },
        "Medical teams stabilize the injured on site; survival rates improve.",
    ),
    rule(
        Condition::RoleDecision {
            role: "rescue",
            keyword: "search",
        },
        "Search teams locate survivors trapped in the debris.",
    ),
    rule(
        Condition::RoleDecision {
            role: "rescue",
            keyword: "boat",
        },
        "Boat crews pull stranded residents from flooded homes.",
    ),
    rule(
        Condition::RoleDecision {
            role: "cyber",
            keyword: "isolate",
        },
        "Compromised systems are contained before the attack spreads.",
    ),
    rule(
        Condition::RoleDecision {
            role: "health",
            keyword: "quarantine",
        },
        "Quarantine measures slow the spread of new infections.",
    ),
    rule(
        Condition::RoleDecision {
            role: "hospital",
            keyword: "capacity",
        },
        "Additional beds open and wards stop turning patients away.",
    ),
    rule(
        Condition::RoleDecision {
            role: "fire",
            keyword: "fire break",
        },
        "New fire breaks hold the fire front along the wind line.",
    ),
    rule(
        Condition::RoleDecision {
            role: "coordinator",
            keyword: "evacuat",
        },
        "Evacuation routes are cleared and traffic is redirected away from the danger zone.",
    ),
    rule(
        Condition::RoleDecision {
            role: "information",
            keyword: "broadcast",
        },
        "Broadcast alerts reach most residents within minutes.",
    ),
];

/// What the rules are evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct DecisionContext<'a> {
    /// Free-text decision.
    pub decision: &'a str,
    /// Role submitting the decision, if given.
    pub role: Option<&'a str>,
    /// Additional per-role decisions.
    pub role_decisions: &'a BTreeMap<String, String>,
}

impl DecisionContext<'_> {
    fn role_pairs(&self) -> Vec<(String, String)> {
        let acting = self
            .role
            .map(|role| (role.to_lowercase(), self.decision.to_lowercase()));
        acting
            .into_iter()
            .chain(
                self.role_decisions
                    .iter()
                    .map(|(role, decision)| (role.to_lowercase(), decision.to_lowercase())),
            )
            .collect()
    }
}

/// Returns the text of every rule in `rules` whose condition holds, in table
/// order.
#[must_use]
pub fn evaluate(rules: &[ConsequenceRule], context: &DecisionContext<'_>) -> Vec<&'static str> {
    let decision = context.decision.to_lowercase();
    let pairs = context.role_pairs();

    rules
        .iter()
        .filter(|rule| match rule.condition {
            Condition::DecisionMentions(needle) => decision.contains(needle),
            Condition::DecisionMentionsUnless { needle, unless } => {
                decision.contains(needle) && !decision.contains(unless)
            }
            Condition::RoleDecision { role, keyword } => pairs
                .iter()
                .any(|(name, text)| name.contains(role) && text.contains(keyword)),
        })
        .map(|rule| rule.text)
        .collect()
}

/// Builds the full consequence list for a decision against a crisis whose
/// template reports `crisis_consequences`.
#[must_use]
pub fn derive_consequences(
    context: &DecisionContext<'_>,
    crisis_consequences: &[String],
) -> Vec<String> {
    let mut consequences = vec![format!("Decision implemented: {}", context.decision)];
    consequences.extend(evaluate(TONE_RULES, context).into_iter().map(str::to_owned));
    consequences.extend(crisis_consequences.iter().cloned());
    consequences.extend(evaluate(ROLE_RULES, context).into_iter().map(str::to_owned));
    consequences
}

#[cfg(test)]
mod tests {
    use super::*;

    const CALM: &str = "Your calm direction keeps the public orderly and cooperative.";
    const PANIC: &str = "Panic spreads through the crowd; the evacuation slows and injuries rise.";
    const FIRST_AID: &str = "Medical teams stabilize the injured on site; survival rates improve.";

    fn context<'a>(
        decision: &'a str,
        role: Option<&'a str>,
        role_decisions: &'a BTreeMap<String, String>,
    ) -> DecisionContext<'a> {
        DecisionContext {
            decision,
            role,
            role_decisions,
        }
    }

    fn crisis() -> Vec<String> {
        vec!["crisis one".to_owned(), "crisis two".to_owned()]
    }

    #[test]
    fn test_calm_decision_yields_calm_branch_only() {
        // Arrange
        let none = BTreeMap::new();
        let ctx = context("I will stay calm and organize evacuation", None, &none);

        // Act
        let consequences = derive_consequences(&ctx, &crisis());

        // Assert
        assert!(consequences.iter().any(|c| c == CALM));
        assert!(!consequences.iter().any(|c| c == PANIC));
        assert_eq!(consequences.len(), 5);
    }

    #[test]
    fn test_panic_wins_when_both_words_appear() {
        let none = BTreeMap::new();
        let ctx = context("Do not PANIC, stay Calm", None, &none);

        let tone = evaluate(TONE_RULES, &ctx);

        assert_eq!(tone.len(), 2);
        assert_eq!(tone[0], PANIC);
    }

    #[test]
    fn test_neutral_decision_takes_neither_tone_branch() {
        let none = BTreeMap::new();
        let ctx = context("Deploy rescue teams", None, &none);

        assert!(evaluate(TONE_RULES, &ctx).is_empty());
        assert_eq!(
            derive_consequences(&ctx, &crisis()),
            vec![
                "Decision implemented: Deploy rescue teams".to_owned(),
                "crisis one".to_owned(),
                "crisis two".to_owned(),
            ]
        );
    }

    #[test]
    fn test_role_rule_matches_acting_role() {
        let none = BTreeMap::new();
        let ctx = context("Administer first aid at the school", Some("Medical Team Leader"), &none);

        let role = evaluate(ROLE_RULES, &ctx);

        assert_eq!(role, vec![FIRST_AID]);
    }

    #[test]
    fn test_role_rule_ignores_keyword_without_matching_role() {
        let none = BTreeMap::new();
        let ctx = context("Administer first aid", Some("Emergency Coordinator"), &none);

        assert!(evaluate(ROLE_RULES, &ctx).is_empty());
    }

    #[test]
    fn test_role_rules_match_role_decision_map_once_each() {
        // Arrange
        let mut role_decisions = BTreeMap::new();
        role_decisions.insert("Medic".to_owned(), "First aid for the wounded".to_owned());
        role_decisions.insert("Field Medic".to_owned(), "more first aid".to_owned());
        role_decisions.insert("Search & Rescue Chief".to_owned(), "Search sector 4".to_owned());
        let ctx = context("Hold position", None, &role_decisions);

        // Act
        let role = evaluate(ROLE_RULES, &ctx);

        // Assert
        assert_eq!(
            role,
            vec![
                FIRST_AID,
                "Search teams locate survivors trapped in the debris.",
            ]
        );
    }
}

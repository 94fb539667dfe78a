//! Environment factors and team role assignment for new scenarios.

use serde::{Deserialize, Serialize};

use super::catalog::RoleDefinition;

/// Which customization field an environment rule inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The caller-supplied building type.
    BuildingType,
    /// The caller-supplied location.
    Location,
}

/// Adds `note` to a scenario when `field` contains any of `needles`
/// (case-insensitive).
#[derive(Debug, Clone, Copy)]
pub struct EnvironmentRule {
    /// Field to inspect.
    pub field: Field,
    /// Lowercase substrings, any of which triggers the rule.
    pub needles: &'static [&'static str],
    /// Note added to the scenario.
    pub note: &'static str,
}

/// Built-in environment rules, in report order.
pub const ENVIRONMENT_RULES: &[EnvironmentRule] = &[
    EnvironmentRule {
        field: Field::BuildingType,
        needles: &["high-rise", "highrise", "high rise", "skyscraper"],
        note: "Elevators are out of service; evacuation must use the stairwells.",
    },
    EnvironmentRule {
        field: Field::BuildingType,
        needles: &["hospital", "care home", "nursing"],
        note: "Patients with limited mobility need assisted evacuation.",
    },
    EnvironmentRule {
        field: Field::BuildingType,
        needles: &["school", "university", "campus"],
        note: "Every student must be accounted for before the building is cleared.",
    },
    EnvironmentRule {
        field: Field::BuildingType,
        needles: &["industrial", "factory", "plant", "warehouse"],
        note: "Hazardous materials may be on site; hazmat protocols apply.",
    },
    EnvironmentRule {
        field: Field::Location,
        needles: &["coastal", "coast", "harbor", "harbour"],
        note: "Coastal location: monitor tsunami warnings and storm surge.",
    },
    EnvironmentRule {
        field: Field::Location,
        needles: &["rural", "remote"],
        note: "Limited road access will delay outside resources.",
    },
];

/// Returns the notes of every rule matching `building_type` or `location`.
#[must_use]
pub fn environment_factors(
    rules: &[EnvironmentRule],
    building_type: Option<&str>,
    location: Option<&str>,
) -> Vec<String> {
    let building_type = building_type.map(str::to_lowercase);
    let location = location.map(str::to_lowercase);

    rules
        .iter()
        .filter(|rule| {
            let haystack = match rule.field {
                Field::BuildingType => building_type.as_deref(),
                Field::Location => location.as_deref(),
            };
            haystack.is_some_and(|text| rule.needles.iter().any(|needle| text.contains(needle)))
        })
        .map(|rule| rule.note.to_owned())
        .collect()
}

/// Whether a team member fills a template role or backs one up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentKind {
    /// First holder of a role.
    Primary,
    /// Additional member doubling up on a role.
    Support,
}

/// One team member's role in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignment {
    /// 1-based team member number.
    pub member: u32,
    /// Assigned role name.
    pub role: String,
    /// Responsibility carried over from the template.
    pub responsibility: String,
    /// Primary or support.
    pub assignment: AssignmentKind,
}

/// Assigns `team_size` members round-robin over `roles`. The first
/// `roles.len()` members are primary holders; everyone after supports.
#[must_use]
pub fn assign_roles(roles: &[RoleDefinition], team_size: u32) -> Vec<RoleAssignment> {
    if roles.is_empty() {
        return Vec::new();
    }
    (0..team_size)
        .zip(roles.iter().cycle())
        .enumerate()
        .map(|(index, (member, role))| RoleAssignment {
            member: member + 1,
            role: role.name.clone(),
            responsibility: role.responsibility.clone(),
            assignment: if index < roles.len() {
                AssignmentKind::Primary
            } else {
                AssignmentKind::Support
            },
        })
        .collect()
}

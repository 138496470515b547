use crate::creature::CreatureInst;
use crate::errors::{RosterDataError, RosterDataResult};
use crate::roster::Roster;
use schema::{BaseStats, Capability, Kind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

// Demo roster data ships embedded in the binary.
static ROSTER_DATA: LazyLock<HashMap<String, RosterTemplate>> = LazyLock::new(|| {
    load_roster_data().expect("embedded roster data should parse")
});

/// Template for one creature, as written in the RON data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureTemplate {
    pub name: String,
    pub kind: Kind,
    pub stats: BaseStats,
    #[serde(default)]
    pub capabilities: Option<Vec<Capability>>,
}

/// Template for a full roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterTemplate {
    pub label: String,
    pub creatures: Vec<CreatureTemplate>,
}

fn load_roster_data() -> RosterDataResult<HashMap<String, RosterTemplate>> {
    ron::from_str(include_str!("../data/rosters.ron"))
        .map_err(|e| RosterDataError::MalformedData(e.to_string()))
}

impl CreatureTemplate {
    /// Build a live creature from this template, using either the explicit
    /// capability override or the kind's default set.
    pub fn instantiate(&self) -> CreatureInst {
        match &self.capabilities {
            Some(capabilities) => CreatureInst::with_capabilities(
                self.name.clone(),
                self.kind,
                self.stats,
                capabilities.clone(),
            ),
            None => CreatureInst::new(self.name.clone(), self.kind, self.stats),
        }
    }
}

/// Get all available roster template IDs
pub fn available_roster_ids() -> Vec<String> {
    ROSTER_DATA.keys().cloned().collect()
}

/// Get roster information without instantiating creatures
pub fn get_roster_info(roster_id: &str) -> Option<&'static RosterTemplate> {
    ROSTER_DATA.get(roster_id)
}

/// Assemble a roster (and its creatures) from a template.
pub fn create_roster_from_template(roster_id: &str) -> RosterDataResult<Roster> {
    let template = ROSTER_DATA
        .get(roster_id)
        .ok_or_else(|| RosterDataError::RosterNotFound(roster_id.to_string()))?;

    let mut roster = Roster::new(template.label.clone());
    for creature in &template.creatures {
        roster.add_member(Some(creature.instantiate().into_handle()));
    }
    Ok(roster)
}

pub fn demo_alpha_roster() -> Roster {
    create_roster_from_template("demo_alpha").expect("Demo Alpha roster not found")
}

pub fn demo_bravo_roster() -> Roster {
    create_roster_from_template("demo_bravo").expect("Demo Bravo roster not found")
}

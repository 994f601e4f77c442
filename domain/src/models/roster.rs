use std::collections::BTreeMap;

use serde::Deserialize;

use super::AccountId;

pub type VehicleId = u32;

/// One vehicle slot of a match, as the host reports it.
///
/// Every field is optional: the host fills the roster incrementally while
/// players are loading into the match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RosterEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "fakeName")]
    pub fake_name: Option<String>,
    #[serde(default, rename = "accountDBID")]
    pub account_id: Option<AccountId>,
}

impl RosterEntry {
    pub fn new(name: impl Into<String>, account_id: AccountId) -> Self {
        let name = name.into();
        Self {
            fake_name: Some(name.clone()),
            name: Some(name),
            account_id: Some(account_id),
        }
    }

    #[must_use]
    pub fn with_fake_name(mut self, fake_name: impl Into<String>) -> Self {
        self.fake_name = Some(fake_name.into());
        self
    }

    /// Nickname and account id, when both are known.
    pub fn player(&self) -> Option<(&str, AccountId)> {
        Some((self.name.as_deref()?, self.account_id?))
    }

    /// `None` when either name is missing and the entry cannot tell.
    pub fn shows_fake_name(&self) -> Option<bool> {
        Some(self.name.as_ref()? != self.fake_name.as_ref()?)
    }
}

/// A match snapshot keyed by vehicle slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    entries: BTreeMap<VehicleId, RosterEntry>,
}

impl Roster {
    pub fn entries(&self) -> impl Iterator<Item = (VehicleId, &RosterEntry)> {
        self.entries.iter().map(|(id, entry)| (*id, entry))
    }

    pub fn players(&self) -> impl Iterator<Item = (&str, AccountId)> {
        self.entries.values().filter_map(RosterEntry::player)
    }

    pub fn account_ids(&self) -> impl Iterator<Item = AccountId> + '_ {
        self.entries.values().filter_map(|entry| entry.account_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(VehicleId, RosterEntry)> for Roster {
    fn from_iter<I: IntoIterator<Item = (VehicleId, RosterEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn read_roster_from_host_json() {
        let roster: Roster = serde_json::from_str(
            r#"{
                "101": {"name": "Tanker", "fakeName": "Tanker", "accountDBID": 5001},
                "102": {"name": "Hidden", "fakeName": "Player 2", "accountDBID": 5002},
                "103": {"name": "Loading"}
            }"#,
        )
        .unwrap();

        assert_eq!(roster.len(), 3);
        assert_eq!(
            roster.players().collect::<Vec<_>>(),
            vec![("Tanker", AccountId(5001)), ("Hidden", AccountId(5002))]
        );
        assert_eq!(
            roster.account_ids().collect::<Vec<_>>(),
            vec![AccountId(5001), AccountId(5002)]
        );
    }

    #[test]
    fn fake_name_detection_needs_both_names() {
        let plain = RosterEntry::new("Tanker", AccountId(1));
        let hidden = RosterEntry::new("Tanker", AccountId(1)).with_fake_name("Player 7");
        let partial = RosterEntry {
            name: Some("Tanker".to_string()),
            ..RosterEntry::default()
        };

        assert_eq!(plain.shows_fake_name(), Some(false));
        assert_eq!(hidden.shows_fake_name(), Some(true));
        assert_eq!(partial.shows_fake_name(), None);
    }
}

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// String-keyed persistence the page runs on (web-storage shaped).
///
/// Values are JSON or flag strings; the store never interprets them.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Storage keys, kept compatible with previously persisted page state.
const COUNTS_KEY: &str = "pollData";
const VOTED_KEY: &str = "hasVoted";

/// The four mission options voters choose between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOption {
    MarsMission,
    EuropaExplorer,
    InterstellarProbe,
    SpaceTelescope,
}

impl PollOption {
    pub const ALL: [PollOption; 4] = [
        PollOption::MarsMission,
        PollOption::EuropaExplorer,
        PollOption::InterstellarProbe,
        PollOption::SpaceTelescope,
    ];

    /// Stable key shared with the DOM inputs and persisted JSON.
    pub fn key(self) -> &'static str {
        match self {
            PollOption::MarsMission => "mars-mission",
            PollOption::EuropaExplorer => "europa-explorer",
            PollOption::InterstellarProbe => "interstellar-probe",
            PollOption::SpaceTelescope => "space-telescope",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            PollOption::MarsMission => "Mars Colony Mission",
            PollOption::EuropaExplorer => "Europa Ocean Explorer",
            PollOption::InterstellarProbe => "Interstellar Probe",
            PollOption::SpaceTelescope => "Next-Gen Space Telescope",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.key() == key)
    }
}

/// Persisted vote tallies. Field names match the historical JSON layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct Counts {
    #[serde(rename = "mars-mission", default)]
    mars_mission: u32,
    #[serde(rename = "europa-explorer", default)]
    europa_explorer: u32,
    #[serde(rename = "interstellar-probe", default)]
    interstellar_probe: u32,
    #[serde(rename = "space-telescope", default)]
    space_telescope: u32,
}

impl Counts {
    fn get(&self, option: PollOption) -> u32 {
        match option {
            PollOption::MarsMission => self.mars_mission,
            PollOption::EuropaExplorer => self.europa_explorer,
            PollOption::InterstellarProbe => self.interstellar_probe,
            PollOption::SpaceTelescope => self.space_telescope,
        }
    }

    fn bump(&mut self, option: PollOption) {
        match option {
            PollOption::MarsMission => self.mars_mission += 1,
            PollOption::EuropaExplorer => self.europa_explorer += 1,
            PollOption::InterstellarProbe => self.interstellar_probe += 1,
            PollOption::SpaceTelescope => self.space_telescope += 1,
        }
    }

    fn total(&self) -> u32 {
        self.mars_mission + self.europa_explorer + self.interstellar_probe + self.space_telescope
    }
}

/// One option's share of the vote.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionResult {
    pub key: &'static str,
    pub label: &'static str,
    pub votes: u32,
    pub percentage: u32,
}

/// Tallies and rounded percentages for the results chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PollResults {
    pub total: u32,
    pub options: Vec<OptionResult>,
}

impl PollResults {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteError {
    /// This session already voted.
    AlreadyVoted,
}

impl fmt::Display for VoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteError::AlreadyVoted => write!(f, "already voted in this session"),
        }
    }
}

impl std::error::Error for VoteError {}

/// Client-side poll with injected persistence: the tallies outlive the
/// session, the voted flag does not.
pub struct Poll {
    counts: Counts,
    voted: bool,
    storage: Rc<dyn KeyValueStore>,
    session: Rc<dyn KeyValueStore>,
}

impl Poll {
    /// Load persisted counts and the session's voted flag. Corrupt JSON is
    /// logged and treated as a fresh poll rather than surfaced.
    pub fn load(storage: Rc<dyn KeyValueStore>, session: Rc<dyn KeyValueStore>) -> Self {
        let counts = match storage.get(COUNTS_KEY) {
            Some(json) => serde_json::from_str(&json).unwrap_or_else(|err| {
                log::warn!("discarding unreadable poll data: {err}");
                Counts::default()
            }),
            None => Counts::default(),
        };
        let voted = session.get(VOTED_KEY).as_deref() == Some("true");
        Self {
            counts,
            voted,
            storage,
            session,
        }
    }

    pub fn has_voted(&self) -> bool {
        self.voted
    }

    /// Record a vote, persist the tallies, and mark the session as voted.
    pub fn submit(&mut self, option: PollOption) -> Result<PollResults, VoteError> {
        if self.voted {
            return Err(VoteError::AlreadyVoted);
        }
        self.counts.bump(option);
        match serde_json::to_string(&self.counts) {
            Ok(json) => self.storage.set(COUNTS_KEY, &json),
            Err(err) => log::warn!("poll data not persisted: {err}"),
        }
        self.voted = true;
        self.session.set(VOTED_KEY, "true");
        Ok(self.results())
    }

    /// Current tallies with integer percentages (rounded, not floored).
    pub fn results(&self) -> PollResults {
        let total = self.counts.total();
        let options = PollOption::ALL
            .iter()
            .map(|&option| {
                let votes = self.counts.get(option);
                let percentage = if total > 0 {
                    (votes * 100 + total / 2) / total
                } else {
                    0
                };
                OptionResult {
                    key: option.key(),
                    label: option.label(),
                    votes,
                    percentage,
                }
            })
            .collect();
        PollResults { total, options }
    }
}

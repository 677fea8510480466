//! Year-driven narrative and spawn pacing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Spawn delay in force for every year strictly before `before`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayStep {
    pub before: u32,
    /// Ticks between spawns; `None` disables spawning.
    pub delay: Option<u32>,
}

/// Lookup table from year to phrase and obstacle spawn delay.
///
/// ```
/// use space_garbage_core::ScenarioTable;
///
/// let table = ScenarioTable::default();
/// assert_eq!(table.phrase_for(1961), Some("Gagarin flew!"));
/// assert_eq!(table.phrase_for(1962), None);
/// assert_eq!(table.spawn_delay_for(1957), None);
/// assert_eq!(table.spawn_delay_for(1961), Some(20));
/// assert_eq!(table.spawn_delay_for(2077), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioTable {
    pub phrases: BTreeMap<u32, String>,
    /// Checked in order; the first step whose `before` exceeds the year wins.
    pub spawn_delays: Vec<DelayStep>,
    /// Delay once the year is past every step.
    pub default_delay: Option<u32>,
}

impl Default for ScenarioTable {
    fn default() -> Self {
        let phrases = [
            (1957, "First Sputnik"),
            (1961, "Gagarin flew!"),
            (1969, "Armstrong got on the moon!"),
            (1971, "First orbital space station Salute-1"),
            (1981, "Flight of the Shuttle Columbia"),
            (1998, "ISS start building"),
            (2011, "Messenger launch to Mercury"),
            (2020, "Take the plasma gun! Shoot the garbage!"),
        ]
        .into_iter()
        .map(|(year, text)| (year, text.to_string()))
        .collect();

        let spawn_delays = [
            (1961, None),
            (1969, Some(20)),
            (1981, Some(14)),
            (1995, Some(10)),
            (2010, Some(8)),
            (2020, Some(6)),
        ]
        .into_iter()
        .map(|(before, delay)| DelayStep { before, delay })
        .collect();

        Self {
            phrases,
            spawn_delays,
            default_delay: Some(2),
        }
    }
}

impl ScenarioTable {
    pub fn phrase_for(&self, year: u32) -> Option<&str> {
        self.phrases.get(&year).map(String::as_str)
    }

    pub fn spawn_delay_for(&self, year: u32) -> Option<u32> {
        self.spawn_delays
            .iter()
            .find(|step| year < step.before)
            .map_or(self.default_delay, |step| step.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_steps_are_half_open() {
        let table = ScenarioTable::default();
        assert_eq!(table.spawn_delay_for(1960), None);
        assert_eq!(table.spawn_delay_for(1968), Some(20));
        assert_eq!(table.spawn_delay_for(1969), Some(14));
        assert_eq!(table.spawn_delay_for(2019), Some(6));
        assert_eq!(table.spawn_delay_for(2020), Some(2));
    }

    #[test]
    fn partial_json_keeps_defaults_for_missing_fields() {
        let table: ScenarioTable =
            serde_json::from_str(r#"{ "phrases": { "2000": "Y2K" } }"#).unwrap();
        assert_eq!(table.phrase_for(2000), Some("Y2K"));
        assert_eq!(table.phrase_for(1957), None);
        assert_eq!(table.spawn_delay_for(1990), Some(10));
    }
}

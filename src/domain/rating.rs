// src/domain/rating.rs
//
// Family star ratings. Internally a rating is either absent or 1..=5; the
// historical "0 means unrated" sentinel exists only in the persisted map
// and is normalized away on load.

use std::collections::HashMap;

pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ratings {
    by_home: HashMap<String, u8>,
}

impl Ratings {
    /// Rebuilds from the persisted id -> int map, clamping out-of-range
    /// values and dropping the 0 sentinel.
    pub fn from_stored(stored: HashMap<String, i64>) -> Self {
        let by_home = stored
            .into_iter()
            .filter_map(|(id, v)| {
                let v = clamp_rating(v);
                (v > 0).then_some((id, v))
            })
            .collect();
        Self { by_home }
    }

    /// The persisted shape: absent entries and 0 are interchangeable, so
    /// cleared ratings simply do not appear.
    pub fn to_stored(&self) -> HashMap<String, u8> {
        self.by_home.clone()
    }

    pub fn get(&self, home_id: &str) -> Option<u8> {
        self.by_home.get(home_id).copied()
    }

    /// What the star widget shows: 0 for unrated.
    pub fn display_value(&self, home_id: &str) -> u8 {
        self.get(home_id).unwrap_or(0)
    }

    /// Clamps into [0, 5]; a clamped 0 clears the rating.
    pub fn set(&mut self, home_id: &str, value: i64) {
        let v = clamp_rating(value);
        if v == 0 {
            self.by_home.remove(home_id);
        } else {
            self.by_home.insert(home_id.to_string(), v);
        }
    }
}

pub fn clamp_rating(value: i64) -> u8 {
    value.clamp(0, MAX_RATING as i64) as u8
}

//! Cupola observation deck: the rotating orbital ground track and view modes.

use serde::{Deserialize, Serialize};

use crate::constants::ORBIT_TRACK_TICK_MS;
use crate::timer::Ticker;

/// One stop on the simulated orbital ground track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrbitalStop {
    pub region: &'static str,
    pub country: &'static str,
    pub next_region: &'static str,
}

/// The fixed ground track, in orbit order. Rotation advances by index, so the
/// repeated Pacific Ocean stop at the wrap point is unambiguous.
pub const ORBITAL_TRACK: [OrbitalStop; 12] = [
    OrbitalStop {
        region: "Pacific Ocean",
        country: "International Waters",
        next_region: "New Zealand",
    },
    OrbitalStop {
        region: "New Zealand",
        country: "New Zealand",
        next_region: "Australia",
    },
    OrbitalStop {
        region: "Australia",
        country: "Australia",
        next_region: "Indonesia",
    },
    OrbitalStop {
        region: "Southeast Asia",
        country: "Indonesia",
        next_region: "India",
    },
    OrbitalStop {
        region: "Indian Ocean",
        country: "International Waters",
        next_region: "India",
    },
    OrbitalStop {
        region: "India",
        country: "India",
        next_region: "Middle East",
    },
    OrbitalStop {
        region: "Arabian Peninsula",
        country: "Saudi Arabia",
        next_region: "Europe",
    },
    OrbitalStop {
        region: "Mediterranean Sea",
        country: "International Waters",
        next_region: "Europe",
    },
    OrbitalStop {
        region: "Europe",
        country: "France",
        next_region: "Atlantic Ocean",
    },
    OrbitalStop {
        region: "Atlantic Ocean",
        country: "International Waters",
        next_region: "North America",
    },
    OrbitalStop {
        region: "North America",
        country: "United States",
        next_region: "Pacific Ocean",
    },
    OrbitalStop {
        region: "Pacific Ocean",
        country: "International Waters",
        next_region: "Asia",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Earth,
    Stars,
    Sunrise,
}

impl ViewMode {
    pub const ALL: [Self; 3] = [Self::Earth, Self::Stars, Self::Sunrise];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Earth => "earth",
            Self::Stars => "stars",
            Self::Sunrise => "sunrise",
        }
    }
}

/// Local state of the cupola macro phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CupolaState {
    pub view: ViewMode,
    pub track_index: usize,
    rotation_tick: Ticker,
}

impl Default for CupolaState {
    fn default() -> Self {
        Self {
            view: ViewMode::Earth,
            track_index: 0,
            rotation_tick: Ticker::new(ORBIT_TRACK_TICK_MS),
        }
    }
}

impl CupolaState {
    #[must_use]
    pub const fn current_stop(&self) -> &'static OrbitalStop {
        &ORBITAL_TRACK[self.track_index % ORBITAL_TRACK.len()]
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub(crate) fn tick(&mut self, elapsed_ms: u32) {
        let fires = self.rotation_tick.advance(elapsed_ms);
        self.track_index = (self.track_index + fires as usize) % ORBITAL_TRACK.len();
    }
}

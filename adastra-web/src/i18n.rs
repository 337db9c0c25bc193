//! User-facing copy, keyed the same way the core journals events. Unknown
//! keys fall back to themselves so a missing entry is visible, not a panic.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

static COPY: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        // HUD
        ("hud.progress", "Mission progress"),
        ("hud.reset", "Start over"),
        ("phase.landing", "Mission Start"),
        ("phase.nbl_training", "Neutral Buoyancy Lab"),
        ("phase.rocket_launch", "Launch Sequence"),
        ("phase.iss_arrival", "ISS Docking"),
        ("phase.iss_interior", "Station Onboarding"),
        ("phase.cupola_experience", "Cupola Observatory"),
        // Landing
        ("landing.title", "Ad Astra"),
        (
            "landing.subtitle",
            "From the training pool to the cupola window",
        ),
        (
            "landing.blurb",
            "Train like an astronaut, ride a rocket to orbit, dock with the \
             International Space Station, and watch Earth go by.",
        ),
        ("landing.cta_astronaut", "Begin Astronaut Training"),
        ("landing.cta_observer", "Skip Ahead to the Cupola"),
        // NBL
        ("nbl.intro.title", "Welcome to the Neutral Buoyancy Lab"),
        (
            "nbl.intro.blurb",
            "Astronauts spend up to 7 hours underwater for every hour of \
             spacewalk. Your goal: float neither up nor down.",
        ),
        ("nbl.intro.begin", "Start Pool Training"),
        ("nbl.intro.skip", "Skip to Weight Challenge"),
        ("nbl.suit.title", "Suit Up"),
        ("nbl.suit.blurb", "Secure every part of the training suit."),
        ("nbl.suit.helmet", "Helmet"),
        ("nbl.suit.torso", "Torso"),
        ("nbl.suit.gloves", "Gloves"),
        ("nbl.suit.boots", "Boots"),
        ("nbl.prebreathe.title", "Pre-Breathe Protocol"),
        (
            "nbl.prebreathe.blurb",
            "Breathing pure oxygen purges nitrogen before the dive.",
        ),
        ("nbl.prebreathe.nitrogen", "Nitrogen saturation"),
        ("nbl.sim.title", "Buoyancy Control System"),
        ("nbl.sim.sinking", "Sinking! Too heavy."),
        ("nbl.sim.rising", "Rising! Too light."),
        ("nbl.sim.perfect", "Perfect neutral buoyancy!"),
        ("nbl.sim.adjusting", "Adjusting buoyancy…"),
        ("nbl.sim.level", "Buoyancy level"),
        ("nbl.sim.continue", "Continue to Weight Challenge"),
        ("nbl.sim.hint", "Bring the level close to zero to continue."),
        ("nbl.challenge.title", "Weight Adjustment Panel"),
        ("nbl.weight.heavy", "Too heavy! You're sinking!"),
        ("nbl.weight.light", "Too light! You're floating up!"),
        ("nbl.weight.perfect", "Perfect! Neutral buoyancy achieved!"),
        ("nbl.weight.adjust", "Adjust weights to achieve neutral buoyancy"),
        ("nbl.quadrant.left", "Left"),
        ("nbl.quadrant.right", "Right"),
        ("nbl.quadrant.chest", "Chest"),
        ("nbl.quadrant.back", "Back"),
        ("nbl.total", "Total weight"),
        ("nbl.target", "Target: ~200 kg for neutral buoyancy"),
        ("nbl.complete.title", "Training Complete!"),
        ("nbl.complete.blurb", "You've mastered neutral buoyancy."),
        ("nbl.complete.attempts", "Attempts"),
        ("nbl.complete.time", "Pool time"),
        ("nbl.complete.accuracy", "Accuracy"),
        ("nbl.complete.cta", "Launch to Space"),
        // Launch
        ("launch.ready.title", "Launch Sequence Ready"),
        (
            "launch.ready.blurb",
            "Training complete. Next stop: the International Space Station.",
        ),
        ("launch.ready.cta", "Initiate Launch Sequence"),
        ("launch.countdown.label", "Launch in…"),
        ("launch.liftoff", "LIFTOFF!"),
        ("launch.ascent.title", "Ascending"),
        ("launch.altitude", "Altitude"),
        ("launch.orbit.title", "Orbit Achieved!"),
        (
            "launch.orbit.blurb",
            "Welcome to space. The station is visible ahead.",
        ),
        ("launch.orbit.cta", "Approach ISS for Docking"),
        // Docking
        ("docking.approach.title", "Approaching ISS"),
        ("docking.distance", "Distance"),
        ("docking.align.title", "Docking Alignment"),
        ("docking.alignment", "Alignment"),
        ("docking.rcs", "Reaction Control System thrusters"),
        ("docking.docked.title", "Docking Successful!"),
        (
            "docking.docked.blurb",
            "Welcome aboard the International Space Station.",
        ),
        ("docking.docked.cta", "Enter the Station"),
        // Interior
        ("interior.entry.title", "Airlock"),
        (
            "interior.entry.blurb",
            "Pressurization in progress. Stand by to enter the Destiny \
             laboratory.",
        ),
        ("interior.tasks.title", "Onboarding Tasks"),
        ("interior.task.repair", "Inspection & Repair"),
        (
            "interior.task.repair.desc",
            "Tighten the loose panel behind the red alert light.",
        ),
        ("interior.task.plant", "Plant Growth Check"),
        (
            "interior.task.plant.desc",
            "Monitor the crop growing in the plant habitat.",
        ),
        ("interior.task.comms", "Communications Check"),
        (
            "interior.task.comms.desc",
            "Send a status report down to mission control.",
        ),
        ("interior.task.cta", "Complete Task"),
        ("interior.task.cancel", "Cancel"),
        ("interior.complete.title", "All Tasks Complete!"),
        (
            "interior.complete.blurb",
            "The Cupola Observatory is now unlocked.",
        ),
        ("interior.complete.cta", "Enter the Cupola"),
        // Cupola
        ("cupola.title", "ISS Cupola Observatory"),
        ("cupola.position", "Passing over"),
        ("cupola.country", "Country"),
        ("cupola.next", "Next"),
        ("cupola.view.earth", "Earth View"),
        ("cupola.view.stars", "Deep Space"),
        ("cupola.view.sunrise", "Orbital Sunrise"),
        (
            "cupola.congrats",
            "Congratulations! You completed the full astronaut training.",
        ),
        ("cupola.reset", "Start New Mission"),
    ])
});

/// Look up a copy key, falling back to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    COPY.get(key).map_or_else(|| key.to_string(), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_resolve_and_unknown_fall_through() {
        assert_eq!(t("landing.title"), "Ad Astra");
        assert_eq!(t("no.such.key"), "no.such.key");
    }

    #[test]
    fn core_status_keys_have_copy() {
        use adastra_sim::{BuoyancyStatus, buoyancy_status_key, weight_status_key};
        for status in [
            BuoyancyStatus::Heavy,
            BuoyancyStatus::Light,
            BuoyancyStatus::Perfect,
            BuoyancyStatus::Neutral,
        ] {
            assert_ne!(t(weight_status_key(status)), weight_status_key(status));
            assert_ne!(t(buoyancy_status_key(status)), buoyancy_status_key(status));
        }
    }
}

//! Station-interior onboarding: the three-task checklist.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::ENTRY_HOLD_MS;
use crate::timer::Delay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InteriorStep {
    #[default]
    Entry,
    Tasks,
    Complete,
}

impl InteriorStep {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Tasks => "tasks",
            Self::Complete => "complete",
        }
    }
}

/// Onboarding task aboard the station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskId {
    Repair,
    Plant,
    Comms,
}

impl TaskId {
    pub const ALL: [Self; 3] = [Self::Repair, Self::Plant, Self::Comms];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Repair => "repair",
            Self::Plant => "plant",
            Self::Comms => "comms",
        }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "repair" => Ok(Self::Repair),
            "plant" => Ok(Self::Plant),
            "comms" => Ok(Self::Comms),
            _ => Err(()),
        }
    }
}

/// Completion booleans for the fixed task set. Marking a task complete is
/// idempotent; completion never regresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InteriorTasks {
    pub repair: bool,
    pub plant: bool,
    pub comms: bool,
}

impl InteriorTasks {
    #[must_use]
    pub const fn is_complete(&self, task: TaskId) -> bool {
        match task {
            TaskId::Repair => self.repair,
            TaskId::Plant => self.plant,
            TaskId::Comms => self.comms,
        }
    }

    pub fn complete(&mut self, task: TaskId) {
        match task {
            TaskId::Repair => self.repair = true,
            TaskId::Plant => self.plant = true,
            TaskId::Comms => self.comms = true,
        }
    }

    #[must_use]
    pub const fn completed_count(&self) -> usize {
        self.repair as usize + self.plant as usize + self.comms as usize
    }

    #[must_use]
    pub const fn all_complete(&self) -> bool {
        self.repair && self.plant && self.comms
    }
}

/// Local state of the ISS-interior macro phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteriorState {
    pub step: InteriorStep,
    pub tasks: InteriorTasks,
    /// Task currently opened for detail view, if any.
    pub selected: Option<TaskId>,
    entry_hold: Option<Delay>,
}

impl Default for InteriorState {
    fn default() -> Self {
        Self {
            step: InteriorStep::Entry,
            tasks: InteriorTasks::default(),
            selected: None,
            entry_hold: Some(Delay::new(ENTRY_HOLD_MS)),
        }
    }
}

impl InteriorState {
    /// Open a task for detail view. Only incomplete tasks can be selected.
    pub fn select_task(&mut self, task: TaskId) {
        if self.step == InteriorStep::Tasks && !self.tasks.is_complete(task) {
            self.selected = Some(task);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Complete the selected task. The third completion moves the checklist
    /// to `Complete` exactly once.
    pub fn complete_selected(&mut self) {
        if self.step != InteriorStep::Tasks {
            return;
        }
        let Some(task) = self.selected.take() else {
            return;
        };
        self.tasks.complete(task);
        if self.tasks.all_complete() {
            self.step = InteriorStep::Complete;
        }
    }

    pub(crate) fn tick(&mut self, elapsed_ms: u32) {
        if self.step == InteriorStep::Entry
            && let Some(hold) = self.entry_hold.as_mut()
            && hold.advance(elapsed_ms)
        {
            self.entry_hold = None;
            self.step = InteriorStep::Tasks;
        }
    }
}

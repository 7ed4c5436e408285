//! Session state and command dispatch.
//!
//! A `Session` owns one in-memory plan and mutates it in place per command.
//! Nothing here reads input or prints; any front end can drive `apply`.

use chrono::NaiveDate;
use log::{debug, info};
use rand::Rng;

use super::command::Command;
use crate::catalog::Catalog;
use crate::domain::{Priorities, WeekDistribution};
use crate::scheduler::{AdjustOutcome, Direction, GeneratedSchedule, adjust_schedule, distribute, generate_schedule};

/// Where the session is in the plan lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Shaping the tag schedule.
    Tags,
    /// Tasks are bound to the slots.
    Tasks,
}

/// Result of applying one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// State changed; redisplay.
    Updated,
    /// Relax/intensify found nothing eligible; state unchanged.
    NoAdjustment,
    /// Command rejected; state unchanged.
    Invalid(String),
    Help,
    /// The plan is final and should be handed to the exporter.
    Export,
    Exit,
}

pub struct Session<R: Rng> {
    priorities: Priorities,
    catalog: Catalog,
    start_date: NaiveDate,
    rng: R,
    stage: Stage,
    tags_only: bool,
    plan: GeneratedSchedule,
    week: Option<WeekDistribution>,
}

impl<R: Rng> Session<R> {
    /// Start a session with a freshly generated tag schedule.
    pub fn new(priorities: Priorities, catalog: Catalog, start_date: NaiveDate, mut rng: R) -> Self {
        let plan = generate_schedule(&priorities, &mut rng);
        Self {
            priorities,
            catalog,
            start_date,
            rng,
            stage: Stage::Tags,
            tags_only: false,
            plan,
            week: None,
        }
    }

    /// Stop after the tag stage: `Continue` exports the tag schedule instead
    /// of distributing tasks.
    pub fn tags_only(mut self) -> Self {
        self.tags_only = true;
        self
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn plan(&self) -> &GeneratedSchedule {
        &self.plan
    }

    pub fn week(&self) -> Option<&WeekDistribution> {
        self.week.as_ref()
    }

    pub fn priorities(&self) -> &Priorities {
        &self.priorities
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Apply one command to the session.
    pub fn apply(&mut self, command: &Command) -> DispatchOutcome {
        debug!("Applying {} in {:?} stage", command, self.stage);
        match command {
            Command::Generate => {
                self.regenerate_tags();
                if self.stage == Stage::Tasks {
                    self.redistribute();
                }
                DispatchOutcome::Updated
            }
            Command::Regenerate => {
                match self.stage {
                    Stage::Tags => self.regenerate_tags(),
                    Stage::Tasks => self.redistribute(),
                }
                DispatchOutcome::Updated
            }
            Command::Relax => self.adjust(Direction::Relax),
            Command::Intensify => self.adjust(Direction::Intensify),
            Command::Continue => match self.stage {
                Stage::Tags if self.tags_only => DispatchOutcome::Export,
                Stage::Tags => {
                    self.redistribute();
                    self.stage = Stage::Tasks;
                    DispatchOutcome::Updated
                }
                Stage::Tasks => DispatchOutcome::Export,
            },
            Command::Help => DispatchOutcome::Help,
            Command::Exit => DispatchOutcome::Exit,
            Command::Invalid(reason) => DispatchOutcome::Invalid(reason.clone()),
        }
    }

    fn regenerate_tags(&mut self) {
        self.plan = generate_schedule(&self.priorities, &mut self.rng);
    }

    fn redistribute(&mut self) {
        let skeleton = WeekDistribution::skeleton(&self.plan.schedule, self.start_date);
        let week = distribute(&skeleton, self.catalog.records(), &self.plan.counts, &mut self.rng);
        self.week = Some(week);
    }

    fn adjust(&mut self, direction: Direction) -> DispatchOutcome {
        let outcome = adjust_schedule(
            &mut self.plan.schedule,
            &mut self.plan.counts,
            &self.plan.ranges,
            &self.priorities,
            direction,
            &mut self.rng,
        );

        match outcome {
            AdjustOutcome::Adjusted { tag, day, .. } => {
                info!("{} {} on day {}", direction, tag, day + 1);
                if self.stage == Stage::Tasks {
                    self.redistribute();
                }
                DispatchOutcome::Updated
            }
            AdjustOutcome::NoAdjustment => DispatchOutcome::NoAdjustment,
        }
    }
}

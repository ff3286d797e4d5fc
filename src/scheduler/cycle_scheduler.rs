use std::io::Write;
use std::time::Duration;

use rand::Rng;

use crate::churn_config::ChurnConfig;
use crate::churn_engine::{AnnounceBounds, AnnouncedSet, ChurnDecision, ChurnEngine, CycleOutcome};
use crate::command_renderer::CommandRenderer;
use crate::shared::{ChurnError, ConfigError, Phase};

use super::suspend::Suspend;

/// Pacing and bounds for the two phases
#[derive(Debug, Clone, Copy)]
pub struct ScheduleSettings {
    pub warmup: AnnounceBounds,
    pub initial_wait: Duration,
    pub steady: AnnounceBounds,
    pub remove_pct: f64,
    pub waiting_time: Duration,
}

impl ScheduleSettings {
    pub fn from_config(config: &ChurnConfig) -> Result<Self, ConfigError> {
        Ok(ScheduleSettings {
            warmup: config.warmup_bounds(),
            initial_wait: config.initial_wait_duration()?,
            steady: config.steady_bounds()?,
            remove_pct: config.remove_prefixes,
            waiting_time: config.waiting_time_duration()?,
        })
    }
}

/// What a single step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    pub phase: Phase,
    pub cycle: u64,
    pub announced: usize,
    pub withdrawn: usize,
    pub live: usize,
}

/// Runs the warmup cycle once, then announce/withdraw cycles forever.
///
/// Commands are written to `out` one per line and flushed after each line.
/// The scheduler is the only owner of the announced set.
pub struct CycleScheduler<W, S, R> {
    engine: ChurnEngine,
    renderer: CommandRenderer,
    settings: ScheduleSettings,
    announced: AnnouncedSet,
    phase: Phase,
    cycle: u64,
    out: W,
    suspender: S,
    rng: R,
}

impl<W, S, R> CycleScheduler<W, S, R>
where
    W: Write,
    S: Suspend,
    R: Rng,
{
    pub fn new(
        engine: ChurnEngine,
        renderer: CommandRenderer,
        settings: ScheduleSettings,
        out: W,
        suspender: S,
        rng: R,
    ) -> Self {
        CycleScheduler {
            engine,
            renderer,
            settings,
            announced: AnnouncedSet::new(),
            phase: Phase::Warmup,
            cycle: 0,
            out,
            suspender,
            rng,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn announced(&self) -> &AnnouncedSet {
        &self.announced
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn suspender(&self) -> &S {
        &self.suspender
    }

    /// Never returns unless writing a command fails.
    pub fn run(&mut self) -> Result<(), ChurnError> {
        loop {
            self.step()?;
        }
    }

    /// One warmup cycle on the first call, one steady cycle afterwards.
    pub fn step(&mut self) -> Result<CycleReport, ChurnError> {
        let report = match self.phase {
            Phase::Warmup => self.warmup()?,
            Phase::Steady => self.steady_cycle()?,
        };
        log::info!(
            "{} cycle {}: +{} -{} ({} live)",
            report.phase,
            report.cycle,
            report.announced,
            report.withdrawn,
            report.live
        );

        let pause = match report.phase {
            Phase::Warmup => self.settings.initial_wait,
            Phase::Steady => self.settings.waiting_time,
        };
        self.suspender.suspend(pause);
        Ok(report)
    }

    fn warmup(&mut self) -> Result<CycleReport, ChurnError> {
        let announced = self.announce(self.settings.warmup)?;
        let report = self.report(Phase::Warmup, announced, 0);
        self.phase = Phase::Steady;
        self.cycle += 1;
        Ok(report)
    }

    fn steady_cycle(&mut self) -> Result<CycleReport, ChurnError> {
        let announced = self.announce(self.settings.steady)?;

        let current = std::mem::take(&mut self.announced);
        let outcome = self
            .engine
            .withdraw(current, self.settings.remove_pct, &mut self.rng);
        let withdrawn = self.apply(outcome)?;

        let report = self.report(Phase::Steady, announced, withdrawn);
        self.cycle += 1;
        Ok(report)
    }

    fn announce(&mut self, bounds: AnnounceBounds) -> Result<usize, ChurnError> {
        let current = std::mem::take(&mut self.announced);
        let outcome = self.engine.announce(current, bounds, &mut self.rng);
        self.apply(outcome)
    }

    // Installs the next state, then emits its decisions.
    fn apply(&mut self, outcome: CycleOutcome) -> Result<usize, ChurnError> {
        self.announced = outcome.announced;
        for decision in &outcome.decisions {
            self.emit(decision)?;
        }
        Ok(outcome.decisions.len())
    }

    fn emit(&mut self, decision: &ChurnDecision) -> Result<(), ChurnError> {
        let line = self.renderer.render(decision);
        log::debug!("{}", line);
        writeln!(self.out, "{}", line)?;
        self.out.flush()?;
        Ok(())
    }

    fn report(&self, phase: Phase, announced: usize, withdrawn: usize) -> CycleReport {
        CycleReport {
            phase,
            cycle: self.cycle,
            announced,
            withdrawn,
            live: self.announced.len(),
        }
    }
}

//! One interactive run: `Init → Scanning → Reporting → Done`.

use tracing::{debug, info};

use crate::application::input::read_bounded_int;
use crate::application::report::{
    final_block, progress_block, ReportFormat, BANNER, BOUND_PROMPT, EXIT_PROMPT,
    EXPONENT_PROMPT,
};
use crate::application::{
    ApplicationResult, IoResultExt, NearMissSearch, SearchObserver, SearchOutcome,
};
use crate::domain::{
    Candidate, RootMethod, SearchConfig, MAX_EXPONENT, MIN_BOUND, MIN_EXPONENT,
};
use crate::infrastructure::Console;

/// Options fixed before the session starts.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Preset `n`; prompted for when `None`
    pub exponent: Option<i64>,
    /// Preset `k`; prompted for when `None`
    pub bound: Option<i64>,
    pub method: RootMethod,
    pub format: ReportFormat,
    pub pause_on_exit: bool,
}

#[derive(Debug)]
enum SessionState {
    Init,
    Scanning(SearchConfig),
    Reporting(SearchOutcome),
    Done(SearchOutcome),
}

impl SessionState {
    fn name(&self) -> &'static str {
        match self {
            SessionState::Init => "init",
            SessionState::Scanning(_) => "scanning",
            SessionState::Reporting(_) => "reporting",
            SessionState::Done(_) => "done",
        }
    }
}

/// Writes a progress block to the console for every new best.
struct ConsoleObserver<'a, C: Console + ?Sized> {
    console: &'a mut C,
    format: ReportFormat,
}

impl<C: Console + ?Sized> SearchObserver for ConsoleObserver<'_, C> {
    fn on_new_best(&mut self, candidate: &Candidate) -> ApplicationResult<()> {
        self.console
            .write(&progress_block(candidate, &self.format))
            .io_context("write progress")
    }
}

/// Single-shot batch run driven through a console.
pub struct Session<'a, C: Console + ?Sized> {
    console: &'a mut C,
    options: SessionOptions,
}

impl<'a, C: Console + ?Sized> Session<'a, C> {
    pub fn new(console: &'a mut C, options: SessionOptions) -> Self {
        Self { console, options }
    }

    /// Drive the session to completion and return the scan outcome.
    pub fn run(mut self) -> ApplicationResult<SearchOutcome> {
        let mut state = SessionState::Init;
        loop {
            debug!("session state: {}", state.name());
            state = match state {
                SessionState::Init => SessionState::Scanning(self.init()?),
                SessionState::Scanning(config) => SessionState::Reporting(self.scan(config)?),
                SessionState::Reporting(outcome) => {
                    self.report(&outcome)?;
                    SessionState::Done(outcome)
                }
                SessionState::Done(outcome) => {
                    self.finish()?;
                    return Ok(outcome);
                }
            };
        }
    }

    fn init(&mut self) -> ApplicationResult<SearchConfig> {
        let banner = self.options.format.header(BANNER);
        self.console.write_line(&banner).io_context("write banner")?;

        let n = match self.options.exponent {
            Some(n) => n,
            None => read_bounded_int(
                &mut *self.console,
                EXPONENT_PROMPT,
                Some(i64::from(MIN_EXPONENT)),
                Some(i64::from(MAX_EXPONENT)),
            )?,
        };
        let k = match self.options.bound {
            Some(k) => k,
            None => read_bounded_int(
                &mut *self.console,
                BOUND_PROMPT,
                Some(MIN_BOUND as i64),
                None,
            )?,
        };
        let config = SearchConfig::new(n, k)?;
        info!(n, k, "search configured");
        Ok(config)
    }

    fn scan(&mut self, config: SearchConfig) -> ApplicationResult<SearchOutcome> {
        let mut observer = ConsoleObserver {
            console: &mut *self.console,
            format: self.options.format,
        };
        NearMissSearch::new(config, self.options.method).run(&mut observer)
    }

    fn report(&mut self, outcome: &SearchOutcome) -> ApplicationResult<()> {
        self.console
            .write(&final_block(outcome, &self.options.format))
            .io_context("write final report")
    }

    fn finish(&mut self) -> ApplicationResult<()> {
        if !self.options.pause_on_exit {
            return Ok(());
        }
        self.console
            .write(&format!("\n{EXIT_PROMPT}"))
            .io_context("write exit prompt")?;
        // any line, or end of input, acknowledges
        self.console.read_line().io_context("read acknowledgment")?;
        Ok(())
    }
}

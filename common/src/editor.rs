use std::time::Duration;

use tracing::debug;

use crate::config::Config;
use crate::grid::{Coordinate, GridError};
use crate::input::{ClickEvent, EditMode};
use crate::maze::{Algorithm, Selection};
use crate::paint::{PaintSink, Trace};
use crate::pathfinder::{PathResult, SolveError};
use crate::playback::Playback;
use crate::session::Session;

pub const MISSING_ENDPOINTS_MESSAGE: &str = "select a start and end destination";
pub const NOT_FOUND_MESSAGE: &str = "no path found";

/// Front-end neutral commands. Each front end maps its own keys and
/// pointer events onto these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    SetMode(EditMode),
    CycleMode,
    Click(ClickEvent),
    Select(Coordinate),
    Solve,
    Generate,
    Scatter,
    Clear,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Message,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub level: StatusLevel,
}

impl Status {
    fn message<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            level: StatusLevel::Message,
        }
    }

    fn error<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            level: StatusLevel::Error,
        }
    }
}

/// Drives a `Session` on behalf of an interactive front end: keeps the edit
/// mode, the playback of the last search, and a one-line status.
pub struct Editor {
    session: Session,
    playback: Playback,
    mode: EditMode,
    status: Option<Status>,
    obstacle_density: f64,
    trace_shown: bool,
}

impl Editor {
    pub fn new(config: &Config) -> Result<Self, GridError> {
        let session = Session::new(config)?;
        Ok(Self::with_session(session, config))
    }

    pub fn with_session(session: Session, config: &Config) -> Self {
        Self {
            session,
            playback: Playback::new(config.step_delay),
            mode: EditMode::default(),
            status: None,
            obstacle_density: config.obstacle_density,
            trace_shown: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_running()
    }

    pub fn apply(&mut self, action: Action, sink: &mut dyn PaintSink) -> Flow {
        match action {
            Action::SetMode(mode) => self.set_mode(mode),
            Action::CycleMode => self.set_mode(self.mode.next()),
            Action::Click(event) => {
                let event = ClickEvent { mode: self.mode, ..event };
                self.wipe_trace(sink);
                self.session.handle_click(&event, sink);
            }
            Action::Select(coordinate) => {
                self.select(coordinate, sink);
            }
            Action::Solve => self.solve(sink),
            Action::Generate => self.generate(Algorithm::Backtrack, sink),
            Action::Scatter => self.generate(Algorithm::scatter(self.obstacle_density), sink),
            Action::Clear => {
                self.wipe_trace(sink);
                self.session.clear(sink);
                self.status = None;
            }
            Action::Quit => return Flow::Quit,
        }

        Flow::Continue
    }

    pub fn set_mode(&mut self, mode: EditMode) {
        debug!(%mode, "edit mode");
        self.mode = mode;
    }

    pub fn select(&mut self, coordinate: Coordinate, sink: &mut dyn PaintSink) -> Selection {
        self.wipe_trace(sink);
        self.session.select(self.mode, coordinate, sink)
    }

    /// Runs the search to completion straight away, then queues its steps
    /// for playback through `update`.
    pub fn solve(&mut self, sink: &mut dyn PaintSink) {
        self.wipe_trace(sink);

        let mut trace = Trace::new();
        match self.session.solve(&mut trace) {
            Ok(PathResult::Found(path)) => {
                self.status = Some(Status::message(format!(
                    "path found: {} cells, {} explored",
                    path.len(),
                    trace.entered_count()
                )));
            }
            Ok(PathResult::NotFound) => {
                self.status = Some(Status::error(NOT_FOUND_MESSAGE));
            }
            Err(SolveError::MissingEndpoints) => {
                self.status = Some(Status::error(MISSING_ENDPOINTS_MESSAGE));
                return;
            }
            Err(e @ SolveError::Cancelled { .. }) => {
                self.status = Some(Status::error(e.to_string()));
                return;
            }
        }

        self.playback.start(&trace);
        self.trace_shown = !trace.is_empty();
    }

    pub fn generate(&mut self, algorithm: Algorithm, sink: &mut dyn PaintSink) {
        self.wipe_trace(sink);
        let changed = self.session.generate(algorithm, rand::rng(), sink);
        self.status = Some(Status::message(format!(
            "{}: {} cells changed",
            algorithm, changed
        )));
    }

    /// Advances playback by one frame's worth of time.
    pub fn update(&mut self, dt: Duration, sink: &mut dyn PaintSink) {
        self.playback.advance(dt, sink);
    }

    /// Removes any search trace from the surface before the maze changes.
    fn wipe_trace(&mut self, sink: &mut dyn PaintSink) {
        self.playback.cancel();
        if self.trace_shown {
            self.session.repaint(sink);
            self.trace_shown = false;
        }
    }
}

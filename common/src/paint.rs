use strum::{Display, EnumIter};

use crate::grid::Coordinate;

/// What a cell should look like. The core only names colors; front ends
/// decide how each one is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PaintColor {
    Neutral,
    Start,
    Destination,
    Obstacle,
    Visiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    pub coordinate: Coordinate,
    pub color: PaintColor,
}

impl Paint {
    pub fn new(coordinate: Coordinate, color: PaintColor) -> Self {
        Self { coordinate, color }
    }
}

/// Write-only rendering surface. Nothing in the core reads paint back.
pub trait PaintSink {
    fn paint(&mut self, paint: Paint);
}

impl PaintSink for Vec<Paint> {
    fn paint(&mut self, paint: Paint) {
        self.push(paint);
    }
}

impl<S: PaintSink + ?Sized> PaintSink for &mut S {
    fn paint(&mut self, paint: Paint) {
        (**self).paint(paint);
    }
}

/// Discards every paint. For callers that only want state changes.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPaint;

impl PaintSink for NoPaint {
    fn paint(&mut self, _paint: Paint) {}
}

/// A cell joining or leaving the current search path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Entered(Coordinate),
    /// `restore` is the color the cell had before the search entered it.
    Backtracked {
        coordinate: Coordinate,
        restore: PaintColor,
    },
}

impl Step {
    pub fn coordinate(&self) -> Coordinate {
        match self {
            Step::Entered(coordinate) => *coordinate,
            Step::Backtracked { coordinate, .. } => *coordinate,
        }
    }

    pub fn to_paint(self) -> Paint {
        match self {
            Step::Entered(coordinate) => Paint::new(coordinate, PaintColor::Visiting),
            Step::Backtracked {
                coordinate,
                restore,
            } => Paint::new(coordinate, restore),
        }
    }
}

pub trait SearchObserver {
    fn on_step(&mut self, step: Step);

    /// Polled between steps; returning `true` abandons the search.
    fn should_cancel(&self) -> bool {
        false
    }
}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn on_step(&mut self, step: Step) {
        (**self).on_step(step);
    }

    fn should_cancel(&self) -> bool {
        (**self).should_cancel()
    }
}

/// Ignores every step.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unobserved;

impl SearchObserver for Unobserved {
    fn on_step(&mut self, _step: Step) {}
}

/// Turns search steps straight into paint calls on a surface.
pub struct Visualizer<S: PaintSink> {
    sink: S,
}

impl<S: PaintSink> Visualizer<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn into_inner(self) -> S {
        self.sink
    }
}

impl<S: PaintSink> SearchObserver for Visualizer<S> {
    fn on_step(&mut self, step: Step) {
        self.sink.paint(step.to_paint());
    }
}

/// Records the step sequence of one search so it can be replayed later,
/// e.g. one step per animation frame.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn entered_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step, Step::Entered(_)))
            .count()
    }

    pub fn paints(&self) -> impl Iterator<Item = Paint> + '_ {
        self.steps.iter().map(|step| step.to_paint())
    }

    /// Sends every recorded step through the visualization adapter at once.
    pub fn replay<S: PaintSink>(&self, sink: S) -> S {
        let mut visualizer = Visualizer::new(sink);
        for step in &self.steps {
            visualizer.on_step(*step);
        }
        visualizer.into_inner()
    }
}

impl SearchObserver for Trace {
    fn on_step(&mut self, step: Step) {
        self.steps.push(step);
    }
}

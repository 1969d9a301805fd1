use std::collections::HashSet;
use std::fmt;

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, trace};

use crate::graph::{EdgeId, VertexId, WordGraph};

/// Answer from the interactive collaborator before each new step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkDecision {
    Continue,
    Stop,
}

/// Source of continue/stop decisions for a random walk.
///
/// Asked once per pending step onto an edge not yet traversed in this
/// walk; never asked before a repeated edge or at a dead end.
pub trait WalkPrompt {
    fn ask_continue_or_stop(&mut self, current: &str) -> WalkDecision;
}

impl<F> WalkPrompt for F
where
    F: FnMut(&str) -> WalkDecision,
{
    fn ask_continue_or_stop(&mut self, current: &str) -> WalkDecision {
        self(current)
    }
}

/// Prompt that never interrupts.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoContinue;

impl WalkPrompt for AutoContinue {
    fn ask_continue_or_stop(&mut self, _current: &str) -> WalkDecision {
        WalkDecision::Continue
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The current word has no outgoing edges.
    NoOutgoingEdges,
    /// The chosen edge was already traversed; its target ends the path.
    RepeatedEdge,
    /// The prompt answered `Stop`.
    UserInterrupt,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StopReason::NoOutgoingEdges => "no outgoing edges",
            StopReason::RepeatedEdge => "repeated edge",
            StopReason::UserInterrupt => "user interrupt",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkState {
    Walking,
    Stopped(StopReason),
}

/// Words visited by a finished walk and why it ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalRecord {
    pub path: Vec<String>,
    pub reason: StopReason,
}

impl TraversalRecord {
    pub fn interrupted(&self) -> bool {
        self.reason == StopReason::UserInterrupt
    }

    /// The path as a space-joined string, the form persisted by callers.
    pub fn joined(&self) -> String {
        self.path.join(" ")
    }
}

impl fmt::Display for TraversalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.interrupted() {
            write!(f, "Walk interrupted by user: {}", self.joined())
        } else {
            write!(f, "Walk finished: {}", self.joined())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkOutcome {
    /// The graph is empty; no walk was attempted.
    NoVertices,
    Finished(TraversalRecord),
}

impl fmt::Display for WalkOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkOutcome::NoVertices => f.write_str("The graph has no vertices."),
            WalkOutcome::Finished(record) => write!(f, "{record}"),
        }
    }
}

/// Random edge-following traversal.
///
/// Each step picks one outgoing edge of the current word uniformly at
/// random. Every edge can be taken at most once: choosing an edge a second
/// time ends the walk, so a walk over a finite graph always terminates.
#[derive(Debug)]
pub struct RandomWalker<'g> {
    graph: &'g WordGraph,
    path: Vec<VertexId>,
    current: VertexId,
    traversed: HashSet<EdgeId>,
    state: WalkState,
}

impl<'g> RandomWalker<'g> {
    /// Start at a uniformly random vertex. `None` if the graph is empty.
    pub fn start<R: Rng + ?Sized>(graph: &'g WordGraph, rng: &mut R) -> Option<Self> {
        if graph.is_empty() {
            return None;
        }
        let start = rng.random_range(0..graph.vertex_count()) as VertexId;
        Self::start_at(graph, start)
    }

    /// Start at a given vertex. `None` if `start` was not issued by `graph`.
    pub fn start_at(graph: &'g WordGraph, start: VertexId) -> Option<Self> {
        if !graph.contains_vertex(start) {
            return None;
        }
        Some(Self {
            graph,
            path: vec![start],
            current: start,
            traversed: HashSet::new(),
            state: WalkState::Walking,
        })
    }

    pub fn state(&self) -> WalkState {
        self.state
    }

    pub fn current(&self) -> &str {
        self.graph.word(self.current)
    }

    /// Words visited so far.
    pub fn path(&self) -> impl Iterator<Item = &str> {
        self.path.iter().map(|&v| self.graph.word(v))
    }

    /// Advance by at most one edge. A stopped walker stays stopped.
    pub fn step<R, P>(&mut self, rng: &mut R, prompt: &mut P) -> WalkState
    where
        R: Rng + ?Sized,
        P: WalkPrompt + ?Sized,
    {
        if self.state != WalkState::Walking {
            return self.state;
        }

        let Some(edge) = self.graph.neighbors_out(self.current).choose(rng).copied() else {
            return self.stop(StopReason::NoOutgoingEdges);
        };

        if self.traversed.contains(&edge.id) {
            self.path.push(edge.target);
            return self.stop(StopReason::RepeatedEdge);
        }

        if prompt.ask_continue_or_stop(self.current()) == WalkDecision::Stop {
            return self.stop(StopReason::UserInterrupt);
        }

        trace!(from = self.current, to = edge.target, "walk step");
        self.traversed.insert(edge.id);
        self.current = edge.target;
        self.path.push(edge.target);
        self.state
    }

    /// Step until stopped and return the record.
    pub fn run<R, P>(mut self, rng: &mut R, prompt: &mut P) -> TraversalRecord
    where
        R: Rng + ?Sized,
        P: WalkPrompt + ?Sized,
    {
        loop {
            if let WalkState::Stopped(reason) = self.step(rng, prompt) {
                return TraversalRecord {
                    path: self.path().map(str::to_string).collect(),
                    reason,
                };
            }
        }
    }

    fn stop(&mut self, reason: StopReason) -> WalkState {
        debug!(%reason, steps = self.path.len() - 1, "random walk stopped");
        self.state = WalkState::Stopped(reason);
        self.state
    }
}

/// Walk from a random start vertex until the walk stops.
pub fn random_walk<R, P>(graph: &WordGraph, rng: &mut R, prompt: &mut P) -> WalkOutcome
where
    R: Rng + ?Sized,
    P: WalkPrompt + ?Sized,
{
    match RandomWalker::start(graph, rng) {
        Some(walker) => WalkOutcome::Finished(walker.run(rng, prompt)),
        None => WalkOutcome::NoVertices,
    }
}

//! Override lifecycle for the result currently on screen.
//!
//! A [`ChartSession`] is in one of two modes. It starts in
//! [`OverrideMode::Auto`], moves to [`OverrideMode::Overridden`] when the
//! user picks an available chart type, and returns to `Auto` either when
//! [`ChartSession::reset`] is called or when a new result is received.
//! Arrival is tracked by identity: every call to [`ChartSession::receive`]
//! counts as new data, even if the payload equals the previous one.

use log::debug;

use crate::{
    chart::ChartType,
    classify,
    data::TabularResult,
    plan::{self, ChartPlan},
    select,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResultId(u64);

impl ResultId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverrideMode {
    #[default]
    Auto,
    Overridden(ChartType),
}

#[derive(Debug, Default)]
pub struct ChartSession {
    current: Option<(ResultId, TabularResult)>,
    mode: OverrideMode,
    next_id: u64,
}

impl ChartSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the displayed result and drops any override.
    pub fn receive(&mut self, result: TabularResult) -> ResultId {
        self.next_id += 1;
        let id = ResultId(self.next_id);
        if let OverrideMode::Overridden(chart) = self.mode {
            debug!("Clearing chart override '{chart}' for new result {}", id.get());
        }
        self.mode = OverrideMode::Auto;
        self.current = Some((id, result));
        id
    }

    pub fn result_id(&self) -> Option<ResultId> {
        self.current.as_ref().map(|(id, _)| *id)
    }

    pub fn result(&self) -> Option<&TabularResult> {
        self.current.as_ref().map(|(_, result)| result)
    }

    pub fn mode(&self) -> OverrideMode {
        self.mode
    }

    pub fn override_type(&self) -> Option<ChartType> {
        match self.mode {
            OverrideMode::Auto => None,
            OverrideMode::Overridden(chart) => Some(chart),
        }
    }

    /// Chart types the current result can be switched to. Empty when no
    /// chart is possible.
    pub fn available_types(&self) -> Vec<ChartType> {
        self.result()
            .and_then(|result| {
                let roles = classify::classify_result(result)?;
                select::select(&roles, result.rows.len(), None)
            })
            .map(|selection| selection.available_types)
            .unwrap_or_default()
    }

    /// Applies a user pick. Rejected, leaving the mode unchanged, when the
    /// type is not available for the current result.
    pub fn set_override(&mut self, chart: ChartType) -> bool {
        if !self.available_types().contains(&chart) {
            debug!("Rejected chart override '{chart}'");
            return false;
        }
        self.mode = OverrideMode::Overridden(chart);
        true
    }

    pub fn reset(&mut self) {
        self.mode = OverrideMode::Auto;
    }

    /// Renders the current result with the current mode. Does not change
    /// the mode, so repeated renders keep an override in place.
    pub fn plan(&self) -> Option<ChartPlan> {
        let result = self.result()?;
        plan::render(result, self.override_type())
    }
}

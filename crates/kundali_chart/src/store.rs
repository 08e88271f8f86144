//! Latest published chart of each kind.

use log::info;

use crate::assembler::ChartReport;
use crate::chart::{Chart, ChartKind};
use crate::error::{ChartError, ComputationFailure};

/// Holds at most one birth chart and one transit chart.
///
/// A successful assembly replaces the chart of its kind; a failed one
/// leaves whatever was published before.
#[derive(Debug, Clone, Default)]
pub struct ChartStore {
    birth: Option<Chart>,
    transit: Option<Chart>,
}

impl ChartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish an assembly result, returning its per-part failures.
    pub fn publish(
        &mut self,
        result: Result<ChartReport, ChartError>,
    ) -> Result<Vec<ComputationFailure>, ChartError> {
        let ChartReport { chart, failures } = result?;
        info!(
            "publishing {:?} chart at JD {} ({} parts omitted)",
            chart.kind(),
            chart.jd_ut(),
            failures.len()
        );
        let kind = chart.kind();
        *self.slot_mut(kind) = Some(chart);
        Ok(failures)
    }

    pub fn get(&self, kind: ChartKind) -> Option<&Chart> {
        match kind {
            ChartKind::Birth => self.birth.as_ref(),
            ChartKind::Transit => self.transit.as_ref(),
        }
    }

    pub fn birth(&self) -> Option<&Chart> {
        self.birth.as_ref()
    }

    pub fn transit(&self) -> Option<&Chart> {
        self.transit.as_ref()
    }

    fn slot_mut(&mut self, kind: ChartKind) -> &mut Option<Chart> {
        match kind {
            ChartKind::Birth => &mut self.birth,
            ChartKind::Transit => &mut self.transit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_ephemeris::{AyanamshaSystem, ProviderError};

    fn report(kind: ChartKind, jd: f64) -> ChartReport {
        ChartReport {
            chart: Chart::new(kind, jd, AyanamshaSystem::Krishnamurti),
            failures: Vec::new(),
        }
    }

    #[test]
    fn publish_replaces_same_kind_only() {
        let mut store = ChartStore::new();
        store.publish(Ok(report(ChartKind::Birth, 1.0))).unwrap();
        store.publish(Ok(report(ChartKind::Transit, 2.0))).unwrap();
        store.publish(Ok(report(ChartKind::Birth, 3.0))).unwrap();
        assert_eq!(store.birth().map(Chart::jd_ut), Some(3.0));
        assert_eq!(store.transit().map(Chart::jd_ut), Some(2.0));
    }

    #[test]
    fn failed_assembly_keeps_previous_chart() {
        let mut store = ChartStore::new();
        store.publish(Ok(report(ChartKind::Birth, 1.0))).unwrap();
        let err = ChartError::ProviderUnavailable(ProviderError::Unavailable("down".into()));
        assert_eq!(store.publish(Err(err.clone())), Err(err));
        assert_eq!(store.get(ChartKind::Birth).map(Chart::jd_ut), Some(1.0));
        assert!(store.get(ChartKind::Transit).is_none());
    }
}

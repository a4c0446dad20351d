use log::info;

use crate::common::types::PageId;
use crate::policy::PolicyKind;
use crate::simulation::error::Result;
use crate::simulation::event::PolicyReport;
use crate::simulation::runner;

/// Which policies to run and in what order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub policies: Vec<PolicyKind>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            policies: PolicyKind::ALL.to_vec(),
        }
    }
}

/// Run FIFO, Optimal and LRU over the same trace, in that order
pub fn run_all(trace: &[PageId], num_frames: usize) -> Result<Vec<PolicyReport>> {
    run_with_config(trace, num_frames, &SimulationConfig::default())
}

/// Run the configured policies, each from empty frames
///
/// Either every run completes or an error is returned; no partial set of
/// reports is produced.
pub fn run_with_config(
    trace: &[PageId],
    num_frames: usize,
    config: &SimulationConfig,
) -> Result<Vec<PolicyReport>> {
    info!(
        "Simulating {} references over {} frames with {} policies",
        trace.len(),
        num_frames,
        config.policies.len()
    );

    config
        .policies
        .iter()
        .map(|&kind| runner::run(trace, num_frames, kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_in_fixed_order() {
        let reports = run_all(&[1, 2, 3], 2).unwrap();
        let order: Vec<PolicyKind> = reports.iter().map(|r| r.policy).collect();
        assert_eq!(order, PolicyKind::ALL.to_vec());
    }

    #[test]
    fn test_config_selects_subset() {
        let config = SimulationConfig {
            policies: vec![PolicyKind::Lru, PolicyKind::Fifo],
        };
        let reports = run_with_config(&[1, 2, 3, 1], 2, &config).unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].policy, PolicyKind::Lru);
        assert_eq!(reports[1].policy, PolicyKind::Fifo);
    }
}

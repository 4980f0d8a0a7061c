//! End-to-end engine tests
//!
//! Drive the full core flow (build, validate, plan, schedule, aggregate)
//! with deterministic fake probes.

#[cfg(test)]
mod tests {
    use crate::common::probes::ScriptedProbe;
    use crate::common::{edge_pairs, node_ids, scenario_graph};
    use healthgraph::{
        aggregate, plan, run_all, DependencyGraph, OverallStatus, ProbeStatus, SchedulerOptions,
    };
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    /// Scenario: all probes OK. Overall HEALTHY, one entry per node, total
    /// duration is the sum of the fixed durations.
    #[tokio::test]
    async fn test_scenario_all_ok() {
        let graph = scenario_graph();
        let order = plan(&graph).unwrap();
        let probe = Arc::new(ScriptedProbe::passing(Duration::from_millis(50)));

        let started = Instant::now();
        let results = run_all(&order, probe, &SchedulerOptions::default()).await;
        let report = aggregate(results, started.elapsed()).unwrap();

        assert_eq!(report.overall, OverallStatus::Healthy);
        assert_eq!(report.components.len(), 3);
        assert_eq!(report.total_duration, Duration::from_millis(150));
    }

    /// Scenario: Database forced FAILED. Overall DEGRADED, other entries
    /// unaffected.
    #[tokio::test]
    async fn test_scenario_database_failure_degrades() {
        let graph = scenario_graph();
        let order = plan(&graph).unwrap();
        let probe = Arc::new(ScriptedProbe::failing_for(
            Duration::from_millis(10),
            &["Database"],
        ));

        let started = Instant::now();
        let results = run_all(&order, probe, &SchedulerOptions::default()).await;
        let report = aggregate(results, started.elapsed()).unwrap();

        assert_eq!(report.overall, OverallStatus::Degraded);
        assert_eq!(report.components["Database"].status, ProbeStatus::Failed);
        assert_eq!(report.components["API"].status, ProbeStatus::Ok);
        assert_eq!(report.components["Cache"].status, ProbeStatus::Ok);
    }

    /// Cardinality invariant: one result per declared node
    #[tokio::test]
    async fn test_one_result_per_declared_node() {
        let graph = DependencyGraph::build(
            node_ids(&["a", "b", "c", "d", "e", "f"]),
            edge_pairs(&[("a", "b"), ("c", "d")]),
        )
        .unwrap();
        let order = plan(&graph).unwrap();
        let probe = Arc::new(ScriptedProbe::passing(Duration::from_millis(1)));

        let results = run_all(&order, probe.clone(), &SchedulerOptions::default()).await;

        assert_eq!(results.len(), 6);
        assert_eq!(probe.invocations(), 6);
    }

    /// Cycle rejection happens before any probe side effect
    #[tokio::test]
    async fn test_cycle_rejected_before_probes_run() {
        let graph = DependencyGraph::build(
            node_ids(&["A", "B"]),
            edge_pairs(&[("A", "B"), ("B", "A")]),
        )
        .unwrap();
        let probe = Arc::new(ScriptedProbe::passing(Duration::from_millis(1)));

        let validation = graph.ensure_acyclic();
        assert!(validation.is_err());
        // The flow short-circuits on validation; the probe never runs.
        assert_eq!(probe.invocations(), 0);
    }

    /// Concurrency property: five 200ms probes finish well under a second
    #[tokio::test]
    async fn test_wall_time_tracks_slowest_probe() {
        let graph = DependencyGraph::build(
            node_ids(&["a", "b", "c", "d", "e"]),
            vec![],
        )
        .unwrap();
        let order = plan(&graph).unwrap();
        let probe = Arc::new(ScriptedProbe::passing(Duration::from_millis(200)));

        let started = Instant::now();
        let results = run_all(&order, probe, &SchedulerOptions::default()).await;
        let wall = started.elapsed();
        let report = aggregate(results, wall).unwrap();

        assert_eq!(report.components.len(), 5);
        assert!(wall < Duration::from_millis(1000), "took {:?}", wall);
        // The summed metric still reflects the full probe-seconds spent.
        assert_eq!(report.total_duration, Duration::from_millis(1000));
        assert!(report.elapsed < report.total_duration);
    }

    /// Aggregation twice over the same results is identical
    #[tokio::test]
    async fn test_aggregation_idempotent_over_run() {
        let graph = scenario_graph();
        let order = plan(&graph).unwrap();
        let probe = Arc::new(ScriptedProbe::failing_for(
            Duration::from_millis(5),
            &["Cache"],
        ));

        let results = run_all(&order, probe, &SchedulerOptions::default()).await;
        let elapsed = Duration::from_millis(7);

        let first = aggregate(results.clone(), elapsed).unwrap();
        let second = aggregate(results, elapsed).unwrap();

        assert_eq!(first.overall, second.overall);
        assert_eq!(first.total_duration, second.total_duration);
        assert_eq!(first.summary, second.summary);
        assert_eq!(first.status_classes(), second.status_classes());
    }
}

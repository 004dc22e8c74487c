//! Unit tests for epi-population.

use epi_core::{PersonId, SimRng};

use crate::PopulationGraph;

/// Check the symmetric / simple invariants on every individual.
fn assert_simple_symmetric(graph: &PopulationGraph) {
    let mut half_edges = 0usize;
    for a in graph.person_ids() {
        let ns = graph.neighbors(a);
        half_edges += ns.len();
        assert!(!ns.contains(&a), "{a} has a self-loop");
        let mut sorted = ns.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), ns.len(), "{a} has a duplicate neighbor");
        for &b in ns {
            assert!(graph.neighbors(b).contains(&a), "{a} -> {b} is not mirrored");
            assert!(graph.are_connected(a, b));
            assert!(graph.are_connected(b, a));
        }
    }
    assert_eq!(half_edges, 2 * graph.edge_count());
}

#[cfg(test)]
mod builder {
    use super::*;
    use crate::{build_population, PopulationBuilder};

    #[test]
    fn graph_is_simple_and_symmetric() {
        let mut rng = SimRng::new(42);
        let (graph, _) = PopulationBuilder::new(2_000, 12)
            .immunity(0.1)
            .build(&mut rng)
            .unwrap();
        assert_eq!(graph.len(), 2_000);
        assert!(graph.edge_count() > 0);
        assert_simple_symmetric(&graph);
    }

    #[test]
    fn degree_never_exceeds_connectivity_bound() {
        // An individual's degree is at most its own budget plus the units
        // spent by others on it, all of which come from its budget, so the
        // drawn target (< connectivity) caps it.
        let mut rng = SimRng::new(3);
        let (graph, _) = PopulationBuilder::new(500, 8).build(&mut rng).unwrap();
        for p in graph.person_ids() {
            assert!(graph.degree(p) < 8, "{p} has degree {}", graph.degree(p));
        }
    }

    #[test]
    fn zero_connectivity_yields_no_edges() {
        let mut rng = SimRng::new(1);
        let (graph, stats) = PopulationBuilder::new(10, 0).build(&mut rng).unwrap();
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.person_ids().all(|p| graph.neighbors(p).is_empty()));
        assert_eq!(stats.budget_total, 0);
        assert_eq!(stats.candidate_draws, 0);
    }

    #[test]
    fn connectivity_one_yields_no_edges() {
        // Targets are drawn from 0..1, i.e. always zero.
        let mut rng = SimRng::new(1);
        let (graph, _) = PopulationBuilder::new(50, 1).build(&mut rng).unwrap();
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn single_individual_terminates_without_edges() {
        // Every candidate is the individual itself; each budget unit must
        // be abandoned after exactly `retry_limit` draws.
        let mut rng = SimRng::new(9);
        let (graph, stats) = PopulationBuilder::new(1, 50)
            .retry_limit(3)
            .build(&mut rng)
            .unwrap();
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(stats.exhausted_slots, stats.budget_total);
        assert_eq!(stats.candidate_draws, stats.budget_total * 3);
    }

    #[test]
    fn saturated_population_terminates() {
        // Budgets far above what 5 people can satisfy: at most 10 edges exist.
        let mut rng = SimRng::new(11);
        let (graph, stats) = PopulationBuilder::new(5, 1_000)
            .retry_limit(4)
            .build(&mut rng)
            .unwrap();
        assert!(graph.edge_count() <= 10);
        assert!(stats.exhausted_slots > 0);
        assert!(stats.candidate_draws <= stats.budget_total * 4);
        assert_simple_symmetric(&graph);
    }

    #[test]
    fn stats_account_for_every_budget_unit() {
        // Each budget unit ends as one end of an edge or as a slot given up
        // after `retry_limit` misses; both are counted as they happen.
        for (size, connectivity, retry_limit, seed) in
            [(300, 20, 5, 5), (40, 30, 1, 6), (1_000, 8, 3, 7), (2, 5, 2, 8)]
        {
            let mut rng = SimRng::new(seed);
            let (graph, stats) = PopulationBuilder::new(size, connectivity)
                .retry_limit(retry_limit)
                .build(&mut rng)
                .unwrap();
            assert_eq!(stats.edges_created, graph.edge_count() as u64);
            let degree_sum: u64 = graph.person_ids().map(|p| graph.degree(p) as u64).sum();
            assert_eq!(degree_sum, 2 * stats.edges_created);
            assert_eq!(
                stats.budget_total,
                2 * stats.edges_created + stats.exhausted_slots,
                "size {size}, connectivity {connectivity}, retry limit {retry_limit}",
            );
            assert!(stats.candidate_draws >= stats.edges_created + stats.exhausted_slots);
        }
    }

    #[test]
    fn same_seed_same_graph() {
        let build = || {
            let mut rng = SimRng::new(77);
            build_population(400, 10, 0.3, 5, &mut rng).unwrap()
        };
        let (a, b) = (build(), build());
        for p in a.person_ids() {
            assert_eq!(a.neighbors(p), b.neighbors(p));
            assert_eq!(a.is_immune(p), b.is_immune(p));
        }
    }

    #[test]
    fn immunity_extremes() {
        let mut rng = SimRng::new(2);
        let none = build_population(100, 4, 0.0, 5, &mut rng).unwrap();
        assert_eq!(none.immune_count(), 0);
        let all = build_population(100, 4, 1.0, 5, &mut rng).unwrap();
        assert_eq!(all.immune_count(), 100);
    }

    #[test]
    fn everyone_starts_healthy() {
        let mut rng = SimRng::new(2);
        let g = build_population(64, 6, 0.5, 5, &mut rng).unwrap();
        assert!(g.health().iter().all(|r| r.is_healthy() && r.days_sick == 0));
    }

    #[test]
    fn invalid_parameters_rejected() {
        let mut rng = SimRng::new(0);
        let cases = [
            (PopulationBuilder::new(0, 5), "population_size"),
            (PopulationBuilder::new(10, 5).immunity(1.2), "immunity"),
            (PopulationBuilder::new(10, 5).immunity(-0.5), "immunity"),
            (PopulationBuilder::new(10, 5).retry_limit(0), "retry_limit"),
        ];
        for (builder, name) in cases {
            let err = builder.build(&mut rng).unwrap_err();
            assert_eq!(err.parameter(), name);
        }
    }

    #[test]
    fn from_config_uses_every_field() {
        let cfg = epi_core::SimConfig {
            population_size: 20,
            connectivity:    0,
            immunity:        1.0,
            retry_limit:     2,
            days:            1,
            seed:            0,
        };
        let mut rng = SimRng::new(cfg.seed);
        let (g, _) = PopulationBuilder::from_config(&cfg).build(&mut rng).unwrap();
        assert_eq!(g.len(), 20);
        assert_eq!(g.immune_count(), 20);
        assert_eq!(g.edge_count(), 0);
    }
}

#[cfg(test)]
mod graph {
    use super::*;
    use epi_core::{HealthRecord, HealthState};

    fn triangle() -> PopulationGraph {
        PopulationGraph::from_edges(
            vec![false, true, false],
            [
                (PersonId(0), PersonId(1)),
                (PersonId(1), PersonId(2)),
                (PersonId(2), PersonId(1)), // duplicate, reversed
                (PersonId(0), PersonId(2)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn explicit_edges_collapse_duplicates() {
        let g = triangle();
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.neighbors(PersonId(1)), &[PersonId(0), PersonId(2)]);
        assert_simple_symmetric(&g);
        assert_eq!(g.mean_degree(), 2.0);
    }

    #[test]
    fn explicit_self_loop_rejected() {
        let err = PopulationGraph::from_edges(vec![false; 2], [(PersonId(1), PersonId(1))])
            .unwrap_err();
        assert_eq!(err.parameter(), "edge");
    }

    #[test]
    fn explicit_out_of_range_rejected() {
        let r = PopulationGraph::from_edges(vec![false; 2], [(PersonId(0), PersonId(2))]);
        assert!(r.is_err());
    }

    #[test]
    fn individual_view_reflects_state() {
        let mut g = triangle();
        g.health_mut()[1] = HealthRecord { state: HealthState::Sick, days_sick: 2 };
        let p = g.individual(PersonId(1));
        assert_eq!(p.id, PersonId(1));
        assert_eq!(p.health_state, HealthState::Sick);
        assert_eq!(p.days_sick, 2);
        assert!(p.is_immune);
        assert_eq!(p.neighbors.len(), 2);
        assert_eq!(g.individuals().count(), 3);
    }

    #[test]
    fn replace_health_returns_previous_buffer() {
        let mut g = triangle();
        let next = vec![HealthRecord::DEAD; 3];
        let prev = g.replace_health(next).unwrap();
        assert!(prev.iter().all(|r| r.is_healthy()));
        assert!(g.health().iter().all(|r| r.is_dead()));
    }

    #[test]
    fn replace_health_length_mismatch_keeps_records() {
        let mut g = triangle();
        g.health_mut()[2] = HealthRecord::DEAD;
        let err = g.replace_health(vec![HealthRecord::HEALTHY; 2]).unwrap_err();
        assert_eq!(err.parameter(), "health");
        assert!(g.health()[2].is_dead());
        assert_eq!(g.health().len(), 3);
    }
}

#[cfg(test)]
mod rngs {
    use crate::PersonRngs;
    use epi_core::PersonId;

    #[test]
    fn one_rng_per_person() {
        let rngs = PersonRngs::new(17, 1);
        assert_eq!(rngs.len(), 17);
        assert!(!rngs.is_empty());
    }

    #[test]
    fn streams_are_reproducible() {
        let mut a = PersonRngs::new(4, 99);
        let mut b = PersonRngs::new(4, 99);
        let x: u64 = a.get_mut(PersonId(3)).random();
        let y: u64 = b.get_mut(PersonId(3)).random();
        assert_eq!(x, y);
    }
}

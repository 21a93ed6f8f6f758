//! End-to-end pipeline: construct, optionally improve, evaluate, rank.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constructive::{clarke_wright_savings, nearest_neighbor};
use crate::distance::{CostMatrices, DistanceMatrix};
use crate::error::{Result, RoutingError};
use crate::evaluation::{best_index, check_demand, DemandCheck, SolutionEvaluator};
use crate::local_search::two_opt_improve_with_limit;
use crate::models::{Problem, Route, Solution};

/// A constructive heuristic the pipeline can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    NearestNeighbor,
    ClarkeWright,
}

impl Algorithm {
    /// Label attached to solutions built by this algorithm.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::NearestNeighbor => "Nearest Neighbor",
            Algorithm::ClarkeWright => "Clarke-Wright",
        }
    }

    /// Runs the heuristic.
    pub fn construct(&self, problem: &Problem, distances: &DistanceMatrix) -> Vec<Route> {
        match self {
            Algorithm::NearestNeighbor => nearest_neighbor(problem, distances),
            Algorithm::ClarkeWright => clarke_wright_savings(problem, distances),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pipeline configuration.
///
/// Every field has a default, so a partial (or empty) JSON object is a
/// valid configuration.
///
/// # Examples
///
/// ```
/// use cvrp_engine::solver::{Algorithm, SolverConfig};
///
/// let config = SolverConfig::default()
///     .with_algorithms(vec![Algorithm::ClarkeWright])
///     .with_max_two_opt_passes(50);
/// assert!(config.improve);
/// assert_eq!(config.max_two_opt_passes, Some(50));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SolverConfig {
    /// Constructors to run, in order.
    pub algorithms: Vec<Algorithm>,
    /// Whether to add a 2-opt improved copy of each constructed solution.
    pub improve: bool,
    /// Upper bound on 2-opt passes per route; `None` runs to convergence.
    pub max_two_opt_passes: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            algorithms: vec![Algorithm::NearestNeighbor, Algorithm::ClarkeWright],
            improve: true,
            max_two_opt_passes: None,
        }
    }
}

impl SolverConfig {
    /// Replaces the list of constructors.
    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.algorithms = algorithms;
        self
    }

    /// Enables or disables the 2-opt stage.
    pub fn with_improve(mut self, improve: bool) -> Self {
        self.improve = improve;
        self
    }

    /// Caps the number of 2-opt passes per route.
    pub fn with_max_two_opt_passes(mut self, passes: usize) -> Self {
        self.max_two_opt_passes = Some(passes);
        self
    }
}

/// Everything a solve produced.
///
/// Always holds at least one solution, and `best` always indexes one of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SolveReportData", into = "SolveReportData")]
pub struct SolveReport {
    solutions: Vec<Solution>,
    best: usize,
    demand: DemandCheck,
}

impl SolveReport {
    /// Candidate solutions in generation order.
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    /// Index into [`solutions`](Self::solutions) of the shortest one.
    pub fn best_index(&self) -> usize {
        self.best
    }

    /// The shortest candidate.
    pub fn best_solution(&self) -> &Solution {
        &self.solutions[self.best]
    }

    /// Advisory demand check run before construction.
    pub fn demand(&self) -> &DemandCheck {
        &self.demand
    }

    /// Consumes the report, returning all candidates.
    pub fn into_solutions(self) -> Vec<Solution> {
        self.solutions
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SolveReportData {
    solutions: Vec<Solution>,
    best: usize,
    demand: DemandCheck,
}

impl TryFrom<SolveReportData> for SolveReport {
    type Error = RoutingError;

    fn try_from(data: SolveReportData) -> Result<Self> {
        if data.best >= data.solutions.len() {
            return Err(RoutingError::BestOutOfRange {
                best: data.best,
                solutions: data.solutions.len(),
            });
        }
        Ok(Self {
            solutions: data.solutions,
            best: data.best,
            demand: data.demand,
        })
    }
}

impl From<SolveReport> for SolveReportData {
    fn from(r: SolveReport) -> Self {
        Self {
            solutions: r.solutions,
            best: r.best,
            demand: r.demand,
        }
    }
}

/// Runs the configured constructors, optionally improves every route with
/// 2-opt, and ranks the resulting solutions by total distance.
///
/// Infeasible demand is reported in [`SolveReport::demand`] and logged, but
/// does not stop the solve.
///
/// # Examples
///
/// ```
/// use cvrp_engine::distance::{CostMatrices, DistanceMatrix};
/// use cvrp_engine::models::{Customer, Depot, Problem};
/// use cvrp_engine::solver::{solve, SolverConfig};
///
/// let problem = Problem::new(
///     Depot::new(0.0, 0.0),
///     vec![Customer::new("a", 0.0, 0.0, 5), Customer::new("b", 0.0, 0.0, 5)],
///     1,
///     10,
/// )
/// .unwrap();
/// let rows = vec![
///     vec![0.0, 3.0, 4.0],
///     vec![3.0, 0.0, 2.0],
///     vec![4.0, 2.0, 0.0],
/// ];
/// let distance = DistanceMatrix::from_rows(rows.clone()).unwrap();
/// let duration = DistanceMatrix::from_rows(rows).unwrap();
/// let matrices = CostMatrices::for_problem(&problem, distance, duration).unwrap();
///
/// let report = solve(&problem, &matrices, &SolverConfig::default()).unwrap();
/// assert_eq!(report.solutions().len(), 4);
/// assert_eq!(report.best_solution().total_distance(), 9.0);
/// ```
pub fn solve(
    problem: &Problem,
    matrices: &CostMatrices,
    config: &SolverConfig,
) -> Result<SolveReport> {
    if config.algorithms.is_empty() {
        return Err(RoutingError::NoAlgorithms);
    }
    matrices.check_covers(problem)?;

    let demand = check_demand(problem);
    let evaluator = SolutionEvaluator::for_problem(problem, matrices);
    let distances = matrices.distance();

    let mut solutions = Vec::with_capacity(config.algorithms.len() * 2);
    for algorithm in &config.algorithms {
        let routes = algorithm.construct(problem, distances);
        let constructed = evaluator.evaluate(algorithm.label(), routes)?;

        let improved = if config.improve {
            let routes = constructed
                .routes()
                .iter()
                .cloned()
                .map(|r| two_opt_improve_with_limit(r, distances, config.max_two_opt_passes))
                .collect();
            Some(evaluator.evaluate(format!("{} + 2-Opt", algorithm.label()), routes)?)
        } else {
            None
        };

        solutions.push(constructed);
        solutions.extend(improved);
    }

    let best = best_index(&solutions).ok_or(RoutingError::NoAlgorithms)?;
    debug!(
        candidates = solutions.len(),
        best = solutions[best].label(),
        distance = solutions[best].total_distance(),
        "solve finished"
    );

    Ok(SolveReport {
        solutions,
        best,
        demand,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, Depot};

    fn euclidean(points: &[(f64, f64)]) -> DistanceMatrix {
        let n = points.len();
        let mut dm = DistanceMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                let dx = points[i].0 - points[j].0;
                let dy = points[i].1 - points[j].1;
                dm.set(i, j, (dx * dx + dy * dy).sqrt());
            }
        }
        dm
    }

    fn setup(vehicles: usize, capacity: i32) -> (Problem, CostMatrices) {
        let points = [
            (0.0, 0.0),
            (0.0, 2.0),
            (2.0, 0.0),
            (2.0, 2.0),
            (-1.0, 3.0),
            (3.0, -1.0),
        ];
        let customers = (1..points.len())
            .map(|i| Customer::new(format!("c{i}"), points[i].1, points[i].0, 3))
            .collect();
        let problem = Problem::new(Depot::new(0.0, 0.0), customers, vehicles, capacity)
            .expect("valid")
            .with_fuel_consumption(10.0)
            .expect("valid rate");
        let distance = euclidean(&points);
        let mut duration = distance.clone();
        for i in 0..points.len() {
            for j in 0..points.len() {
                duration.set(i, j, distance.get(i, j) * 120.0);
            }
        }
        let matrices = CostMatrices::for_problem(&problem, distance, duration).expect("valid");
        (problem, matrices)
    }

    #[test]
    fn test_solve_default_produces_four_candidates() {
        let (problem, matrices) = setup(2, 9);
        let report = solve(&problem, &matrices, &SolverConfig::default()).expect("solves");
        let labels: Vec<&str> = report.solutions().iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Nearest Neighbor",
                "Nearest Neighbor + 2-Opt",
                "Clarke-Wright",
                "Clarke-Wright + 2-Opt"
            ]
        );
        assert!(report.demand().is_feasible());
        let best = report.best_solution().total_distance();
        for s in report.solutions() {
            assert!(best <= s.total_distance());
        }
    }

    #[test]
    fn test_solve_improved_never_worse() {
        let (problem, matrices) = setup(2, 9);
        let report = solve(&problem, &matrices, &SolverConfig::default()).expect("solves");
        for pair in report.solutions().chunks(2) {
            assert!(pair[1].total_distance() <= pair[0].total_distance() + 1e-10);
            assert_eq!(pair[1].num_served(), pair[0].num_served());
        }
    }

    #[test]
    fn test_solve_without_improvement() {
        let (problem, matrices) = setup(2, 9);
        let config = SolverConfig::default()
            .with_algorithms(vec![Algorithm::ClarkeWright])
            .with_improve(false);
        let report = solve(&problem, &matrices, &config).expect("solves");
        assert_eq!(report.solutions().len(), 1);
        assert_eq!(report.best_index(), 0);
        assert_eq!(report.best_solution().label(), "Clarke-Wright");
    }

    #[test]
    fn test_solve_reports_infeasible_demand() {
        let (problem, matrices) = setup(1, 9);
        let config = SolverConfig::default().with_algorithms(vec![Algorithm::NearestNeighbor]);
        let report = solve(&problem, &matrices, &config).expect("solves anyway");
        assert!(!report.demand().is_feasible());
        assert_eq!(report.solutions()[0].num_served(), 3);
        assert_eq!(report.solutions()[0].vehicle_count(), 1);
    }

    #[test]
    fn test_solve_totals_include_duration_and_fuel() {
        let (problem, matrices) = setup(2, 9);
        let config = SolverConfig::default().with_improve(false);
        let report = solve(&problem, &matrices, &config).expect("solves");
        for s in report.solutions() {
            assert!((s.total_duration() - s.total_distance() * 120.0).abs() < 1e-6);
            assert!((s.total_fuel() - s.total_distance() / 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_solve_rejects_empty_algorithm_list() {
        let (problem, matrices) = setup(2, 9);
        let config = SolverConfig::default().with_algorithms(vec![]);
        assert_eq!(
            solve(&problem, &matrices, &config).unwrap_err(),
            RoutingError::NoAlgorithms
        );
    }

    #[test]
    fn test_solve_rejects_mismatched_matrices() {
        let (problem, _) = setup(2, 9);
        let small = DistanceMatrix::new(3);
        let matrices = CostMatrices::new(small.clone(), small).expect("valid");
        let err = solve(&problem, &matrices, &SolverConfig::default()).unwrap_err();
        assert_eq!(
            err,
            RoutingError::MatrixSizeMismatch {
                expected: 6,
                actual: 3
            }
        );
    }

    #[test]
    fn test_config_from_json() {
        let config: SolverConfig =
            serde_json::from_str(r#"{"algorithms": ["clarke_wright"], "maxTwoOptPasses": 3}"#)
                .expect("valid config");
        assert_eq!(config.algorithms, vec![Algorithm::ClarkeWright]);
        assert!(config.improve);
        assert_eq!(config.max_two_opt_passes, Some(3));

        let empty: SolverConfig = serde_json::from_str("{}").expect("defaults");
        assert_eq!(empty, SolverConfig::default());
    }

    #[test]
    fn test_report_json_round_trip() {
        let (problem, matrices) = setup(2, 9);
        let report = solve(&problem, &matrices, &SolverConfig::default()).expect("solves");
        let json = serde_json::to_string(&report).expect("serializes");
        let back: SolveReport = serde_json::from_str(&json).expect("valid report");
        assert_eq!(back.best_index(), report.best_index());
        assert_eq!(back.solutions().len(), 4);
    }

    #[test]
    fn test_report_rejects_out_of_range_best() {
        let (problem, matrices) = setup(2, 9);
        let report = solve(&problem, &matrices, &SolverConfig::default()).expect("solves");
        let mut json = serde_json::to_value(&report).expect("serializes");
        json["best"] = serde_json::json!(4);
        let err = serde_json::from_value::<SolveReport>(json.clone()).unwrap_err();
        assert!(err.to_string().contains("best index 4 is out of range for 4 solutions"));

        json["solutions"] = serde_json::json!([]);
        json["best"] = serde_json::json!(0);
        assert!(serde_json::from_value::<SolveReport>(json).is_err());
    }

    #[test]
    fn test_algorithm_display() {
        assert_eq!(Algorithm::NearestNeighbor.to_string(), "Nearest Neighbor");
        assert_eq!(Algorithm::ClarkeWright.to_string(), "Clarke-Wright");
    }
}

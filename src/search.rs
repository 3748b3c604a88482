use crate::graph::CityGraph;
use crate::problem::TourProblem;
use crate::tour::{Tour, TourState};
use pathfinding::prelude::astar;

/// Best-first search over partial tours, delegating the traversal order,
/// the open list and the closed set to `pathfinding`'s A*.
///
/// Instances with fewer than two cities short-circuit to a trivial tour.
/// `None` means the state space was exhausted without closing a tour.
pub fn solve(graph: &CityGraph) -> Option<Tour> {
    if graph.city_count() == 0 {
        return Some(Tour::trivial(Vec::new()));
    }
    if graph.city_count() == 1 {
        let label = graph.label(graph.start()).to_owned();
        return Some(Tour::trivial(vec![label]));
    }

    let problem = TourProblem::new(graph);
    let start = TourState::start(graph.start(), graph.city_count());
    let (states, cost) = astar(
        &start,
        |state| problem.successors(state),
        |state| problem.heuristic(state),
        |state| problem.is_goal(state),
    )?;
    let goal = states.last()?;
    Some(Tour::from_state(goal, cost.into_inner(), graph))
}

use crate::graph::{City, CityGraph};
use crate::tour::TourState;
use ordered_float::OrderedFloat;
use smallvec::{smallvec, SmallVec};

/// Search-space definition handed to the external A* routine: which moves a
/// partial tour allows, what they cost, when the tour is done, and the
/// remaining-cost estimate. All operations are pure lookups against the
/// city graph passed in at construction.
pub struct TourProblem<'a> {
    graph: &'a CityGraph,
}

impl<'a> TourProblem<'a> {
    pub fn new(graph: &'a CityGraph) -> Self {
        TourProblem { graph }
    }

    /// Unvisited cities while any remain, then the single closing move back
    /// to the start; a closed tour allows nothing further.
    pub fn actions(&self, state: &TourState) -> SmallVec<[City; 8]> {
        let n = self.graph.city_count();
        if state.is_closed(n) {
            return smallvec![];
        }
        if state.all_visited(n) {
            return smallvec![self.graph.start()];
        }
        state.unvisited(n).collect()
    }

    pub fn result(&self, state: &TourState, action: City) -> TourState {
        state.push(action)
    }

    pub fn cost(&self, state: &TourState, action: City) -> f64 {
        self.graph.cost(state.last(), action)
    }

    /// The goal is a tour of length city count + 1 that has come back to
    /// the start.
    pub fn is_goal(&self, state: &TourState) -> bool {
        state.is_closed(self.graph.city_count()) && state.last() == self.graph.start()
    }

    /// Greedy estimate: cost to the nearest unvisited city, or back to the
    /// start once every city is visited. Not a proven admissible bound, so
    /// the tour found is not guaranteed to be the cheapest one.
    pub fn heuristic(&self, state: &TourState) -> OrderedFloat<f64> {
        let last = state.last();
        let estimate = self
            .graph
            .min_cost_to(last, state.unvisited(self.graph.city_count()))
            .unwrap_or_else(|| self.graph.cost(last, self.graph.start()));
        OrderedFloat(estimate)
    }

    /// `actions`, `result` and `cost` bundled in the shape
    /// `pathfinding::prelude::astar` expects of a successor function.
    pub fn successors(&self, state: &TourState) -> Vec<(TourState, OrderedFloat<f64>)> {
        self.actions(state)
            .into_iter()
            .map(|city| {
                let cost = self.cost(state, city);
                (self.result(state, city), OrderedFloat(cost))
            })
            .collect()
    }
}

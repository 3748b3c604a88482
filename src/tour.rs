use crate::graph::{City, CityGraph};
use fixedbitset::FixedBitSet;
use itertools::Itertools;
use smallvec::{smallvec, SmallVec};
use std::hash::{Hash, Hasher};

/// Partial round trip used as the search node.
///
/// Two states are equal iff their visited sequences are identical, so
/// equality and hash cover the sequence only; the bitset is derived
/// bookkeeping for constant-time membership checks.
#[derive(Debug, Clone)]
pub struct TourState {
    path: SmallVec<[City; 8]>,
    visited: FixedBitSet,
}

impl PartialEq for TourState {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for TourState {}

impl Hash for TourState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl TourState {
    pub fn start(start: City, city_count: usize) -> Self {
        let mut visited = FixedBitSet::with_capacity(city_count);
        visited.insert(start.0 as usize);
        TourState {
            path: smallvec![start],
            visited,
        }
    }

    /// The state extended by one visit.
    pub fn push(&self, city: City) -> Self {
        let mut next = self.clone();
        next.path.push(city);
        next.visited.insert(city.0 as usize);
        next
    }

    pub fn last(&self) -> City {
        *self.path.last().unwrap()
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn contains(&self, city: City) -> bool {
        self.visited.contains(city.0 as usize)
    }

    /// Cities not yet part of the tour, in ascending identifier order.
    pub fn unvisited(&self, city_count: usize) -> impl Iterator<Item = City> + '_ {
        (0..city_count as u32)
            .map(City)
            .filter(move |&city| !self.contains(city))
    }

    pub fn all_visited(&self, city_count: usize) -> bool {
        self.visited.count_ones(..) == city_count
    }

    /// A closed tour has returned to the start after visiting every city.
    pub fn is_closed(&self, city_count: usize) -> bool {
        self.path.len() == city_count + 1
    }

    pub fn cities(&self) -> &[City] {
        &self.path
    }
}

/// One transition of the finished tour.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    pub from: String,
    pub to: String,
    pub cost: f64,
}

/// Result of the search: the visit order with the closing return to the
/// start, its total cost, and the per-leg breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    pub cities: Vec<String>,
    pub cost: f64,
    pub legs: Vec<Leg>,
}

impl Tour {
    /// Tour over fewer than two cities; there is nothing to traverse.
    pub fn trivial(cities: Vec<String>) -> Self {
        Tour {
            cities,
            cost: 0.0,
            legs: Vec::new(),
        }
    }

    pub(crate) fn from_state(state: &TourState, cost: f64, graph: &CityGraph) -> Self {
        let cities = state
            .cities()
            .iter()
            .map(|&city| graph.label(city).to_owned())
            .collect_vec();
        let legs = state
            .cities()
            .iter()
            .tuple_windows()
            .map(|(&from, &to)| Leg {
                from: graph.label(from).to_owned(),
                to: graph.label(to).to_owned(),
                cost: graph.cost(from, to),
            })
            .collect_vec();
        Tour { cities, cost, legs }
    }

    /// Visit order rendered as `A -> B -> C -> A`.
    pub fn route(&self) -> String {
        self.cities.iter().join(" -> ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TourConfig;
    use std::collections::HashSet;

    #[test]
    fn test_start_state() {
        let state = TourState::start(City(2), 4);
        assert_eq!(state.cities(), &[City(2)]);
        assert_eq!(state.last(), City(2));
        assert_eq!(state.len(), 1);
        assert!(state.contains(City(2)));
        assert!(!state.contains(City(0)));
    }

    #[test]
    fn test_push_marks_visited() {
        let state = TourState::start(City(0), 4).push(City(3));
        assert_eq!(state.cities(), &[City(0), City(3)]);
        assert!(state.contains(City(3)));
        assert_eq!(state.unvisited(4).collect::<Vec<_>>(), [City(1), City(2)]);
        assert!(!state.all_visited(4));
    }

    #[test]
    fn test_closing_move() {
        let state = TourState::start(City(0), 2).push(City(1));
        assert!(state.all_visited(2));
        assert!(!state.is_closed(2));
        let closed = state.push(City(0));
        assert!(closed.is_closed(2));
        assert_eq!(closed.unvisited(2).count(), 0);
    }

    #[test]
    fn test_equality_is_sequence_equality() {
        let a = TourState::start(City(0), 3).push(City(1)).push(City(2));
        let b = TourState::start(City(0), 3).push(City(1)).push(City(2));
        let c = TourState::start(City(0), 3).push(City(2)).push(City(1));
        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert!(!set.contains(&c));
    }

    #[test]
    fn test_tour_from_state() {
        let graph = crate::graph::CityGraph::from_config(&TourConfig::default()).unwrap();
        let state = TourState::start(City(0), 4)
            .push(City(1))
            .push(City(2))
            .push(City(3))
            .push(City(0));
        let tour = Tour::from_state(&state, 43.0, &graph);
        assert_eq!(tour.route(), "A -> B -> C -> D -> A");
        assert_eq!(tour.legs.len(), 4);
        // A-B, B-C, C-D, D-A
        let leg_costs = tour.legs.iter().map(|leg| leg.cost).collect::<Vec<_>>();
        assert_eq!(leg_costs, [10.0, 5.0, 8.0, 20.0]);
        assert_eq!(tour.legs[1].from, "B");
        assert_eq!(tour.legs[1].to, "C");
    }

    #[test]
    fn test_trivial_tour() {
        let tour = Tour::trivial(vec!["A".to_owned()]);
        assert_eq!(tour.cost, 0.0);
        assert!(tour.legs.is_empty());
        assert_eq!(tour.route(), "A");
    }
}

use crate::config::TourConfig;
use anyhow::{bail, Ok, Result};
use indexmap::IndexSet;
use petgraph::graphmap::DiGraphMap;

/// Interned city identifier, indexing into the graph's label set
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct City(pub u32);

pub type DistanceGraph = DiGraphMap<City, f64>;

/// Validated search input: interned city labels and the directed
/// distance graph between them, complete over ordered pairs.
#[derive(Debug, Clone)]
pub struct CityGraph {
    labels: IndexSet<String>,
    distances: DistanceGraph,
}

impl CityGraph {
    pub fn from_config(config: &TourConfig) -> Result<Self> {
        let mut labels = IndexSet::with_capacity(config.cities.len());
        for city in &config.cities {
            if !labels.insert(city.clone()) {
                bail!("duplicate city: {}", city);
            }
        }
        let mut distances = DiGraphMap::new();
        for (from, row) in &config.distances {
            let from = intern(&labels, from)?;
            for (to, &cost) in row {
                let to = intern(&labels, to)?;
                if from == to {
                    bail!(
                        "distance from {} to itself is fixed at zero and must not be listed",
                        label_of(&labels, from),
                    );
                }
                if !cost.is_finite() || cost < 0.0 {
                    bail!(
                        "distance from {} to {} must be a finite non-negative number, got {}",
                        label_of(&labels, from),
                        label_of(&labels, to),
                        cost,
                    );
                }
                distances.add_edge(from, to, cost);
            }
        }
        let graph = CityGraph { labels, distances };
        graph.verify_complete()?;
        Ok(graph)
    }

    /// Every ordered pair of distinct cities must carry a cost, otherwise
    /// the search could request a transition the table cannot answer.
    fn verify_complete(&self) -> Result<()> {
        for from in self.cities() {
            for to in self.cities() {
                if from != to && self.distances.edge_weight(from, to).is_none() {
                    bail!(
                        "missing distance from {} to {}",
                        self.label(from),
                        self.label(to),
                    );
                }
            }
        }
        Ok(())
    }

    pub fn city_count(&self) -> usize {
        self.labels.len()
    }

    pub fn cities(&self) -> impl Iterator<Item = City> + '_ {
        (0..self.labels.len() as u32).map(City)
    }

    /// The designated start of the round trip, the first listed city.
    /// Only meaningful on a non-empty instance.
    pub fn start(&self) -> City {
        City(0)
    }

    pub fn label(&self, city: City) -> &str {
        self.labels.get_index(city.0 as usize).unwrap()
    }

    /// Cost of the directed transition; a city is at distance zero from itself.
    pub fn cost(&self, from: City, to: City) -> f64 {
        if from == to {
            return 0.0;
        }
        *self.distances.edge_weight(from, to).unwrap()
    }

    /// Minimum cost from `from` over the candidate cities, `None` if there
    /// are no candidates.
    pub fn min_cost_to(&self, from: City, candidates: impl IntoIterator<Item = City>) -> Option<f64> {
        candidates
            .into_iter()
            .map(|to| self.cost(from, to))
            .min_by(|c1, c2| c1.partial_cmp(c2).unwrap())
    }
}

fn intern(labels: &IndexSet<String>, label: &str) -> Result<City> {
    match labels.get_index_of(label) {
        Some(index) => Ok(City(index as u32)),
        None => bail!("unknown city in distance table: {}", label),
    }
}

fn label_of(labels: &IndexSet<String>, city: City) -> &str {
    labels.get_index(city.0 as usize).unwrap()
}

use derive_builder::Builder;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Directed distances keyed from -> to -> cost.
pub type DistanceSpec = IndexMap<String, IndexMap<String, f64>>;

#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(default)]
pub struct TourConfig {
    /// City labels; the first entry is where the round trip starts and ends.
    pub cities: Vec<String>,
    pub distances: DistanceSpec,
}

impl Default for TourConfig {
    fn default() -> Self {
        let cities = ["A", "B", "C", "D"].map(String::from).to_vec();
        let table = [
            ("A", vec![("B", 10.0), ("C", 15.0), ("D", 20.0)]),
            ("B", vec![("A", 10.0), ("C", 5.0), ("D", 12.0)]),
            ("C", vec![("A", 15.0), ("B", 5.0), ("D", 8.0)]),
            ("D", vec![("A", 20.0), ("B", 12.0), ("C", 8.0)]),
        ];
        let distances = table
            .into_iter()
            .map(|(from, row)| {
                let row = row
                    .into_iter()
                    .map(|(to, cost)| (to.to_owned(), cost))
                    .collect();
                (from.to_owned(), row)
            })
            .collect();
        TourConfig { cities, distances }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_instance() {
        let config = TourConfig::default();
        assert_eq!(config.cities, ["A", "B", "C", "D"]);
        // every city has a row with an entry for every other city
        for city in &config.cities {
            let row = &config.distances[city];
            assert_eq!(row.len(), 3);
            assert!(!row.contains_key(city));
        }
        assert_eq!(config.distances["B"]["D"], 12.0);
        assert_eq!(config.distances["D"]["B"], 12.0);
    }

    #[test]
    fn test_builder_falls_back_to_default() {
        let config = TourConfigBuilder::default().build().unwrap();
        assert_eq!(config.cities, TourConfig::default().cities);
    }

    #[test]
    fn test_builder_overrides() {
        let config = TourConfigBuilder::default()
            .cities(vec!["X".to_owned(), "Y".to_owned()])
            .build()
            .unwrap();
        assert_eq!(config.cities, ["X", "Y"]);
        // distances keep the default table
        assert_eq!(config.distances["A"]["B"], 10.0);
    }

    #[test]
    fn test_deserialize_instance() {
        let config: TourConfig = serde_json::from_str(
            r#"{
                "cities": ["P", "Q"],
                "distances": {
                    "P": {"Q": 2.5},
                    "Q": {"P": 4.0}
                }
            }"#,
        )
        .unwrap();
        assert_eq!(config.cities, ["P", "Q"]);
        assert_eq!(config.distances["P"]["Q"], 2.5);
        assert_eq!(config.distances["Q"]["P"], 4.0);
    }
}

mod config;
mod graph;
mod problem;
mod search;
mod tour;

fn main() {
    let config = config::TourConfig::default();
    let graph = graph::CityGraph::from_config(&config).unwrap();
    println!("Searching a round trip over {} cities", graph.city_count());
    match search::solve(&graph) {
        Some(tour) => {
            println!("Visited cities in order: {}", tour.route());
            println!("Total cost: {}", tour.cost);
            for leg in &tour.legs {
                println!("  {} -> {}: {}", leg.from, leg.to, leg.cost);
            }
        }
        None => println!("No tour found."),
    }
}

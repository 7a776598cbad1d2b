//! Park query routes.

use crate::handlers::{
    airports_by_park, all_parks, ev_stations_by_park, hello, park_details, root, search_parks,
    species_categories_by_park, species_nativeness_by_park, unique_species_by_park,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn park_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/hello", get(hello))
        .route("/parkdetails", get(park_details))
        .route("/search/parks", get(search_parks))
        .route("/parks", get(all_parks))
        .route("/airports/:parkid", get(airports_by_park))
        .route("/evstations/:parkid", get(ev_stations_by_park))
        .route("/species/:parkid", get(species_categories_by_park))
        .route("/speciesnativeness/:parkid", get(species_nativeness_by_park))
        .route("/uniquespecies/:parkid", get(unique_species_by_park))
        .with_state(state)
}

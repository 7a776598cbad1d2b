//! Builds the parameterized read queries behind each route.
//! Table and column names are fixed here; request values only ever appear as bound params.

use super::params::{Page, SqlParam};

/// Airport types open to public use. Closed fields, heliports, seaplane bases are excluded.
pub const PUBLIC_AIRPORT_TYPES: [&str; 3] = ["small_airport", "medium_airport", "large_airport"];

fn public_airport_types() -> String {
    PUBLIC_AIRPORT_TYPES
        .iter()
        .map(|t| format!("'{}'", t))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Escape LIKE wildcards so the input matches as a literal substring.
fn like_contains(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('%');
    for c in s.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('%');
    out
}

#[derive(Debug, Default)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: impl Into<SqlParam>) {
        self.params.push(v.into());
    }

    fn push_page(&mut self, page: Option<Page>) {
        if let Some(page) = page {
            self.sql.push_str(" LIMIT ? OFFSET ?");
            self.push_param(page.limit());
            self.push_param(page.offset());
        }
    }
}

/// Filters for park search. Thresholds are inclusive lower bounds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParkSearch {
    pub state: Option<String>,
    pub name: Option<String>,
    pub min_species: i64,
    pub min_airports: i64,
    pub min_ev_stations: i64,
}

/// SELECT * FROM Parks ORDER BY Park_Code, optionally one page.
pub fn select_parks(page: Option<Page>) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = "SELECT * FROM Parks ORDER BY Park_Code".to_string();
    q.push_page(page);
    q
}

/// Park search: species per park first (so parks with zero species still count), then nearby
/// public airports and EV stations joined in. Type filter lives in the join condition so parks
/// without a nearby airport report 0 instead of dropping out.
pub fn search_parks(filter: &ParkSearch, page: Option<Page>) -> QueryBuf {
    let mut q = QueryBuf::new();

    let mut where_parts = Vec::new();
    if let Some(name) = filter.name.as_deref().filter(|s| !s.is_empty()) {
        where_parts.push("P.Park_Name LIKE ?");
        q.push_param(like_contains(name));
    }
    if let Some(state) = filter.state.as_deref().filter(|s| !s.is_empty()) {
        where_parts.push("P.State LIKE ?");
        q.push_param(like_contains(state));
    }
    let where_clause = if where_parts.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", where_parts.join(" AND "))
    };
    q.push_param(filter.min_species);

    q.sql = format!(
        "WITH species_counts AS (\
         SELECT P.Park_Code, P.Park_Name, P.State, COUNT(DISTINCT S.Scientific_Name) AS numSpecies \
         FROM Parks P \
         LEFT JOIN Species S ON S.Park_Code = P.Park_Code{} \
         GROUP BY P.Park_Code, P.Park_Name, P.State \
         HAVING COUNT(DISTINCT S.Scientific_Name) >= ?) \
         SELECT SC.Park_Code, SC.Park_Name, SC.State, SC.numSpecies, \
         COUNT(DISTINCT A.ID) AS numAirports, COUNT(DISTINCT EV.ID) AS numEVS \
         FROM species_counts SC \
         LEFT JOIN Airports_Near_Parks AP ON AP.Park_Code = SC.Park_Code \
         LEFT JOIN Airports A ON A.ID = AP.Airport_ID AND A.Type IN ({}) \
         LEFT JOIN EV_Stations_Near_Parks EVP ON EVP.Park_Code = SC.Park_Code \
         LEFT JOIN EV_Stations EV ON EV.ID = EVP.Station_ID \
         GROUP BY SC.Park_Code, SC.Park_Name, SC.State, SC.numSpecies \
         HAVING numAirports >= ? AND numEVS >= ? \
         ORDER BY SC.Park_Code",
        where_clause,
        public_airport_types()
    );
    q.push_param(filter.min_airports);
    q.push_param(filter.min_ev_stations);
    q.push_page(page);
    q
}

/// Distinct public-use airports near a park, by state then name.
pub fn select_airports_near(park_code: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT DISTINCT A.Name AS name, A.State_Abbr AS state \
         FROM Airports_Near_Parks AP \
         JOIN Airports A ON A.ID = AP.Airport_ID \
         WHERE AP.Park_Code = ? AND A.Type IN ({}) \
         ORDER BY state, name",
        public_airport_types()
    );
    q.push_param(park_code);
    q
}

/// Public-access EV stations near a park.
pub fn select_ev_stations_near(park_code: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = "SELECT EV.Name AS name, EV.Address AS address, EV.City AS city, EV.State AS state, EV.Zip AS zip \
             FROM EV_Stations_Near_Parks EVP \
             JOIN EV_Stations EV ON EV.ID = EVP.Station_ID \
             WHERE EVP.Park_Code = ? AND EV.Access_Type = 'public' \
             ORDER BY state, city, zip, name"
        .to_string();
    q.push_param(park_code);
    q
}

/// Distinct species per category for one park, largest category first.
pub fn select_species_categories(park_code: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = "SELECT Category AS category, COUNT(DISTINCT Scientific_Name) AS `count` \
             FROM Species \
             WHERE Park_Code = ? \
             GROUP BY Category \
             ORDER BY `count` DESC, category"
        .to_string();
    q.push_param(park_code);
    q
}

/// Native and non-native distinct species counts for one park. A class with no species counts 0.
pub fn select_species_nativeness(park_code: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = "SELECT Park_Code AS parkCode, \
             COUNT(DISTINCT CASE WHEN Nativeness = 'Native' THEN Scientific_Name END) AS numNative, \
             COUNT(DISTINCT CASE WHEN Nativeness = 'Not Native' THEN Scientific_Name END) AS numNotNative \
             FROM Species \
             WHERE Park_Code = ? \
             GROUP BY Park_Code"
        .to_string();
    q.push_param(park_code);
    q
}

/// Species recorded in this park and in no other park.
pub fn select_unique_species(park_code: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = "SELECT DISTINCT S.Scientific_Name AS scientificName, S.Category AS category \
             FROM Species S \
             WHERE S.Park_Code = ? \
             AND NOT EXISTS (\
             SELECT 1 FROM Species O \
             WHERE O.Scientific_Name = S.Scientific_Name AND O.Park_Code <> S.Park_Code) \
             ORDER BY category, scientificName"
        .to_string();
    q.push_param(park_code);
    q
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parks_without_page_has_no_limit() {
        let q = select_parks(None);
        assert_eq!(q.sql, "SELECT * FROM Parks ORDER BY Park_Code");
        assert!(q.params.is_empty());
    }

    #[test]
    fn parks_page_binds_limit_and_offset() {
        let q = select_parks(Some(Page::new(2, 5)));
        assert!(q.sql.ends_with(" LIMIT ? OFFSET ?"));
        assert_eq!(q.params, vec![SqlParam::Int(5), SqlParam::Int(5)]);
    }

    #[test]
    fn search_without_filters_binds_thresholds_only() {
        let q = search_parks(&ParkSearch::default(), None);
        assert!(!q.sql.contains("LIKE"));
        assert_eq!(q.params, vec![SqlParam::Int(0), SqlParam::Int(0), SqlParam::Int(0)]);
        assert!(!q.sql.contains("LIMIT"));
    }

    #[test]
    fn search_uses_inclusive_thresholds() {
        let q = search_parks(&ParkSearch::default(), None);
        assert!(q.sql.contains("COUNT(DISTINCT S.Scientific_Name) >= ?"));
        assert!(q.sql.contains("numAirports >= ? AND numEVS >= ?"));
        assert!(!q.sql.contains(" > ?"));
    }

    #[test]
    fn search_params_follow_placeholder_order() {
        let filter = ParkSearch {
            state: Some("UT".into()),
            name: Some("canyon".into()),
            min_species: 100,
            min_airports: 2,
            min_ev_stations: 3,
        };
        let q = search_parks(&filter, Some(Page::new(3, 10)));
        assert_eq!(
            q.params,
            vec![
                SqlParam::Text("%canyon%".into()),
                SqlParam::Text("%UT%".into()),
                SqlParam::Int(100),
                SqlParam::Int(2),
                SqlParam::Int(3),
                SqlParam::Int(10),
                SqlParam::Int(20),
            ]
        );
        assert_eq!(q.sql.matches('?').count(), q.params.len());
    }

    #[test]
    fn search_input_never_reaches_sql_text() {
        let filter = ParkSearch {
            name: Some("x' OR '1'='1".into()),
            ..ParkSearch::default()
        };
        let q = search_parks(&filter, None);
        assert!(!q.sql.contains("OR '1'"));
    }

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(like_contains("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_contains(""), "%%");
    }

    #[test]
    fn empty_name_filter_is_ignored() {
        let filter = ParkSearch {
            name: Some(String::new()),
            ..ParkSearch::default()
        };
        assert!(!search_parks(&filter, None).sql.contains("Park_Name LIKE"));
    }

    #[test]
    fn airports_restricted_to_public_types_sorted_by_state() {
        let q = select_airports_near("noca");
        assert!(q.sql.contains("A.Type IN ('small_airport', 'medium_airport', 'large_airport')"));
        assert!(q.sql.ends_with("ORDER BY state, name"));
        assert!(!q.sql.contains("heliport"));
        assert_eq!(q.params, vec![SqlParam::Text("noca".into())]);
    }

    #[test]
    fn ev_stations_ordering() {
        let q = select_ev_stations_near("zion");
        assert!(q.sql.ends_with("ORDER BY state, city, zip, name"));
    }

    #[test]
    fn species_categories_largest_first() {
        let q = select_species_categories("noca");
        assert!(q.sql.contains("GROUP BY Category"));
        assert!(q.sql.contains("ORDER BY `count` DESC, category"));
    }

    #[test]
    fn unique_species_excludes_other_parks() {
        let q = select_unique_species("acad");
        assert!(q.sql.contains("NOT EXISTS"));
        assert!(q.sql.contains("O.Park_Code <> S.Park_Code"));
        assert!(q.sql.ends_with("ORDER BY category, scientificName"));
    }
}

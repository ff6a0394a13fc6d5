use serde::Serialize;

/// Request body for the v5 `/launches/query` endpoint.
#[derive(Serialize, Debug)]
pub struct LaunchQuery {
    query: LaunchFilter,
    options: QueryOptions,
}

/// Match-all filter; serializes to an empty object.
#[derive(Serialize, Debug)]
pub struct LaunchFilter {}

#[derive(Serialize, Debug)]
pub struct QueryOptions {
    sort: SortSpec,
    limit: u32,
    pagination: bool,
    page: f64,
}

#[derive(Serialize, Debug)]
pub struct SortSpec {
    date_utc: String,
}

impl LaunchQuery {

    /// One page of ten launches, sorted by launch date ascending.
    ///
    /// The page number is sent as a raw fractional value in [0, 21); the
    /// query endpoint accepts non-integer pages.
    pub fn latest() -> Self {
        Self {
            query: LaunchFilter {},
            options: QueryOptions {
                sort: SortSpec { date_utc: "asc".to_string() },
                limit: 10,
                pagination: true,
                page: rand::random::<f64>() * 21.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_query_options() {
        let query = LaunchQuery::latest();

        assert_eq!(query.options.limit, 10);
        assert!(query.options.pagination);
        assert_eq!(query.options.sort.date_utc, "asc");
    }

    #[test]
    fn test_latest_query_page_range() {
        for _ in 0..256 {
            let page = LaunchQuery::latest().options.page;
            assert!((0.0..21.0).contains(&page), "page {} out of range", page);
        }
    }

    #[test]
    fn test_latest_query_serialized_shape() {
        let value = serde_json::to_value(LaunchQuery::latest()).unwrap();

        assert_eq!(value["query"], serde_json::json!({}));
        assert_eq!(value["options"]["limit"], 10);
        assert_eq!(value["options"]["pagination"], true);
        assert_eq!(value["options"]["sort"], serde_json::json!({"date_utc": "asc"}));
        assert!(value["options"]["page"].is_f64());
    }
}

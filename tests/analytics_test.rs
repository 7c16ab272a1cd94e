use farepath::{AnalyticsConfig, PathAnalytics, StopComparator, WeightedGraphIndex};

const EUROPE: &str = "Connections: NUE-FRA-43, NUE-AMS-67, FRA-AMS-17, FRA-LHR-27, LHR-NUE-23";
const LETTERED: &str = "Connections: a-x-3, a-b-1, a-c-2, b-d-2, c-d-3, d-e-1, x-b-1, x-c-5, \
                        c-z-3, e-z-1, c-y-3, y-d-1, z-y-2";

#[test]
fn test_price_table_is_symmetric() {
    for specification in [EUROPE, LETTERED] {
        let index = WeightedGraphIndex::parse(specification).unwrap();
        for i in 0..index.size() {
            for j in 0..index.size() {
                assert_eq!(index.price_by_index(i, j), index.price_by_index(j, i));
            }
        }
    }
}

#[test]
fn test_records_are_directed() {
    let index = WeightedGraphIndex::parse(EUROPE).unwrap();
    for record in index.records() {
        assert!(index.graph().is_directly_connected(&record.source, &record.destination));
    }
    assert!(!index.graph().is_directly_connected("FRA", "NUE"));
    assert_eq!(index.price_by_code("FRA", "NUE").unwrap(), 43);
}

#[test]
fn test_priced_pair_is_not_a_path() {
    let index = WeightedGraphIndex::parse(EUROPE).unwrap();
    let analytics = PathAnalytics::new(&index);

    // FRA-NUE is priced through symmetry but only NUE-FRA is flown
    assert_eq!(analytics.exact_price(&["FRA", "NUE"]), None);
    assert_eq!(analytics.exact_price(&["NUE", "FRA"]), Some(43));
}

#[test]
fn test_round_trips_start_and_end_at_origin() {
    let index = WeightedGraphIndex::parse(LETTERED).unwrap();
    for origin in ["a", "b", "c", "d", "e", "x", "y", "z"] {
        for trip in index.graph().round_trips(origin) {
            assert_eq!(trip.first().map(String::as_str), Some(origin));
            assert_eq!(trip.last().map(String::as_str), Some(origin));
            assert!(trip.len() > 2);
        }
    }
}

#[test]
fn test_queries_are_idempotent() {
    let index = WeightedGraphIndex::parse(LETTERED).unwrap();
    let analytics = PathAnalytics::new(&index);

    let first = analytics.paths_below_price(12, "c", "z");
    let second = analytics.paths_below_price(12, "c", "z");
    assert_eq!(first, second);

    assert_eq!(analytics.cheapest_path("a", "e"), analytics.cheapest_path("a", "e"));
    assert_eq!(
        analytics.count_by_stops(StopComparator::Minimum, 2, "x", "e"),
        analytics.count_by_stops(StopComparator::Minimum, 2, "x", "e")
    );
}

#[test]
fn test_below_price_is_sorted() {
    let index = WeightedGraphIndex::parse(LETTERED).unwrap();
    let analytics = PathAnalytics::new(&index);

    let paths = analytics.paths_below(20, "a", "z");
    assert!(!paths.is_empty());
    assert!(paths.windows(2).all(|pair| pair[0].price <= pair[1].price));
    assert!(paths.iter().all(|path| path.price < 20));
}

#[test]
fn test_configuration_is_per_instance() {
    let index = WeightedGraphIndex::parse(LETTERED).unwrap();
    let with_loops = PathAnalytics::new(&index);
    let simple = PathAnalytics::with_config(
        &index,
        AnalyticsConfig::default().with_cyclic_extensions(false),
    );

    assert_eq!(with_loops.count_by_stops(StopComparator::Minimum, 2, "x", "e"), 8);
    assert_eq!(simple.count_by_stops(StopComparator::Minimum, 2, "x", "e"), 4);
    assert_eq!(with_loops.count_by_stops(StopComparator::Minimum, 2, "x", "e"), 8);
}

#[test]
fn test_unknown_airports() {
    let index = WeightedGraphIndex::parse(EUROPE).unwrap();
    let analytics = PathAnalytics::new(&index);

    assert_eq!(analytics.exact_price(&["NUE", "XXX"]), None);
    assert_eq!(analytics.cheapest_path("XXX", "NUE"), None);
    assert_eq!(analytics.count_by_stops(StopComparator::Maximum, 5, "XXX", "NUE"), 0);
    assert_eq!(analytics.paths_below_price(1000, "NUE", "XXX"), "");
}

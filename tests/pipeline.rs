//! End-to-end scenarios over the full classification cascade.

use velostress::{ClassifyConfig, EdgeRecord, Lts, RuleId, classify_network};

fn classify(edges: Vec<EdgeRecord>) -> velostress::NetworkClassification {
    classify_network(edges, &ClassifyConfig::default()).unwrap()
}

#[test]
fn untagged_residential_street_scores_lts2() {
    // No maxspeed, no lanes, no cycleway tags: local default 50 km/h and
    // 2 assumed lanes route it to mixed-traffic rule m9.
    let edge = EdgeRecord::new(1).with_tag("highway", "residential");
    let result = classify(vec![edge]);
    assert_eq!(result.mixed.len(), 1);
    assert_eq!(result.mixed[0].rule, RuleId("m9"));
    assert_eq!(result.mixed[0].lts, Lts::Lts2);
}

#[test]
fn nan_encoded_attributes_take_the_defaults() {
    // NaN-valued maxspeed/lanes are the missing marker, not malformed
    // values: the batch still resolves to 50 km/h and 2 lanes.
    let edge = EdgeRecord::new(1)
        .with_tag("highway", "residential")
        .with_tag("maxspeed", f64::NAN)
        .with_tag("lanes", f64::NAN);
    let result = classify(vec![edge]);
    assert_eq!(result.mixed.len(), 1);
    assert_eq!(result.mixed[0].rule, RuleId("m9"));
    assert_eq!(result.mixed[0].lts, Lts::Lts2);
}

#[test]
fn cycleway_is_a_separated_path() {
    let edge = EdgeRecord::new(1).with_tag("highway", "cycleway");
    let result = classify(vec![edge]);
    assert_eq!(result.separated.len(), 1);
    assert_eq!(result.separated[0].rule, RuleId("s3"));
    assert_eq!(result.separated[0].lts, Lts::Lts1);
}

#[test]
fn separated_path_level_is_configurable() {
    let config = ClassifyConfig {
        separated_lts: Lts::Lts2,
        ..ClassifyConfig::default()
    };
    let edge = EdgeRecord::new(1).with_tag("highway", "path");
    let result = classify_network(vec![edge], &config).unwrap();
    assert_eq!(result.separated[0].rule, RuleId("s1"));
    assert_eq!(result.separated[0].lts, Lts::Lts2);
}

#[test]
fn motorway_is_never_scored() {
    let edge = EdgeRecord::new(1).with_tag("highway", "motorway");
    let result = classify(vec![edge]);
    assert_eq!(result.not_permitted.len(), 1);
    assert_eq!(result.not_permitted[0].rule, RuleId("p3"));
    assert!(result.separated.is_empty());
    assert!(result.lane.is_empty());
    assert!(result.mixed.is_empty());
}

#[test]
fn laned_street_with_parking_routes_to_the_b_cascade() {
    let edge = EdgeRecord::new(1)
        .with_tag("highway", "residential")
        .with_tag("cycleway:right", "lane")
        .with_tag("parking:lane:right", "parallel")
        .with_tag("maxspeed", "30")
        .with_tag("width", 4.0);
    let result = classify(vec![edge]);
    assert_eq!(result.lane.len(), 1);
    assert_eq!(result.lane[0].rule, RuleId("b3"));
    assert_eq!(result.lane[0].lts, Lts::Lts3);
}

#[test]
fn laned_street_without_parking_routes_to_the_c_cascade() {
    let edge = EdgeRecord::new(1)
        .with_tag("highway", "residential")
        .with_tag("cycleway", "lane")
        .with_tag("maxspeed", "30")
        .with_tag("width", 3.0);
    let result = classify(vec![edge]);
    assert_eq!(result.lane.len(), 1);
    assert_eq!(result.lane[0].rule, RuleId("c1"));
    assert_eq!(result.lane[0].lts, Lts::Lts1);
}

#[test]
fn partitions_conserve_the_batch() {
    let edges = vec![
        EdgeRecord::new(1).with_tag("highway", "residential"),
        EdgeRecord::new(2).with_tag("highway", "cycleway"),
        EdgeRecord::new(3).with_tag("highway", "motorway"),
        EdgeRecord::new(4)
            .with_tag("highway", "secondary")
            .with_tag("cycleway:right", "lane")
            .with_tag("width", 3.0),
        EdgeRecord::new(5).with_tag("highway", "pedestrian"),
        EdgeRecord::new(6).with_tag("bicycle", "no"),
    ];
    let result = classify(edges);

    let mut ids: Vec<u64> = result
        .not_permitted
        .iter()
        .map(|t| t.edge.id.0)
        .chain(result.separated.iter().map(|s| s.edge.id.0))
        .chain(result.lane.iter().map(|s| s.edge.id.0))
        .chain(result.mixed.iter().map(|s| s.edge.id.0))
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(result.len(), 6);
}

#[test]
fn json_rows_classify_end_to_end() {
    let rows = serde_json::json!([
        {"id": 10, "highway": "residential", "maxspeed": "40", "lanes": "2"},
        {"id": 11, "highway": "footway"},
        {"id": 12, "highway": "service", "service": "alley"},
    ]);
    let edges: Vec<EdgeRecord> = serde_json::from_value(rows).unwrap();
    let result = classify(edges);
    assert_eq!(result.mixed.len(), 2);
    assert_eq!(result.separated.len(), 1);
    assert_eq!(result.separated[0].rule, RuleId("s2"));

    let rules: Vec<&str> = result.mixed.iter().map(|s| s.rule.0).collect();
    assert!(rules.contains(&"m5"));
    assert!(rules.contains(&"m2"));
}

#[test]
fn malformed_speed_surfaces_from_the_pipeline() {
    let edge = EdgeRecord::new(1)
        .with_tag("highway", "residential")
        .with_tag("maxspeed", "fast");
    assert!(matches!(
        classify_network(vec![edge], &ClassifyConfig::default()),
        Err(velostress::Error::MalformedSpeed(_))
    ));
}

//! A written GeoJSON document must decode back as a final page.
//!
//! Output files are re-read by the CLI's skip logic and by downstream
//! tooling, so the writer's documents have to satisfy the same decoder the
//! live service responses go through.

use geo_types::Geometry;
use geojson::{JsonObject, JsonValue};
use geopull_client::decode_page;
use geopull_core::writer::to_geojson_string;
use geopull_core::{FeatureCollection, FeatureRecord};

fn record(oa: &str, lon: f64, lat: f64) -> FeatureRecord {
    let mut properties = JsonObject::new();
    properties.insert("OA21CD".to_string(), JsonValue::String(oa.to_string()));
    FeatureRecord {
        properties,
        geometry: Some(Geometry::Point(geo_types::Point::new(lon, lat))),
    }
}

#[test]
fn written_collection_decodes_back_unchanged() {
    let mut collection = FeatureCollection::new("EPSG:4326");
    collection.records.push(record("E00000001", -0.018, 51.583));
    collection.records.push(record("E00000002", -0.021, 51.580));

    let text = to_geojson_string(&collection).expect("serialize");
    let page = decode_page(&text).expect("decode");

    assert_eq!(page.crs, collection.crs);
    assert_eq!(page.records, collection.records);
    assert_eq!(page.exceeded_transfer_limit, None);
    assert!(!page.has_more());
}

#[test]
fn written_empty_collection_decodes_back() {
    let collection = FeatureCollection::new("EPSG:27700");

    let text = to_geojson_string(&collection).expect("serialize");
    let page = decode_page(&text).expect("decode");

    assert_eq!(page.crs, "EPSG:27700");
    assert!(page.records.is_empty());
}

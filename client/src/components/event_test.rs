use super::*;

fn event(category: EventCategory) -> Event {
    Event {
        key: Some("E1".to_owned()),
        category,
        name: "name".to_owned(),
        description: Some("hover text".to_owned()),
    }
}

#[test]
fn version_category_uses_version_view() {
    assert_eq!(EventView::for_event(&event(EventCategory::Version)), EventView::Version);
}

#[test]
fn every_other_category_uses_generic_view() {
    for category in [
        EventCategory::QualityGate,
        EventCategory::QualityProfile,
        EventCategory::Other,
        EventCategory::Custom("VERSION_LIKE".to_owned()),
        EventCategory::Custom("version".to_owned()),
    ] {
        assert_eq!(EventView::for_event(&event(category)), EventView::Generic);
    }
}

#[test]
fn decoded_version_string_selects_version_view() {
    let decoded: Event =
        serde_json::from_value(serde_json::json!({ "category": "VERSION", "name": "6.2" })).expect("decode");
    assert_eq!(EventView::for_event(&decoded), EventView::Version);
}

#[test]
fn category_label_uses_event_category_namespace() {
    assert_eq!(category_label_keys(&EventCategory::QualityGate), ["event.category", "QUALITY_GATE"]);
    assert_eq!(category_label_keys(&EventCategory::Custom("X".to_owned())), ["event.category", "X"]);
}

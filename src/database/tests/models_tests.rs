use super::*;

#[test]
fn test_item_kind_roundtrip() {
    for kind in [
        ItemKind::Equipment,
        ItemKind::Accessory,
        ItemKind::Module,
        ItemKind::Supply,
    ] {
        let parsed = ItemKind::from_str(&kind.to_string()).unwrap();
        assert_eq!(parsed, kind);
    }
}

#[test]
fn test_item_kind_rejects_unknown() {
    assert!(ItemKind::from_str("gadget").is_err());
}

#[test]
fn test_usage_type_parse_known() {
    assert_eq!(
        UsageType::from_str("telemetria_gps").unwrap(),
        UsageType::TelemetriaGps
    );
    assert_eq!(UsageType::from_str("FROTA").unwrap(), UsageType::Frota);
}

#[test]
fn test_usage_type_unknown_is_permissive_default() {
    assert_eq!(
        UsageType::from_str("motorhome").unwrap(),
        UsageType::Unknown
    );
}

#[test]
fn test_kit_push_item_buckets_by_kind() {
    let mut kit = Kit::new("k1", "Kit Frota");
    kit.push_item(KitItem {
        name: "Rastreador FMB920".into(),
        kind: ItemKind::Equipment,
    });
    kit.push_item(KitItem {
        name: "Sirene".into(),
        kind: ItemKind::Accessory,
    });
    kit.push_item(KitItem {
        name: "Modulo CAN".into(),
        kind: ItemKind::Module,
    });
    kit.push_item(KitItem {
        name: "Fita Isolante".into(),
        kind: ItemKind::Supply,
    });

    assert_eq!(kit.equipment.len(), 1);
    assert_eq!(kit.accessories.len(), 1);
    assert_eq!(kit.modules.len(), 1);
    assert_eq!(kit.supplies.len(), 1);
}

use std::io::Write;

use recintos::{
    CatalogError, ConfigError, EnclosureConfig, ErrorKind, OccupantConfig, Query, Rule,
    SpeciesConfig, ZooCatalog, ZooConfig, ZooError,
};

fn biomes(label: &str) -> recintos::BiomeSet {
    label.parse().unwrap()
}

fn small_zoo() -> ZooConfig {
    ZooConfig {
        species: vec![
            SpeciesConfig {
                id: "MACACO".to_string(),
                unit_size: 1,
                biomes: biomes("savana e floresta"),
                predator: false,
            },
            SpeciesConfig {
                id: "HIPOPOTAMO".to_string(),
                unit_size: 4,
                // Wider tolerance than the hippo habitat rule allows.
                biomes: biomes("savana e rio e floresta"),
                predator: false,
            },
            SpeciesConfig {
                id: "ZEBRA".to_string(),
                unit_size: 2,
                biomes: biomes("savana"),
                predator: false,
            },
            SpeciesConfig {
                id: "LOBO".to_string(),
                unit_size: 2,
                biomes: biomes("floresta"),
                predator: true,
            },
        ],
        enclosures: vec![
            EnclosureConfig {
                id: 10,
                biomes: biomes("floresta"),
                capacity: 12,
                occupants: vec![],
            },
            EnclosureConfig {
                id: 20,
                biomes: biomes("savana"),
                capacity: 20,
                occupants: vec![
                    OccupantConfig {
                        species: "ZEBRA".to_string(),
                        count: 2,
                    },
                    OccupantConfig {
                        species: "MACACO".to_string(),
                        count: 2,
                    },
                ],
            },
            EnclosureConfig {
                id: 30,
                biomes: biomes("floresta"),
                capacity: 6,
                occupants: vec![OccupantConfig {
                    species: "LOBO".to_string(),
                    count: 1,
                }],
            },
        ],
    }
}

#[test]
fn hippo_rule_applies_even_when_biomes_overlap() {
    let zoo = small_zoo().build().unwrap();
    let eval = zoo.evaluate_detailed(&Query::new("HIPOPOTAMO", 1)).unwrap();
    let rejected_10 = eval.rejected.iter().find(|r| r.id.get() == 10).unwrap();
    assert_eq!(rejected_10.rule, Rule::HippoHabitat);
    assert_eq!(eval.viable.len(), 1);
    assert_eq!(eval.viable[0].id.get(), 20);
}

#[test]
fn diversity_penalty_is_flat_with_several_species() {
    let zoo = small_zoo().build().unwrap();
    // residents: 2 zebras (4) + 2 monkeys (2); hippo (4); penalty (1)
    let result = zoo.evaluate("HIPOPOTAMO", 1).unwrap();
    assert_eq!(result[0].free_space, 20 - (4 + 2 + 4 + 1));
}

#[test]
fn monkey_joins_mixed_enclosure_with_monkeys() {
    let zoo = small_zoo().build().unwrap();
    let result = zoo.evaluate("MACACO", 1).unwrap();
    let ids: Vec<u32> = result.iter().map(|v| v.id.get()).collect();
    // 10 is empty forest, 20 already has a zebra, 30 holds a wolf.
    assert_eq!(ids, vec![10, 20]);
}

#[test]
fn wolves_only_with_wolves() {
    let zoo = small_zoo().build().unwrap();
    let result = zoo.evaluate("LOBO", 2).unwrap();
    let summary: Vec<(u32, u64)> = result.iter().map(|v| (v.id.get(), v.free_space)).collect();
    assert_eq!(summary, vec![(10, 8), (30, 0)]);

    assert_eq!(
        zoo.evaluate("LOBO", 3).unwrap().len(),
        1,
        "three more wolves no longer fit next to the resident"
    );
}

#[test]
fn results_keep_catalog_order() {
    let mut config = small_zoo();
    config.enclosures.reverse();
    let zoo = config.build().unwrap();
    let ids: Vec<u32> = zoo
        .evaluate("LOBO", 1)
        .unwrap()
        .iter()
        .map(|v| v.id.get())
        .collect();
    assert_eq!(ids, vec![30, 10]);
}

#[test]
fn empty_enclosure_list_has_nothing_viable() {
    let mut config = small_zoo();
    config.enclosures.clear();
    let zoo = config.build().unwrap();
    assert_eq!(
        zoo.evaluate("ZEBRA", 1).unwrap_err().kind(),
        ErrorKind::NoViableEnclosure
    );
}

#[test]
fn over_capacity_inventory_is_rejected() {
    let mut config = small_zoo();
    config.enclosures[2].capacity = 1;
    assert!(matches!(
        config.build(),
        Err(CatalogError::OverCapacity { .. })
    ));
}

#[test]
fn duplicate_species_is_rejected() {
    let mut config = small_zoo();
    let mut twin = config.species[0].clone();
    twin.id = "macaco".to_string();
    config.species.push(twin);
    assert!(matches!(
        config.build(),
        Err(CatalogError::DuplicateSpecies { .. })
    ));
}

#[test]
fn loads_inventory_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zoo.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(small_zoo().to_json_pretty().unwrap().as_bytes())
        .unwrap();

    let zoo = ZooCatalog::from_path(&path).unwrap();
    assert_eq!(zoo.enclosures().len(), 3);
    assert_eq!(zoo.species().len(), 4);
}

#[test]
fn bad_json_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        ZooCatalog::from_path(&path),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn invalid_inventory_file_is_a_catalog_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("invalid.json");
    std::fs::write(
        &path,
        r#"{ "species": [], "enclosures": [{ "id": 1, "biomes": "rio", "capacity": 0 }] }"#,
    )
    .unwrap();
    assert!(matches!(
        ZooCatalog::from_path(&path),
        Err(ConfigError::Catalog(CatalogError::ZeroCapacity { .. }))
    ));
}

#[test]
fn open_without_path_is_the_standard_zoo() {
    let zoo = ZooCatalog::open(None).unwrap();
    assert_eq!(zoo.enclosures().len(), 5);
    assert_eq!(zoo.species().len(), 6);
}

#[test]
fn evaluate_inventory_reads_file_and_answers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zoo.json");
    std::fs::write(&path, small_zoo().to_json_pretty().unwrap()).unwrap();

    let from_file =
        ZooCatalog::evaluate_inventory(Some(path.as_path()), &Query::new("HIPOPOTAMO", 1)).unwrap();
    let direct = ZooCatalog::from_path(&path)
        .unwrap()
        .evaluate("HIPOPOTAMO", 1)
        .unwrap();
    assert_eq!(from_file, direct);
}

#[test]
fn evaluate_inventory_classifies_query_errors() {
    let err = ZooCatalog::evaluate_inventory(None, &Query::new("UNICORNIO", 1)).unwrap_err();
    assert!(err.is_query());
    assert_eq!(err.query_kind(), Some(ErrorKind::InvalidSpecies));
    assert_eq!(err.legacy_message(), Some("Animal inválido"));

    let err = ZooCatalog::evaluate_inventory(None, &Query::new("LEOPARDO", 1)).unwrap_err();
    assert_eq!(err.legacy_message(), Some("Não há recinto viável"));
}

#[test]
fn evaluate_inventory_classifies_config_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    let err = ZooCatalog::evaluate_inventory(Some(missing.as_path()), &Query::new("LEAO", 1))
        .unwrap_err();
    assert!(err.is_configuration());
    assert!(!err.is_query());
    assert_eq!(err.legacy_message(), None);
    assert!(matches!(err, ZooError::Config(ConfigError::Io { .. })));
}

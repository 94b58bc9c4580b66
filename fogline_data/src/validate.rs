use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a WorldDef.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a WorldDef.
///
/// Every location named by a choice, random exit, code or custom effect must exist,
/// as must every item referenced by a location, choice or combination.
///
/// ```
/// use fogline_data::{GameDef, LocationDef, WorldDef, validate_world};
///
/// let world = WorldDef {
///     game: GameDef {
///         title: "Demo".into(),
///         start_location: "start".into(),
///         ..GameDef::default()
///     },
///     locations: vec![LocationDef {
///         id: "start".into(),
///         name: "Start".into(),
///         desc: "A room.".into(),
///         dark_desc: None,
///         requires_light: false,
///         items: Vec::new(),
///         choices: Vec::new(),
///         random_exits: Vec::new(),
///     }],
///     ..WorldDef::default()
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut locations = HashSet::new();
    let mut items = HashSet::new();

    track_ids(
        "location",
        world.locations.iter().map(|l| l.id.as_str()),
        &mut locations,
        &mut errors,
    );
    track_ids("item", world.items.iter().map(|i| i.id.as_str()), &mut items, &mut errors);

    let ids = IdSets {
        locations: &locations,
        items: &items,
    };

    if world.game.start_location.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "game start location missing".to_string(),
        });
    } else {
        check_ref(
            "location",
            &world.game.start_location,
            ids.locations,
            "game start location".to_string(),
            &mut errors,
        );
    }

    for location in &world.locations {
        for item in &location.items {
            check_ref(
                "item",
                item,
                ids.items,
                format!("location '{}' items", location.id),
                &mut errors,
            );
        }
        for exit in &location.random_exits {
            check_ref(
                "location",
                exit,
                ids.locations,
                format!("location '{}' random exits", location.id),
                &mut errors,
            );
        }
        for choice in &location.choices {
            validate_choice(choice, location, &ids, &mut errors);
        }
    }

    for item in &world.items {
        if let LocationRef::Location(location) = &item.location {
            check_ref(
                "location",
                location,
                ids.locations,
                format!("item '{}' location", item.id),
                &mut errors,
            );
        }
    }

    for (idx, combo) in world.combinations.iter().enumerate() {
        let context = format!("combination #{idx} producing '{}'", combo.produces);
        if combo.consumes.len() < 2 {
            errors.push(ValidationError::InvalidValue {
                context: format!("{context} needs at least two inputs"),
            });
        }
        let mut inputs = HashSet::new();
        for input in &combo.consumes {
            if !inputs.insert(input.as_str()) {
                errors.push(ValidationError::InvalidValue {
                    context: format!("{context} lists input '{input}' twice"),
                });
            }
            check_ref("item", input, ids.items, context.clone(), &mut errors);
        }
        if inputs.contains(combo.produces.as_str()) {
            errors.push(ValidationError::InvalidValue {
                context: format!("{context} consumes its own product"),
            });
        }
        check_ref("item", &combo.produces, ids.items, context, &mut errors);
    }

    errors
}

struct IdSets<'a> {
    locations: &'a HashSet<String>,
    items: &'a HashSet<String>,
}

fn validate_choice(choice: &ChoiceDef, location: &LocationDef, ids: &IdSets<'_>, errors: &mut Vec<ValidationError>) {
    let context = format!("location '{}' choice \"{}\"", location.id, choice.text);
    if let Some(item) = &choice.requires_item {
        check_ref("item", item, ids.items, context.clone(), errors);
    }
    match &choice.effect {
        EffectDef::Go { to, .. } => check_ref("location", to, ids.locations, context, errors),
        EffectDef::Describe { .. } | EffectDef::Ending { .. } => {},
        EffectDef::AddItem { item, .. } | EffectDef::RemoveItem { item } => {
            check_ref("item", item, ids.items, context, errors);
        },
        EffectDef::RandomExit => {
            if location.random_exits.is_empty() {
                errors.push(ValidationError::InvalidValue {
                    context: format!("{context} has no random exits to pick from"),
                });
            }
        },
        EffectDef::InputCode { codes, success, .. } => {
            if codes.iter().all(|code| code.trim().is_empty()) {
                errors.push(ValidationError::InvalidValue {
                    context: format!("{context} accepts no codes"),
                });
            }
            check_ref("location", success, ids.locations, context, errors);
        },
        EffectDef::Custom(custom) => {
            check_ref("item", &custom.requires, ids.items, context.clone(), errors);
            check_ref("location", &custom.to, ids.locations, context.clone(), errors);
            if let Some(rewrite) = &custom.rewrite {
                check_ref("location", &rewrite.location, ids.locations, context, errors);
            }
        },
    }
}

fn track_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    set: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !set.insert(id.to_string()) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

fn check_ref(kind: &'static str, id: &str, set: &HashSet<String>, context: String, errors: &mut Vec<ValidationError>) {
    if !set.contains(id) {
        errors.push(ValidationError::MissingReference {
            kind,
            id: id.to_string(),
            context,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(id: &str) -> LocationDef {
        LocationDef {
            id: id.to_string(),
            name: format!("Location {id}"),
            desc: "Test location".into(),
            dark_desc: None,
            requires_light: false,
            items: Vec::new(),
            choices: Vec::new(),
            random_exits: Vec::new(),
        }
    }

    fn item(id: &str, location: &str) -> ItemDef {
        ItemDef {
            id: id.to_string(),
            name: id.to_string(),
            desc: "Test item".into(),
            location: LocationRef::Location(location.to_string()),
            kind: ItemKindDef::Plain,
        }
    }

    fn choice(text: &str, effect: EffectDef) -> ChoiceDef {
        ChoiceDef {
            text: text.to_string(),
            requires_item: None,
            effect,
        }
    }

    fn base_world() -> WorldDef {
        WorldDef {
            game: GameDef {
                title: "Demo".into(),
                start_location: "start".into(),
                ..GameDef::default()
            },
            locations: vec![location("start")],
            ..WorldDef::default()
        }
    }

    #[test]
    fn minimal_world_is_valid() {
        assert!(validate_world(&base_world()).is_empty());
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let mut world = base_world();
        world.locations.push(location("start"));

        let errors = validate_world(&world);
        assert!(
            errors
                .iter()
                .any(|err| matches!(err, ValidationError::DuplicateId { kind, id } if *kind == "location" && id == "start"))
        );
    }

    #[test]
    fn missing_start_location_is_reported() {
        let mut world = base_world();
        world.game.start_location = "nowhere".into();

        let errors = validate_world(&world);
        assert!(errors.iter().any(
            |err| matches!(err, ValidationError::MissingReference { kind, id, .. } if *kind == "location" && id == "nowhere")
        ));
    }

    #[test]
    fn blank_start_location_is_invalid() {
        let mut world = base_world();
        world.game.start_location = "  ".into();
        assert!(
            validate_world(&world)
                .iter()
                .any(|err| matches!(err, ValidationError::InvalidValue { .. }))
        );
    }

    #[test]
    fn dangling_choice_target_is_reported() {
        let mut world = base_world();
        world.locations[0].choices.push(choice(
            "Walk off a cliff",
            EffectDef::Go {
                to: "cliff".into(),
                new_desc: None,
            },
        ));

        let errors = validate_world(&world);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("missing location 'cliff'"));
    }

    #[test]
    fn dangling_item_references_are_reported() {
        let mut world = base_world();
        world.locations[0].items.push("ghost".into());
        world.locations[0].choices.push(choice(
            "Take ghost",
            EffectDef::AddItem {
                item: "ghost".into(),
                new_desc: None,
            },
        ));

        let errors = validate_world(&world);
        assert_eq!(
            errors
                .iter()
                .filter(|err| matches!(err, ValidationError::MissingReference { kind, .. } if *kind == "item"))
                .count(),
            2
        );
    }

    #[test]
    fn random_exit_without_exits_is_invalid() {
        let mut world = base_world();
        world.locations[0].choices.push(choice("Spin around", EffectDef::RandomExit));

        let errors = validate_world(&world);
        assert!(
            errors
                .iter()
                .any(|err| matches!(err, ValidationError::InvalidValue { context } if context.contains("random exits")))
        );
    }

    #[test]
    fn custom_effect_references_are_checked() {
        let mut world = base_world();
        world.locations[0].choices.push(choice(
            "Cut the fence",
            EffectDef::Custom(CustomEffectDef {
                name: "cut_fence".into(),
                requires: "cutters".into(),
                consumes: true,
                rewrite: Some(RewriteDef {
                    location: "alley".into(),
                    text: "Open.".into(),
                }),
                to: "sewer".into(),
                blocked: "No cutters.".into(),
                success: None,
            }),
        ));

        let errors = validate_world(&world);
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn combinations_need_two_known_inputs() {
        let mut world = base_world();
        world.items.push(item("radio", "start"));
        world.items.push(item("working_radio", "start"));
        world.combinations.push(CombinationDef {
            consumes: vec!["radio".into()],
            produces: "working_radio".into(),
            message: "Combined.".into(),
        });

        let errors = validate_world(&world);
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ValidationError::InvalidValue { .. }));
    }

    #[test]
    fn combinations_reject_repeated_inputs() {
        let mut world = base_world();
        world.items.push(item("gem", "start"));
        world.items.push(item("crown", "start"));
        world.combinations.push(CombinationDef {
            consumes: vec!["gem".into(), "gem".into()],
            produces: "crown".into(),
            message: "Combined.".into(),
        });

        let errors = validate_world(&world);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("lists input 'gem' twice"));
    }

    #[test]
    fn combinations_reject_consuming_their_product() {
        let mut world = base_world();
        world.items.push(item("gem", "start"));
        world.items.push(item("dust", "start"));
        world.combinations.push(CombinationDef {
            consumes: vec!["gem".into(), "dust".into()],
            produces: "gem".into(),
            message: "Combined.".into(),
        });

        let errors = validate_world(&world);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("consumes its own product"));

        world.combinations[0].consumes = vec!["gem".into(), "gem".into()];
        assert_eq!(validate_world(&world).len(), 2);
    }

    #[test]
    fn world_def_reads_from_ron() {
        let text = r#"(
            game: (title: "Tiny", start_location: "start"),
            locations: [
                (
                    id: "start",
                    name: "Start",
                    desc: "Bare walls.",
                    choices: [
                        (text: "Stay", effect: Describe(new_desc: "Still bare.")),
                    ],
                ),
            ],
        )"#;
        let world: WorldDef = ron::from_str(text).expect("tiny world should parse");
        assert_eq!(world.locations[0].choices.len(), 1);
        assert!(validate_world(&world).is_empty());
    }
}

use mapfill_model::{PropertyFlags, PropertyInfo, TypeId, TypeInterner};
use mapfill_resolve::{readable_members, writable_members};

fn names(members: &[PropertyInfo]) -> Vec<&str> {
    members.iter().map(|m| m.name.as_str()).collect()
}

#[test]
fn declaration_order_within_a_type() {
    let interner = TypeInterner::new();
    let person = interner.object_type(
        "Person",
        vec![
            PropertyInfo::new("Name", TypeId::STRING),
            PropertyInfo::new("Age", TypeId::I32),
            PropertyInfo::new("Email", TypeId::STRING),
        ],
    );

    assert_eq!(names(&writable_members(&interner, person)), vec!["Name", "Age", "Email"]);
}

#[test]
fn most_derived_members_come_first() {
    let interner = TypeInterner::new();
    let entity = interner.object_type("Entity", vec![PropertyInfo::new("Id", TypeId::I32)]);
    let person = interner.object_type_with_base(
        "Person",
        vec![PropertyInfo::new("Name", TypeId::STRING)],
        entity,
    );

    assert_eq!(names(&writable_members(&interner, person)), vec!["Name", "Id"]);
}

#[test]
fn redeclared_member_appears_once_most_derived_wins() {
    let interner = TypeInterner::new();
    let base = interner.object_type(
        "Base",
        vec![
            PropertyInfo::new("Tag", TypeId::I32),
            PropertyInfo::new("Shared", TypeId::STRING),
        ],
    );
    let derived = interner.object_type_with_base(
        "Derived",
        vec![PropertyInfo::new("Tag", TypeId::STRING)],
        base,
    );

    let members = writable_members(&interner, derived);
    assert_eq!(names(&members), vec!["Tag", "Shared"]);
    // The derived redeclaration shadows the base one.
    assert_eq!(members[0].type_id, TypeId::STRING);
}

#[test]
fn excludes_read_only_static_and_indexer_members() {
    let interner = TypeInterner::new();
    let shape = interner.object_type(
        "Shape",
        vec![
            PropertyInfo::new("Width", TypeId::I32),
            PropertyInfo::read_only("Area", TypeId::I32),
            PropertyInfo::with_flags(
                "Count",
                TypeId::I32,
                PropertyFlags::READABLE | PropertyFlags::WRITABLE | PropertyFlags::STATIC,
            ),
            PropertyInfo::with_flags(
                "Item",
                TypeId::I32,
                PropertyFlags::READABLE | PropertyFlags::WRITABLE | PropertyFlags::INDEXER,
            ),
        ],
    );

    assert_eq!(names(&writable_members(&interner, shape)), vec!["Width"]);
    // Read-only members still count as mapping sources.
    assert_eq!(names(&readable_members(&interner, shape)), vec!["Width", "Area"]);
}

#[test]
fn repeated_enumeration_is_stable() {
    let interner = TypeInterner::new();
    let entity = interner.object_type("Entity", vec![PropertyInfo::new("Id", TypeId::I32)]);
    let person = interner.object_type_with_base(
        "Person",
        vec![
            PropertyInfo::new("Name", TypeId::STRING),
            PropertyInfo::new("Age", TypeId::I32),
        ],
        entity,
    );

    let first = writable_members(&interner, person);
    let second = writable_members(&interner, person);
    assert_eq!(first, second);
}

#[test]
fn non_object_target_has_no_members() {
    let interner = TypeInterner::new();
    let gender = interner.enum_type("Gender", vec!["Male".into(), "Female".into()]);

    assert!(writable_members(&interner, TypeId::I32).is_empty());
    assert!(writable_members(&interner, gender).is_empty());
}

use mapfill_model::{CancellationToken, PropertyInfo, TypeDatabase, TypeId, TypeInterner};
use mapfill_resolve::{
    Assignment, LocalBinding, LocalScopeSource, MappingSource, Resolution, ScaffoldingSource,
    build_assignments,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn person_with_gender(interner: &TypeInterner) -> TypeId {
    let gender = interner.enum_type("Gender", vec!["Male".into(), "Female".into()]);
    interner.object_type(
        "Person",
        vec![
            PropertyInfo::new("Name", TypeId::STRING),
            PropertyInfo::new("Age", TypeId::I32),
            PropertyInfo::new("Gender", gender),
        ],
    )
}

fn rendered(assignments: &[Assignment]) -> Vec<String> {
    assignments.iter().map(|a| a.to_string()).collect()
}

#[test]
fn local_scope_scenario_omits_unmatched_members() {
    init_tracing();
    let interner = TypeInterner::new();
    let person = person_with_gender(&interner);
    let source = LocalScopeSource::new(vec![
        LocalBinding::new("name", TypeId::STRING),
        LocalBinding::new("age", TypeId::I32),
    ]);

    let assignments = build_assignments(&interner, person, &source, &CancellationToken::new())
        .expect("not cancelled");

    assert_eq!(rendered(&assignments), vec!["Name = name", "Age = age"]);
}

#[test]
fn scaffolding_scenario_fills_every_member() {
    let interner = TypeInterner::new();
    let person = person_with_gender(&interner);

    let assignments = build_assignments(
        &interner,
        person,
        &ScaffoldingSource,
        &CancellationToken::new(),
    )
    .expect("not cancelled");

    assert_eq!(
        rendered(&assignments),
        vec![
            "Name = \"lorem ipsum\"",
            "Age = 32",
            "Gender = Gender.Male",
        ]
    );
}

#[test]
fn output_preserves_enumerator_order() {
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

    let assignments = build_assignments(
        &interner,
        person,
        &ScaffoldingSource,
        &CancellationToken::new(),
    )
    .expect("not cancelled");

    let names: Vec<&str> = assignments.iter().map(|a| a.member_name.as_str()).collect();
    assert_eq!(names, vec!["Name", "Age", "Id"]);
}

#[test]
fn unresolved_members_are_omitted_not_errors() {
    let interner = TypeInterner::new();
    let holder = interner.object_type(
        "Holder",
        vec![
            PropertyInfo::new("Payload", TypeId::OBJECT),
            PropertyInfo::new("Count", TypeId::I32),
        ],
    );

    let assignments = build_assignments(
        &interner,
        holder,
        &ScaffoldingSource,
        &CancellationToken::new(),
    )
    .expect("not cancelled");

    assert_eq!(rendered(&assignments), vec!["Count = 32"]);
}

#[test]
fn incompatible_resolver_output_is_dropped() {
    struct LyingSource;
    impl MappingSource for LyingSource {
        fn resolve(
            &self,
            _db: &dyn TypeDatabase,
            _member_name: &str,
            _member_type: TypeId,
        ) -> Resolution {
            // Claims a string expression for every member, whatever its type.
            Resolution::resolved(mapfill_model::Expr::Str("oops".into()), TypeId::STRING)
        }
    }

    let interner = TypeInterner::new();
    let counter = interner.object_type(
        "Counter",
        vec![
            PropertyInfo::new("Label", TypeId::STRING),
            PropertyInfo::new("Count", TypeId::I32),
        ],
    );

    let assignments =
        build_assignments(&interner, counter, &LyingSource, &CancellationToken::new())
            .expect("not cancelled");

    assert_eq!(rendered(&assignments), vec!["Label = \"oops\""]);
}

#[test]
fn cancelled_token_interrupts_the_build() {
    let interner = TypeInterner::new();
    let person = person_with_gender(&interner);
    let token = CancellationToken::new();
    token.cancel();

    let result = build_assignments(&interner, person, &ScaffoldingSource, &token);
    assert!(result.is_err());
}

#[test]
fn two_builds_of_the_same_type_are_identical() {
    let interner = TypeInterner::new();
    let person = person_with_gender(&interner);
    let token = CancellationToken::new();

    let first = build_assignments(&interner, person, &ScaffoldingSource, &token);
    let second = build_assignments(&interner, person, &ScaffoldingSource, &token);
    assert_eq!(first, second);
}

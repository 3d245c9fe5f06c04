//! Enrollment suite.
//!
//! Covers record creation with academic defaults, index registration,
//! per-registry nia uniqueness, and the no-partial-state guarantee when
//! an enrollment fails partway through.

use kardex_tests::prelude::*;

#[test]
fn test_enrollment_creates_owned_record_with_defaults() {
    // GIVEN a fresh registry
    let (mut session, registry, ctx) = session_with_registry();

    // WHEN a guardian enrolls a student
    let record_id = enroll_ana(&mut session, registry, &ctx);

    // THEN the record holds the enrollment data and default academics
    let record = session.store().record(record_id).expect("record should exist");
    assert_eq!(record.owner(), GUARDIAN);
    assert_eq!(record.nia(), Nia::new(ANA_NIA));
    assert_eq!(record.nombre_completo(), "Ana Pérez");
    assert_eq!(record.curp(), "XXX");
    assert_eq!(record.telefono_tutor(), 5551112222);
    assert_eq!(record.email_tutor(), "a@x.com");
    assert_eq!(record.grado(), 0);
    assert_eq!(record.grupo(), DEFAULT_GRUPO);

    // AND the registry's index lists exactly this record under the nia
    let reg = session
        .store()
        .registry(registry)
        .expect("registry should exist");
    assert_eq!(reg.lookup(Nia::new(ANA_NIA)), Some(record_id));
    assert_eq!(reg.len(), 1);
}

#[test]
fn test_enrollments_get_distinct_record_ids() {
    // GIVEN a registry with one student
    let (mut session, registry, ctx) = session_with_registry();
    let first = enroll_ana(&mut session, registry, &ctx);

    // WHEN a second student with a different nia enrolls
    let second = enroll_luis(&mut session, registry, &ctx);

    // THEN both records exist under distinct ids
    assert_ne!(first, second);
    assert_eq!(session.store().record_count(), 2);

    let reg = session
        .store()
        .registry(registry)
        .expect("registry should exist");
    assert_eq!(reg.lookup(Nia::new(ANA_NIA)), Some(first));
    assert_eq!(reg.lookup(Nia::new(LUIS_NIA)), Some(second));
}

#[test]
fn test_duplicate_nia_is_rejected_without_partial_state() {
    // GIVEN an enrolled student
    let (mut session, registry, ctx) = session_with_registry();
    let first = enroll_ana(&mut session, registry, &ctx);

    // WHEN a second enrollment reuses the nia
    let result = session.enroll_student(
        registry,
        Nia::new(ANA_NIA),
        "Luis Gómez".to_string(),
        "YYY".to_string(),
        5553334444,
        "c@x.com".to_string(),
        &ctx,
    );

    // THEN the duplicate key is reported
    assert!(matches!(
        result,
        Err(SessionError::OpError(OpError::StoreError(
            StoreError::DuplicateNia { .. }
        )))
    ));

    // AND the first mapping is intact with no orphan record left behind
    let reg = session
        .store()
        .registry(registry)
        .expect("registry should exist");
    assert_eq!(reg.len(), 1);
    assert_eq!(reg.lookup(Nia::new(ANA_NIA)), Some(first));
    assert_eq!(session.store().record_count(), 1);
}

#[test]
fn test_same_nia_enrolls_in_separate_registries() {
    // GIVEN two registries in one session
    let (mut session, registry_a, ctx) = session_with_registry();
    let registry_b = session
        .create_registry(&ctx)
        .expect("registry creation should succeed");

    // WHEN the same nia is enrolled in each
    let record_a = enroll_ana(&mut session, registry_a, &ctx);
    let record_b = enroll_ana(&mut session, registry_b, &ctx);

    // THEN uniqueness is scoped per registry and the records are distinct
    assert_ne!(record_a, record_b);
    let reg_a = session
        .store()
        .registry(registry_a)
        .expect("registry should exist");
    let reg_b = session
        .store()
        .registry(registry_b)
        .expect("registry should exist");
    assert_eq!(reg_a.lookup(Nia::new(ANA_NIA)), Some(record_a));
    assert_eq!(reg_b.lookup(Nia::new(ANA_NIA)), Some(record_b));
}

#[test]
fn test_enrolling_into_unknown_registry_leaves_store_empty() {
    init_test_logging();

    // GIVEN a session with no registry
    let mut session = Session::new(1);
    let ctx = guardian_ctx();

    // WHEN enrollment targets a registry id that was never created
    let result = session.enroll_student(
        RegistryId::new(999),
        Nia::new(ANA_NIA),
        "Ana Pérez".to_string(),
        "XXX".to_string(),
        5551112222,
        "a@x.com".to_string(),
        &ctx,
    );

    // THEN the registry lookup fails
    assert!(matches!(
        result,
        Err(SessionError::OpError(OpError::StoreError(
            StoreError::RegistryNotFound(_)
        )))
    ));

    // AND the record created before the lookup was rolled back
    assert_eq!(session.store().record_count(), 0);
}

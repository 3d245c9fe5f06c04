//! Grade assignment suite.
//!
//! Covers the registration check that guards academic writes: assignment
//! succeeds only when the named registry maps the record's nia to that
//! exact record, fails with abort code 0 otherwise, and a failed
//! assignment never leaves a field changed.

use kardex_tests::prelude::*;

#[test]
fn test_assign_updates_grade_and_group_when_registered() {
    // GIVEN an enrolled student
    let (mut session, registry, ctx) = session_with_registry();
    let record_id = enroll_ana(&mut session, registry, &ctx);

    // WHEN the guardian assigns grade and group
    session
        .assign_grade_group(registry, record_id, 3, "3B".to_string(), &ctx)
        .expect("assignment should succeed");

    // THEN both academic fields hold the new values
    let record = session.store().record(record_id).expect("record should exist");
    assert_eq!(record.grado(), 3);
    assert_eq!(record.grupo(), "3B");

    // AND identity and contact fields are untouched
    assert_eq!(record.nia(), Nia::new(ANA_NIA));
    assert_eq!(record.nombre_completo(), "Ana Pérez");
    assert_eq!(record.telefono_tutor(), 5551112222);
    assert_eq!(record.email_tutor(), "a@x.com");
}

#[test]
fn test_reassignment_overwrites_prior_values() {
    // GIVEN a student already assigned to 2/"2A"
    let (mut session, registry, ctx) = session_with_registry();
    let record_id = enroll_ana(&mut session, registry, &ctx);
    session
        .assign_grade_group(registry, record_id, 2, "2A".to_string(), &ctx)
        .expect("assignment should succeed");

    // WHEN a new assignment arrives
    session
        .assign_grade_group(registry, record_id, 3, "3B".to_string(), &ctx)
        .expect("assignment should succeed");

    // THEN the prior values are gone
    let record = session.store().record(record_id).expect("record should exist");
    assert_eq!(record.grado(), 3);
    assert_eq!(record.grupo(), "3B");
}

#[test]
fn test_assign_against_other_registry_fails_with_abort_code_zero() {
    // GIVEN a student enrolled in registry A and an empty registry B
    let (mut session, registry_a, ctx) = session_with_registry();
    let registry_b = session
        .create_registry(&ctx)
        .expect("registry creation should succeed");
    let record_id = enroll_ana(&mut session, registry_a, &ctx);

    // WHEN assignment names registry B
    let result = session.assign_grade_group(registry_b, record_id, 3, "3B".to_string(), &ctx);

    // THEN the registration assertion fires with its historic abort code
    match result {
        Err(err) => assert_eq!(err.abort_code(), Some(0)),
        Ok(()) => panic!("assignment against the wrong registry must fail"),
    }

    // AND the academic fields never changed
    let record = session.store().record(record_id).expect("record should exist");
    assert_eq!(record.grado(), 0);
    assert_eq!(record.grupo(), DEFAULT_GRUPO);
}

#[test]
fn test_assign_requires_identity_not_just_key_presence() {
    // GIVEN the same nia enrolled in two registries as two distinct records
    let (mut session, registry_a, ctx) = session_with_registry();
    let registry_b = session
        .create_registry(&ctx)
        .expect("registry creation should succeed");
    let record_a = enroll_ana(&mut session, registry_a, &ctx);
    let record_b = enroll_ana(&mut session, registry_b, &ctx);
    assert_ne!(record_a, record_b);

    // WHEN registry B is named for registry A's record
    let result = session.assign_grade_group(registry_b, record_a, 3, "3B".to_string(), &ctx);

    // THEN the nia being a key in B is not enough: B maps it to record_b
    assert!(matches!(
        result,
        Err(SessionError::OpError(OpError::NotRegistered { .. }))
    ));

    // AND neither record changed
    let a = session.store().record(record_a).expect("record should exist");
    assert_eq!(a.grado(), 0);
    assert_eq!(a.grupo(), DEFAULT_GRUPO);
    let b = session.store().record(record_b).expect("record should exist");
    assert_eq!(b.grado(), 0);
    assert_eq!(b.grupo(), DEFAULT_GRUPO);
}

#[test]
fn test_failed_assignment_preserves_earlier_committed_values() {
    // GIVEN a student already assigned to 2/"2A"
    let (mut session, registry_a, ctx) = session_with_registry();
    let registry_b = session
        .create_registry(&ctx)
        .expect("registry creation should succeed");
    let record_id = enroll_ana(&mut session, registry_a, &ctx);
    session
        .assign_grade_group(registry_a, record_id, 2, "2A".to_string(), &ctx)
        .expect("assignment should succeed");

    // WHEN a later assignment names the wrong registry
    let result = session.assign_grade_group(registry_b, record_id, 5, "5C".to_string(), &ctx);

    // THEN the failure rolls the overwrite back to the committed values
    assert!(result.is_err());
    let record = session.store().record(record_id).expect("record should exist");
    assert_eq!(record.grado(), 2);
    assert_eq!(record.grupo(), "2A");
}

#[test]
fn test_assign_unknown_registry_fails_without_field_change() {
    // GIVEN an enrolled student
    let (mut session, registry, ctx) = session_with_registry();
    let record_id = enroll_ana(&mut session, registry, &ctx);

    // WHEN assignment names a registry id that was never created
    let result = session.assign_grade_group(
        RegistryId::new(999),
        record_id,
        3,
        "3B".to_string(),
        &ctx,
    );

    // THEN the registry lookup fails
    assert!(matches!(
        result,
        Err(SessionError::OpError(OpError::StoreError(
            StoreError::RegistryNotFound(_)
        )))
    ));

    // AND the write taken before the lookup was rolled back
    let record = session.store().record(record_id).expect("record should exist");
    assert_eq!(record.grado(), 0);
    assert_eq!(record.grupo(), DEFAULT_GRUPO);
}

use sqlbind::prelude::*;

#[test]
fn type_mismatch_on_integer_placeholder() {
    let err = build_query("SELECT ?d", &values!["abc"]).unwrap_err();
    assert_eq!(
        err,
        BindError::TypeMismatch {
            expected: "integer",
            actual: "string",
            template: "SELECT ?d".into(),
        }
    );
}

#[test]
fn type_mismatch_on_float_placeholder() {
    let err = build_query("SELECT ?f", &values!["abc"]).unwrap_err();
    assert!(matches!(err, BindError::TypeMismatch { expected: "float", .. }));
}

#[test]
fn type_mismatch_on_string_placeholder() {
    let err = build_query("SELECT ?s", &[Value::Array(vec![])]).unwrap_err();
    assert!(matches!(
        err,
        BindError::TypeMismatch {
            expected: "string",
            actual: "array",
            ..
        }
    ));
}

#[test]
fn scalar_rejected_by_array_placeholder() {
    let err = build_query("SELECT ?a", &values![5]).unwrap_err();
    assert_eq!(
        err,
        BindError::InvalidArray {
            actual: "integer",
            template: "SELECT ?a".into(),
        }
    );
}

#[test]
fn non_textual_identifier_rejected() {
    let err = build_query("SELECT ?#", &values![5]).unwrap_err();
    assert!(matches!(
        err,
        BindError::InvalidIdentifier { actual: "integer", .. }
    ));
}

#[test]
fn double_dot_identifier_rejected() {
    let err = build_query("SELECT ?#", &values!["a...b"]).unwrap_err();
    assert_eq!(
        err,
        BindError::DoubleDot {
            template: "SELECT ?#".into(),
        }
    );
}

#[test]
fn container_at_bare_marker_fails_fast() {
    let err = build_query("SELECT ?", &[fields! { "a" => 1 }]).unwrap_err();
    assert!(matches!(
        err,
        BindError::TypeMismatch {
            expected: "scalar",
            actual: "map",
            ..
        }
    ));
}

#[test]
fn error_carries_the_original_template() {
    let template = "SELECT * FROM t WHERE id = ?d AND x = ?d";
    let err = build_query(template, &values![1, "oops"]).unwrap_err();
    let BindError::TypeMismatch { template: carried, .. } = err else {
        panic!("expected a type mismatch");
    };
    assert_eq!(carried, template);
}

#[test]
fn error_messages_name_both_types() {
    let err = build_query("?d", &values!["x"]).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("integer"));
    assert!(message.contains("string"));
    assert!(message.contains("?d"));
}

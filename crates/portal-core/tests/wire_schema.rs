//! Backend payloads validated against the schemars-generated schemas.

use portal_core::{Course, Envelope, Identity, Module};
use schemars::schema_for;

fn schema_errors(schema: &serde_json::Value, instance: &serde_json::Value) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! accepts_backend_payload {
    ($name:ident, $ty:ty, $payload:expr) => {
        #[test]
        fn $name() {
            let payload: serde_json::Value = $payload;

            let decoded: $ty = serde_json::from_value(payload.clone())
                .unwrap_or_else(|e| panic!("{} should decode: {e}", stringify!($ty)));

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let reencoded = serde_json::to_value(&decoded).unwrap();
            let errors = schema_errors(&schema, &reencoded);
            assert!(
                errors.is_empty(),
                "schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

accepts_backend_payload!(
    login_envelope,
    Envelope,
    serde_json::json!({
        "status": "S",
        "message": "Login successful",
        "student_id": "S1"
    })
);

accepts_backend_payload!(
    failure_envelope_without_message,
    Envelope,
    serde_json::json!({ "status": "E" })
);

accepts_backend_payload!(
    course_from_student_details,
    Course,
    serde_json::json!({
        "course_id": "CS101",
        "course_name": "Intro to CS",
        "teacher_id": "T7"
    })
);

accepts_backend_payload!(
    module_as_stored_by_addmodule,
    Module,
    serde_json::json!({
        "module_name": "Week 1",
        "content": {
            "ppt_link": "C:/slides/week1.pptx",
            "audio_link": "C:/audio/week1.mp3",
            "quiz_link": "",
            "audio_summary": "",
            "ppt_summary": "",
            "audio_text": "",
            "ppt_text": ""
        }
    })
);

accepts_backend_payload!(
    identity,
    Identity,
    serde_json::json!({ "id": "T7", "role": "teacher" })
);

#[test]
fn identity_schema_rejects_unknown_role() {
    let schema = serde_json::to_value(schema_for!(Identity)).unwrap();
    let errors = schema_errors(&schema, &serde_json::json!({ "id": "X", "role": "admin" }));
    assert!(!errors.is_empty());
}

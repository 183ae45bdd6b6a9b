use campus_core::{ApiError, ErrorBody, MessageBody};
use campus_model::{Article, Organization, ValidationError};
use campus_storage::StorageError;
use campus_types::{Code, RecordId};
use pretty_assertions::assert_eq;

#[test]
fn not_found_body() {
    let err = ApiError::not_found::<Article>(&RecordId::new(7));
    assert_eq!(
        serde_json::to_value(err.body()).unwrap(),
        serde_json::json!({
            "type": "EntityNotFoundException",
            "message": "Article with id 7 not found"
        })
    );
}

#[test]
fn not_found_with_code_key() {
    let err = ApiError::not_found::<Organization>(&Code::from("ZPR"));
    assert_eq!(err.to_string(), "UCSBOrganization with id ZPR not found");
}

#[test]
fn validation_maps_to_bad_request() {
    let err = ApiError::from(ValidationError::MissingField("stars".into()));
    assert_eq!(err.status_code(), 400);
    assert_eq!(
        err.body(),
        ErrorBody {
            kind: "ValidationException".into(),
            message: "Required parameter 'stars' is not present".into(),
        }
    );
}

#[test]
fn store_failure_maps_to_server_error() {
    let err = ApiError::from(StorageError::InvalidData("bad row".into()));
    assert_eq!(err.status_code(), 500);
    assert_eq!(err.type_name(), "StoreFailure");
}

#[test]
fn error_body_round_trips_type_field() {
    let body: ErrorBody =
        serde_json::from_str(r#"{"type":"AccessDeniedException","message":"Access is denied"}"#)
            .unwrap();
    assert_eq!(body.kind, "AccessDeniedException");
}

#[test]
fn message_body_shape() {
    let json = serde_json::to_string(&MessageBody::new("Article with id 1 deleted")).unwrap();
    assert_eq!(json, r#"{"message":"Article with id 1 deleted"}"#);
}

use oasmd_core::extract::{Parameter, Response};
use oasmd_core::{
    convert_spec_text, generate_markdown, retrieve_endpoints, AppError, ExtractOptions,
    MarkdownRenderer,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::fs;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_petstore_round_trip() {
    let location = fixture("petstore.yaml");
    let endpoints =
        retrieve_endpoints(location.to_str().unwrap(), &ExtractOptions::default()).unwrap();

    let names: Vec<&String> = endpoints.keys().collect();
    assert_eq!(names, vec!["listPets", "createPets", "showPetById"]);

    let list = &endpoints["listPets"];
    let code = list.code.as_ref().unwrap();
    assert_eq!(
        code["shell"],
        "curl -X GET http://petstore.swagger.io/v1/pets \\\n  -H 'Accept: application/json'"
    );
    assert!(code["http"].contains("Host: petstore.swagger.io"));
    assert_eq!(
        list.parameters.as_ref().unwrap()["limit"],
        Parameter {
            location: Some("query".into()),
            ty: Some("integer(int32)".into()),
            required: Some("false".into()),
            description: Some("How many items to return at one time (max 100)".into()),
        }
    );
    let responses = list.responses.as_ref().unwrap();
    assert_eq!(
        responses["200"],
        Response {
            example: Some(json!([{"id": 0, "name": "doggie", "tag": "string"}])),
            meaning: Some("OK".into()),
            schema: Some("Pets".into()),
            description: Some("A paged array of pets".into()),
        }
    );
    assert_eq!(responses["default"].meaning.as_deref(), Some("Default"));
    assert_eq!(responses["default"].example, Some(json!({"code": 0, "message": "string"})));
    assert_eq!(list.auth.as_deref(), Some("api_key"));

    let create = &endpoints["createPets"];
    let body = create.body.as_ref().unwrap();
    assert_eq!(body.endpoint.method.as_deref(), Some("POST"));
    assert_eq!(body.endpoint.url.as_deref(), Some("/pets"));
    assert_eq!(body.formats["json"], json!({"id": 0, "name": "doggie", "tag": "string"}));
    assert_eq!(
        create.responses.as_ref().unwrap()["201"],
        Response {
            example: None,
            meaning: Some("Created".into()),
            schema: Some("None".into()),
            description: Some("Null response".into()),
        }
    );
    assert_eq!(
        create.callbacks.as_deref(),
        Some("onCreated|{$request.body#/callbackUrl}|POST")
    );

    let show = &endpoints["showPetById"];
    assert_eq!(
        show.parameters.as_ref().unwrap()["petId"].required.as_deref(),
        Some("true")
    );
    assert_eq!(
        show.responses.as_ref().unwrap()["200"].example,
        Some(json!({"id": 7, "name": "Rex", "tag": "dog"}))
    );
    assert_eq!(show.auth.as_deref(), Some("petstore_auth ( Scopes: read:pets )"));
    assert_eq!(show.body, None);
}

#[test]
fn test_swagger2_round_trip() {
    let text = fs::read_to_string(fixture("swagger2.json")).unwrap();
    let endpoints =
        convert_spec_text(&text, &MarkdownRenderer::default(), &ExtractOptions::default())
            .unwrap();

    let names: Vec<&String> = endpoints.keys().collect();
    assert_eq!(names, vec!["addPet", "findPetsByStatus", "getInventory"]);

    let add = &endpoints["addPet"];
    assert!(add.code.as_ref().unwrap()["shell"]
        .starts_with("curl -X POST https://petstore.swagger.io/v2/pet"));
    assert_eq!(
        add.body.as_ref().unwrap().formats["json"],
        json!({"id": 0, "name": "doggie", "status": "available"})
    );
    assert_eq!(
        add.parameters.as_ref().unwrap()["body"].ty.as_deref(),
        Some("Pet")
    );
    assert_eq!(
        add.responses.as_ref().unwrap()["405"].meaning.as_deref(),
        Some("Method Not Allowed")
    );
    assert_eq!(
        add.auth.as_deref(),
        Some("petstore_auth ( Scopes: write:pets read:pets )")
    );

    let find = &endpoints["findPetsByStatus"];
    assert_eq!(
        find.parameters.as_ref().unwrap()["status"].ty.as_deref(),
        Some("[string]")
    );
    let responses = find.responses.as_ref().unwrap();
    assert_eq!(responses["200"].schema.as_deref(), Some("[Pet]"));
    assert_eq!(responses["400"].schema.as_deref(), Some("None"));
    assert_eq!(find.auth.as_deref(), Some("None"));

    let inventory = &endpoints["getInventory"];
    let ok = &inventory.responses.as_ref().unwrap()["200"];
    assert_eq!(ok.schema.as_deref(), Some("Inline"));
    assert_eq!(ok.example, Some(json!({})));
}

#[test]
fn test_preamble_marker_is_escaped() {
    let text = fs::read_to_string(fixture("petstore.yaml")).unwrap();
    let markdown = generate_markdown(&text).unwrap();
    assert!(markdown.contains("\\#\\#\\#\\# Not an endpoint"));
    assert_eq!(markdown.matches("####").count(), 3);
}

#[test]
fn test_spec_errors_fail_the_conversion() {
    let err = convert_spec_text(
        "openapi: [3",
        &MarkdownRenderer::default(),
        &ExtractOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, AppError::Spec(_)));

    let err = convert_spec_text(
        "- just\n- a list\n",
        &MarkdownRenderer::default(),
        &ExtractOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, AppError::General(_)));
}

//! Integration tests for the ARM REST provider using wiremock
//!
//! These tests verify request shape and error classification against mocked
//! Azure Resource Manager endpoints.

use azure_securitygroup_facts::azure::{ArmLocation, ArmRestProvider, SecurityGroupProvider};
use azure_securitygroup_facts::error::FactsError;
use azure_securitygroup_facts::processing::gather_facts;
use azure_securitygroup_facts::Query;
use serde_json::json;
use wiremock::matchers::{bearer_token, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SUBSCRIPTION: &str = "3f7e29ba-24e0-42f6-8d9c-5149a14bda37";
const API_VERSION: &str = "2023-09-01";
const GROUPS_PATH: &str = "/subscriptions/3f7e29ba-24e0-42f6-8d9c-5149a14bda37/resourceGroups/Testing/providers/Microsoft.Network/networkSecurityGroups";

fn provider_for(server: &MockServer) -> ArmRestProvider {
    let location = ArmLocation::new(&server.uri(), SUBSCRIPTION, API_VERSION);
    ArmRestProvider::new(location, "test-token").expect("client builds")
}

fn nsg(name: &str) -> serde_json::Value {
    json!({
        "etag": "W/\"d036f4d7-d977-429a-a8c6-879bc2523399\"",
        "id": format!("{GROUPS_PATH}/{name}"),
        "location": "eastus2",
        "name": name,
        "properties": {
            "defaultSecurityRules": [],
            "provisioningState": "Succeeded",
            "securityRules": []
        },
        "tags": {},
        "type": "Microsoft.Network/networkSecurityGroups"
    })
}

#[tokio::test]
async fn test_get_sends_token_and_api_version() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{GROUPS_PATH}/secgroup001")))
        .and(query_param("api-version", API_VERSION))
        .and(bearer_token("test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(nsg("secgroup001")))
        .expect(1)
        .mount(&server)
        .await;

    let group = provider_for(&server)
        .get("Testing", "secgroup001")
        .await
        .expect("get succeeds");

    assert_eq!(group.display_name(), "secgroup001");
    assert_eq!(
        group.etag.as_deref(),
        Some("W/\"d036f4d7-d977-429a-a8c6-879bc2523399\"")
    );
}

#[tokio::test]
async fn test_404_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{GROUPS_PATH}/secgroup999")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "code": "ResourceNotFound",
                "message": "The Resource 'Microsoft.Network/networkSecurityGroups/secgroup999' under resource group 'Testing' was not found."
            }
        })))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider.get("Testing", "secgroup999").await.unwrap_err();
    assert!(err.is_not_found());

    let query = Query::new("Testing", Some("secgroup999")).expect("valid query");
    let envelope = gather_facts(&provider, &query, false)
        .await
        .expect("not found is an empty result");
    assert!(envelope.results.is_empty());
}

#[tokio::test]
async fn test_403_on_lookup_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{GROUPS_PATH}/secgroup001")))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {"code": "AuthorizationFailed", "message": "no read permission"}
        })))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let query = Query::new("Testing", Some("secgroup001")).expect("valid query");
    let err = gather_facts(&provider, &query, false).await.unwrap_err();

    match err {
        FactsError::Lookup { source, .. } => {
            assert!(!source.is_not_found());
            assert!(source.to_string().contains("AuthorizationFailed"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn test_429_is_transient() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{GROUPS_PATH}/secgroup001")))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .get("Testing", "secgroup001")
        .await
        .unwrap_err();
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_list_returns_all_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(GROUPS_PATH))
        .and(query_param("api-version", API_VERSION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [nsg("web"), nsg("db"), nsg("bastion")]
        })))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let query = Query::new("Testing", None).expect("valid query");
    let envelope = gather_facts(&provider, &query, false)
        .await
        .expect("listing succeeds");

    let names: Vec<_> = envelope.results.iter().filter_map(|r| r.name()).collect();
    assert_eq!(names, vec!["web", "db", "bastion"]);
}

#[tokio::test]
async fn test_list_error_is_terminal() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(GROUPS_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": {"code": "InternalServerError", "message": "try again later"}
        })))
        .mount(&server)
        .await;

    let query = Query::new("Testing", None).expect("valid query");
    let err = gather_facts(&provider_for(&server), &query, false)
        .await
        .unwrap_err();

    assert!(matches!(err, FactsError::Listing(_)));
    assert!(err
        .to_string()
        .contains("InternalServerError: try again later"));
}

#[tokio::test]
async fn test_invalid_body_is_not_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{GROUPS_PATH}/secgroup001")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy login</html>"))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .get("Testing", "secgroup001")
        .await
        .unwrap_err();
    assert!(!err.is_not_found());
    assert!(err.to_string().starts_with("Error parsing security group"));
}

#[tokio::test]
async fn test_unknown_subscription_is_not_masked() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{GROUPS_PATH}/secgroup001")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "code": "SubscriptionNotFound",
                "message": "The subscription '3f7e29ba-24e0-42f6-8d9c-5149a14bda37' could not be found."
            }
        })))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let query = Query::new("Testing", Some("secgroup001")).expect("valid query");
    let err = gather_facts(&provider, &query, false).await.unwrap_err();

    match err {
        FactsError::Lookup { source, .. } => {
            assert!(!source.is_not_found());
            assert!(source.to_string().contains("SubscriptionNotFound"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn test_list_ignores_next_link() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(GROUPS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [nsg("web"), nsg("db")],
            "nextLink": format!("{}{GROUPS_PATH}?api-version={API_VERSION}&$skiptoken=abc", server.uri())
        })))
        .expect(1)
        .mount(&server)
        .await;

    let groups = provider_for(&server)
        .list("Testing")
        .await
        .expect("first page is returned");

    let names: Vec<_> = groups.iter().map(|g| g.display_name()).collect();
    assert_eq!(names, vec!["web", "db"]);
}

//! Integration tests against a mock Data Plane API.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hapsync_client::{Backend, Balance, ClientConfig, ClientError, DataplaneClient};

fn client_for(server: &MockServer) -> DataplaneClient {
    DataplaneClient::new(&ClientConfig::new(server.uri(), "admin", "secret"))
}

fn backend_b1() -> Backend {
    Backend {
        name: "b1".to_string(),
        mode: "http".to_string(),
        balance: Balance {
            algorithm: "roundrobin".to_string(),
        },
    }
}

#[tokio::test]
async fn version_sentinel_is_normalized_to_one() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/haproxy/configuration/raw"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_version": 0})))
        .mount(&server)
        .await;

    let version = client_for(&server).configuration_version().await.unwrap();
    assert_eq!(version, 1);
}

#[tokio::test]
async fn nonzero_version_passes_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/haproxy/configuration/raw"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_version": 7})))
        .mount(&server)
        .await;

    let version = client_for(&server).configuration_version().await.unwrap();
    assert_eq!(version, 7);
}

#[tokio::test]
async fn requests_carry_basic_auth() {
    let server = MockServer::start().await;
    // base64("admin:secret")
    Mock::given(method("GET"))
        .and(path("/services/haproxy/configuration/raw"))
        .and(header("authorization", "Basic YWRtaW46c2VjcmV0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_version": 3})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).configuration_version().await.unwrap();
}

#[tokio::test]
async fn open_transaction_targets_the_read_version() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/services/haproxy/transactions"))
        .and(query_param("version", "7"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "273e3385",
            "_version": 7,
            "status": "in_progress"
        })))
        .mount(&server)
        .await;

    let transaction = client_for(&server).open_transaction(7).await.unwrap();
    assert_eq!(transaction.id, "273e3385");
    assert_eq!(transaction.version, 7);
}

#[tokio::test]
async fn stale_version_open_is_a_conflict() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/services/haproxy/transactions"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "code": 409,
            "message": "version mismatch"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).open_transaction(3).await.unwrap_err();
    assert!(err.is_conflict());
    assert!(err.to_string().contains("version mismatch"));
}

#[tokio::test]
async fn outdated_commit_is_a_conflict() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/services/haproxy/transactions/t1"))
        .respond_with(ResponseTemplate::new(406).set_body_json(json!({
            "code": 406,
            "message": "transaction t1 is outdated"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).commit_transaction("t1").await.unwrap_err();
    assert!(err.is_conflict());
}

#[tokio::test]
async fn get_backend_unwraps_the_version_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/haproxy/configuration/backends/b1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_version": 12,
            "data": {"name": "b1", "mode": "http", "balance": {"algorithm": "roundrobin"}}
        })))
        .mount(&server)
        .await;

    let backend = client_for(&server).backend("b1").await.unwrap();
    assert_eq!(backend, backend_b1());
}

#[tokio::test]
async fn absent_backend_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/haproxy/configuration/backends/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": 404,
            "message": "backend missing does not exist"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).backend("missing").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn create_backend_is_scoped_by_transaction() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/services/haproxy/configuration/backends"))
        .and(query_param("transaction_id", "t1"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "name": "b1", "mode": "http", "balance": {"algorithm": "roundrobin"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client_for(&server)
        .create_backend("t1", &backend_b1())
        .await
        .unwrap();
    assert_eq!(created.name, "b1");
}

#[tokio::test]
async fn rejected_payload_is_a_validation_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/services/haproxy/configuration/backends"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "code": 422,
            "message": "balance algorithm is required"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_backend("t1", &backend_b1())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
}

#[tokio::test]
async fn bind_calls_carry_parent_addressing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/haproxy/configuration/binds/bd1"))
        .and(query_param("parent_type", "frontend"))
        .and(query_param("parent_name", "f1"))
        .and(query_param("frontend", "f1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_version": 4,
            "data": {"name": "bd1", "address": "127.0.0.1", "port": 9999}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let bind = client_for(&server).bind("bd1", "f1").await.unwrap();
    assert_eq!(bind.address, "127.0.0.1");
    assert_eq!(bind.port, 9999);
}

#[tokio::test]
async fn server_template_calls_use_the_backend_alias() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/haproxy/configuration/server_templates/srv"))
        .and(query_param("backend", "b1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_version": 4,
            "data": {
                "prefix": "srv",
                "fqdn": "pool.example.net",
                "num_or_range": "1-3",
                "port": 8080,
                "check": "enabled",
                "resolvers": "dns0"
            }
        })))
        .mount(&server)
        .await;

    let template = client_for(&server).server_template("srv", "b1").await.unwrap();
    assert_eq!(template.prefix, "srv");
    assert_eq!(template.resolvers, "dns0");
}

#[tokio::test]
async fn delete_succeeds_with_no_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/services/haproxy/configuration/backends/b1"))
        .and(query_param("transaction_id", "t1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).delete_backend("t1", "b1").await.unwrap();
}

#[tokio::test]
async fn undecodable_success_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/haproxy/configuration/raw"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).configuration_version().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn list_backends_returns_all() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/haproxy/configuration/backends"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_version": 9,
            "data": [
                {"name": "b1", "mode": "http", "balance": {"algorithm": "roundrobin"}},
                {"name": "b2", "mode": "tcp", "balance": {"algorithm": "leastconn"}}
            ]
        })))
        .mount(&server)
        .await;

    let backends = client_for(&server).backends().await.unwrap();
    assert_eq!(backends.len(), 2);
    assert_eq!(backends[1].balance.algorithm, "leastconn");
}

#[tokio::test]
async fn resolvers_are_listed_read_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/haproxy/configuration/resolvers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_version": 2,
            "data": [{"name": "dns0"}]
        })))
        .mount(&server)
        .await;

    let resolvers = client_for(&server).resolvers().await.unwrap();
    assert_eq!(resolvers.len(), 1);
    assert_eq!(resolvers[0].name, "dns0");
}

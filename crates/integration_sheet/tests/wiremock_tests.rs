//! Integration tests for the sheet routes using wiremock
//!
//! Each route is exercised against a mock server: the JSON route's
//! acceptance rules, the CSV routes' plausibility guard, and the relay
//! envelope handling.

use domain::{DomainStatus, ServiceStatus, TrailStatus};
use integration_sheet::{SheetClient, SheetConfig, SheetError};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

/// A realistic CSV export: 53 lines with the documented layout filled in.
fn sheet_csv() -> String {
    let mut rows = vec![String::new(); 53];
    rows[5] = "Mise à jour par,Jean-Michel".to_string();
    rows[7] = "Statut,OUVERT".to_string();
    rows[9] = "Dernier damage,12/01".to_string();
    rows[10] = "Heure,7h30".to_string();
    rows[12] = "État route,Dégagée".to_string();
    rows[13] = "Foyer ouvre à,9".to_string();
    rows[14] = "Foyer ferme à,17".to_string();
    rows[16] = "Foyer Bas (1400m),45,Bonne,Stable".to_string();
    rows[17] = "Foyer Haut (1600m),65,Très bonne,Hausse".to_string();
    rows[23] = "Crève-Cœur,Vert,Classique,OUVERTE,2.5,".to_string();
    rows[24] = "Les Crêtes,Noir,Skating,FERMEE,6,Enneigement insuffisant".to_string();
    rows[48] = "Activité / Service,Statut,Horaires,Notes".to_string();
    rows[49] = "Foyer d'accueil,OUVERT,9h00 - 17h00,".to_string();
    rows.join("\n")
}

fn sample_json() -> serde_json::Value {
    serde_json::json!({
        "statut": "OUVERT",
        "message": "",
        "dernierDamage": "12/01",
        "heureDamage": "7h30",
        "etatRoute": "Dégagée",
        "foyerOuvertA": 9,
        "foyerFermeA": 17,
        "zones": [
            {"nom": "Foyer Bas (1400m)", "hauteur": "45", "qualite": "Bonne", "tendance": "Stable"}
        ],
        "pistes": [
            {"nom": "Crève-Cœur", "niveau": "Vert", "type": "Classique", "statut": "OUVERTE", "km": "2.5"}
        ]
    })
}

/// Client with every route pointed at the mock server
fn test_client(mock_server: &MockServer) -> SheetClient {
    let uri = mock_server.uri();
    let config = SheetConfig {
        apps_script_url: format!("{uri}/macros/exec"),
        sheets_base_url: uri.clone(),
        allorigins_url: format!("{uri}/allorigins/get"),
        corsproxy_url: format!("{uri}/corsproxy/"),
        json_timeout_secs: 2,
        quick_timeout_secs: 1,
        csv_timeout_secs: 2,
        proxy_timeout_secs: 2,
        ..Default::default()
    };
    #[allow(clippy::expect_used)]
    SheetClient::new(config).expect("Failed to create client")
}

#[tokio::test]
async fn apps_script_route_parses_json() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/macros/exec"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_json()))
        .mount(&mock_server)
        .await;

    let snapshot = test_client(&mock_server)
        .fetch_json_snapshot()
        .await
        .expect("should fetch");
    assert_eq!(snapshot.domain_status, DomainStatus::Open);
    assert_eq!(snapshot.snow_zones.len(), 1);
    assert_eq!(snapshot.trails.len(), 1);
    assert!(snapshot.services.is_empty(), "missing services normalize to empty");
}

#[tokio::test]
async fn apps_script_route_rejects_foreign_json() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/macros/exec"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"error": "not deployed"})),
        )
        .mount(&mock_server)
        .await;

    let result = test_client(&mock_server).fetch_json_snapshot().await;
    assert!(
        matches!(result, Err(SheetError::MissingConditionsKeys)),
        "Expected MissingConditionsKeys, got: {result:?}"
    );
}

#[tokio::test]
async fn export_route_decodes_csv() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(
            "/spreadsheets/d/1DPKFwYiECT1NEeNHAdjZnwYRcfeaWX4FdM6AX2x4U_E/export",
        ))
        .and(query_param("format", "csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sheet_csv()))
        .mount(&mock_server)
        .await;

    let snapshot = test_client(&mock_server)
        .fetch_export_snapshot()
        .await
        .expect("should fetch");
    assert_eq!(snapshot.updated_by.as_deref(), Some("Jean-Michel"));
    assert_eq!(snapshot.trails.len(), 2);
    assert_eq!(snapshot.trails[1].status, TrailStatus::Closed);
    assert_eq!(snapshot.services.len(), 1);
    assert_eq!(snapshot.services[0].status, ServiceStatus::Open);
}

#[tokio::test]
async fn short_payload_is_not_accepted() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Statut,OUVERT"))
        .mount(&mock_server)
        .await;

    let result = test_client(&mock_server).fetch_gviz_snapshot().await;
    assert!(
        matches!(result, Err(SheetError::PayloadTooShort { .. })),
        "Expected PayloadTooShort, got: {result:?}"
    );
}

#[tokio::test]
async fn html_error_page_is_not_accepted() {
    let mock_server = MockServer::start().await;
    let login_page = format!("<!DOCTYPE html><html>{}</html>", "x".repeat(200));
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(login_page))
        .mount(&mock_server)
        .await;

    let result = test_client(&mock_server).fetch_export_snapshot().await;
    assert!(
        matches!(result, Err(SheetError::HtmlErrorPage)),
        "Expected HtmlErrorPage, got: {result:?}"
    );
}

#[tokio::test]
async fn allorigins_route_unwraps_the_envelope() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/allorigins/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "contents": sheet_csv(),
            "status": {"http_code": 200}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let snapshot = test_client(&mock_server)
        .fetch_allorigins_snapshot()
        .await
        .expect("should fetch");
    assert_eq!(snapshot.snow_zones.len(), 2);
}

#[tokio::test]
async fn allorigins_route_passes_the_target_url() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server);
    let expected_target = format!(
        "{}/spreadsheets/d/1DPKFwYiECT1NEeNHAdjZnwYRcfeaWX4FdM6AX2x4U_E/gviz/tq?tqx=out:csv&sheet=Conditions%20des%20Pistes",
        mock_server.uri()
    );
    Mock::given(method("GET"))
        .and(path("/allorigins/get"))
        .and(query_param("url", expected_target.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "contents": sheet_csv()
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client.fetch_allorigins_snapshot().await;
    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn allorigins_html_contents_are_rejected() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/allorigins/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "contents": "<!DOCTYPE html><html>blocked</html>"
        })))
        .mount(&mock_server)
        .await;

    let result = test_client(&mock_server).fetch_allorigins_snapshot().await;
    assert!(
        matches!(result, Err(SheetError::HtmlErrorPage)),
        "Expected HtmlErrorPage, got: {result:?}"
    );
}

#[tokio::test]
async fn allorigins_envelope_without_contents_is_a_parse_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/allorigins/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": {"http_code": 404}
        })))
        .mount(&mock_server)
        .await;

    let result = test_client(&mock_server).fetch_allorigins_snapshot().await;
    assert!(
        matches!(result, Err(SheetError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn corsproxy_route_passes_the_body_through() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/corsproxy/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sheet_csv()))
        .mount(&mock_server)
        .await;

    let snapshot = test_client(&mock_server)
        .fetch_corsproxy_snapshot()
        .await
        .expect("should fetch");
    assert_eq!(snapshot.domain_status, DomainStatus::Open);
}

#[tokio::test]
async fn non_ok_status_is_request_failed() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&mock_server)
        .await;

    let result = test_client(&mock_server).fetch_export_snapshot().await;
    assert!(
        matches!(result, Err(SheetError::RequestFailed(_))),
        "Expected RequestFailed, got: {result:?}"
    );
}

#[tokio::test]
async fn slow_quick_route_times_out() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/macros/exec"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sample_json())
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let result = test_client(&mock_server).fetch_quick_snapshot().await;
    assert!(
        matches!(result, Err(SheetError::Timeout { timeout_secs: 1 })),
        "Expected Timeout, got: {result:?}"
    );
}

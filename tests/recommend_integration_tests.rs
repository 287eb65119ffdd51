use croprec::core::form::{FormField, FormFields};
use croprec::core::ranking::{Ranking, rank};
use croprec::core::validate::validate;
use croprec::recommend::{
    HttpRecommendationClient, RecommendRequest, Recommendation, RecommendationSource,
    RequestError,
};
use tokio_test::{assert_err, assert_ok};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

/// The form a user would fill in for a typical Kharif season query.
fn kharif_form() -> FormFields {
    FormFields::default()
        .with(FormField::CropYear, "2024")
        .with(FormField::Season, "Kharif")
        .with(FormField::State, "Punjab")
        .with(FormField::Area, "10")
        .with(FormField::Fertilizer, "50")
        .with(FormField::Pesticide, "5")
        .with(FormField::AnnualRainfall, "")
}

fn kharif_request() -> RecommendRequest {
    validate(&kharif_form()).expect("fixture form is valid")
}

// ============================================================================
// Success Path
// ============================================================================

#[tokio::test]
async fn test_successful_recommendation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "Crop": "Rice", "Probability": 0.3 },
            { "Crop": "Wheat", "Probability": 0.7 }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpRecommendationClient::new(mock_server.uri());
    let result = client.recommend(&kharif_request()).await;

    let list = assert_ok!(result);
    assert_eq!(
        list,
        vec![Recommendation::new("Rice", 0.3), Recommendation::new("Wheat", 0.7)]
    );
}

#[tokio::test]
async fn test_end_to_end_payload_shape() {
    let mock_server = MockServer::start().await;

    // The exact body the backend must receive for the Kharif form
    let expected_body = serde_json::json!({
        "Crop_Year": 2024,
        "Season": "Kharif",
        "State": "Punjab",
        "Area": 10.0,
        "Fertilizer": 50.0,
        "Pesticide": 5.0,
        "Annual_Rainfall": null
    });

    Mock::given(method("POST"))
        .and(path("/recommend"))
        .and(header("content-type", "application/json"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "Crop": "Maize", "Probability": 0.2 },
            { "Crop": "Rice", "Probability": 0.5 },
            { "Crop": "Cotton", "Probability": 0.3 }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpRecommendationClient::new(mock_server.uri());
    let list = assert_ok!(client.recommend(&kharif_request()).await);

    let ranking = rank(&list);
    let crops: Vec<_> = ranking.entries().iter().map(|e| e.crop.as_str()).collect();
    assert_eq!(crops, vec!["Rice", "Cotton", "Maize"]);
}

#[tokio::test]
async fn test_rainfall_is_sent_when_provided() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/recommend"))
        .and(body_json(serde_json::json!({
            "Crop_Year": 2024,
            "Season": "Kharif",
            "State": "Punjab",
            "Area": 10.0,
            "Fertilizer": 50.0,
            "Pesticide": 5.0,
            "Annual_Rainfall": 500.0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let form = kharif_form().with(FormField::AnnualRainfall, "500");
    let request = validate(&form).unwrap();

    let client = HttpRecommendationClient::new(mock_server.uri());
    let list = assert_ok!(client.recommend(&request).await);
    assert_eq!(rank(&list), Ranking::Empty);
}

#[tokio::test]
async fn test_base_url_with_trailing_slash() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpRecommendationClient::new(format!("{}/", mock_server.uri()));
    assert_ok!(client.recommend(&kharif_request()).await);
}

// ============================================================================
// Failure Paths
// ============================================================================

#[tokio::test]
async fn test_server_error_message_is_surfaced() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Model file missing"))
        .mount(&mock_server)
        .await;

    let client = HttpRecommendationClient::new(mock_server.uri());
    let err = assert_err!(client.recommend(&kharif_request()).await);

    assert_eq!(
        err,
        RequestError::Api {
            status: 500,
            message: "Model file missing".to_string(),
        }
    );
    assert_eq!(err.message(), "Model file missing");
}

#[tokio::test]
async fn test_unprocessable_entity() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(422).set_body_string(r#"{"detail":"bad Season"}"#))
        .mount(&mock_server)
        .await;

    let client = HttpRecommendationClient::new(mock_server.uri());
    let result = client.recommend(&kharif_request()).await;

    assert!(matches!(result, Err(RequestError::Api { status: 422, .. })));
}

#[tokio::test]
async fn test_empty_error_body_falls_back_to_reason() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = HttpRecommendationClient::new(mock_server.uri());
    let err = assert_err!(client.recommend(&kharif_request()).await);
    assert_eq!(err.message(), "Service Unavailable");
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = HttpRecommendationClient::new(mock_server.uri());
    let result = client.recommend(&kharif_request()).await;

    assert!(matches!(result, Err(RequestError::Parse(_))));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // Grab a free port, then release it so nothing is listening
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };

    let client = HttpRecommendationClient::new(uri);
    let result = client.recommend(&kharif_request()).await;

    assert!(matches!(result, Err(RequestError::Network(_))));
}

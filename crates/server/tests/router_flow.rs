use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use migration::MigratorTrait;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn app() -> anyhow::Result<Router> {
    let db = models::db::connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(server::startup::build_app(db))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&v)?)
        }
        None => Body::empty(),
    };
    let res = app.clone().oneshot(req.body(body)?).await?;
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

fn plan(name: &str, premium: f64, deductible: f64, oop: f64) -> Value {
    json!({ "planName": name, "monthlyPremium": premium, "deductible": deductible, "outOfPocketMax": oop })
}

#[tokio::test]
async fn health_reports_ok() -> anyhow::Result<()> {
    let app = app().await?;
    let (status, body) = send(&app, Method::GET, "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
    Ok(())
}

#[tokio::test]
async fn plan_lifecycle_through_the_router() -> anyhow::Result<()> {
    let app = app().await?;

    let (status, created) = send(&app, Method::POST, "/api/insurance-plans", Some(plan("Silver", 300.0, 2000.0, 7000.0))).await?;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/insurance-plans/{id}"),
        Some(plan("Silver Plus", 320.5, 1800.0, 6500.0)),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id);
    assert_eq!(updated["planName"], "Silver Plus");
    assert_eq!(updated["monthlyPremium"], 320.5);

    let (status, body) = send(&app, Method::DELETE, &format!("/api/insurance-plans/{id}"), None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, Method::DELETE, &format!("/api/insurance-plans/{id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], format!("Insurance Plan not found with id: {id}"));
    Ok(())
}

#[tokio::test]
async fn update_of_missing_plan_is_not_found() -> anyhow::Result<()> {
    let app = app().await?;
    let (status, body) = send(&app, Method::PUT, "/api/insurance-plans/42", Some(plan("Ghost", 1.0, 1.0, 1.0))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
    let (_, list) = send(&app, Method::GET, "/api/insurance-plans", None).await?;
    assert_eq!(list, json!([]));
    Ok(())
}

#[tokio::test]
async fn plan_queries_select_lookups() -> anyhow::Result<()> {
    let app = app().await?;
    for p in [
        plan("Bronze", 150.0, 5000.0, 8000.0),
        plan("Silver", 300.0, 2000.0, 7000.0),
        plan("Gold", 450.0, 1000.0, 5000.0),
    ] {
        let (status, _) = send(&app, Method::POST, "/api/insurance-plans", Some(p)).await?;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, Method::GET, "/api/insurance-plans?planName=Gold", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["planName"], "Gold");

    let (_, body) = send(&app, Method::GET, "/api/insurance-plans?maxPremium=300", None).await?;
    let names: Vec<&str> = body.as_array().unwrap().iter().filter_map(|p| p["planName"].as_str()).collect();
    assert_eq!(names, vec!["Bronze"]);

    let (_, body) = send(&app, Method::GET, "/api/insurance-plans?minDeductible=1000&maxDeductible=2000", None).await?;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = send(&app, Method::GET, "/api/insurance-plans?planName=Gold&maxPremium=10", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Bad request");

    let (status, _) = send(&app, Method::GET, "/api/insurance-plans?minDeductible=1000", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::GET, "/api/insurance-plans?maxPremium=cheap", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn invalid_plan_payloads_are_bad_requests() -> anyhow::Result<()> {
    let app = app().await?;

    let (status, body) = send(&app, Method::POST, "/api/insurance-plans", Some(plan("Negative", -1.0, 0.0, 0.0))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"].as_str().unwrap().contains("monthlyPremium"));

    let (status, _) = send(&app, Method::POST, "/api/insurance-plans", Some(plan("Precise", 1.005, 0.0, 0.0))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::POST, "/api/insurance-plans", Some(json!({ "planName": "Missing" }))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::POST, "/api/insurance-plans", Some(plan(&"x".repeat(101), 1.0, 1.0, 1.0))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = send(&app, Method::GET, "/api/insurance-plans", None).await?;
    assert_eq!(list, json!([]));
    Ok(())
}

#[tokio::test]
async fn service_type_queries_and_validation() -> anyhow::Result<()> {
    let app = app().await?;
    for body in [
        json!({ "serviceName": "MRI Scan", "description": "Imaging", "category": "DIAGNOSTIC" }),
        json!({ "serviceName": "CT Scan", "category": "DIAGNOSTIC" }),
        json!({ "serviceName": "Flu Shot", "category": "PREVENTIVE" }),
        json!({ "serviceName": "Walk-in" }),
    ] {
        let (status, _) = send(&app, Method::POST, "/api/service-types", Some(body)).await?;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = send(&app, Method::GET, "/api/service-types?category=DIAGNOSTIC", None).await?;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = send(&app, Method::GET, "/api/service-types?q=scan", None).await?;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = send(&app, Method::GET, "/api/service-types?serviceName=Walk-in", None).await?;
    assert_eq!(body[0]["category"], Value::Null);

    let (status, _) = send(&app, Method::GET, "/api/service-types?category=COSMETIC", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::GET, "/api/service-types?q=scan&category=DIAGNOSTIC", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/service-types",
        Some(json!({ "serviceName": "Long", "description": "d".repeat(501) })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"].as_str().unwrap().contains("description"));
    Ok(())
}

#[tokio::test]
async fn openapi_document_is_served() -> anyhow::Result<()> {
    let app = app().await?;
    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/insurance-plans/{id}"].is_object());
    assert!(body["paths"]["/api/service-types"].is_object());
    Ok(())
}

#[tokio::test]
async fn ids_beyond_32_bits_are_not_found() -> anyhow::Result<()> {
    let app = app().await?;
    let id = 3_000_000_000_i64;

    for (uri, kind) in [
        (format!("/api/insurance-plans/{id}"), "Insurance Plan"),
        (format!("/api/service-types/{id}"), "Service Type"),
    ] {
        let expected = format!("{kind} not found with id: {id}");

        let (status, body) = send(&app, Method::GET, &uri, None).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], expected);

        let (status, body) = send(&app, Method::DELETE, &uri, None).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], expected);
    }

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/insurance-plans/{id}"),
        Some(plan("Gold", 450.0, 1000.0, 5000.0)),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], format!("Insurance Plan not found with id: {id}"));

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/api/service-types/{id}"),
        Some(json!({ "serviceName": "MRI Scan" })),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

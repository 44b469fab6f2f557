use crate::util::json_body;

use super::*;

#[tokio::test]
/// Expect a JSON 404 naming the method and path
async fn unknown_route_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let response = send(&test, get("/api/nope")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error"], "Not Found - GET /api/nope");

    Ok(())
}

#[tokio::test]
/// Expect the generated OpenAPI document to be served
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let response = send(&test, get("/api/docs/openapi.json")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let document = json_body(response).await;
    assert_eq!(document["info"]["title"], "Bubble");
    assert!(document["components"]["securitySchemes"]["bearerAuth"].is_object());

    Ok(())
}

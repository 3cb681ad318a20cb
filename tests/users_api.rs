//! End-to-end behaviour of the assembled application.
//!
//! Runs the production app factory against the in-memory repository and
//! walks the full user lifecycle: create, read (by id, name, and mail),
//! rename, delete, count.

use actix_web::http::{StatusCode, header};
use actix_web::{test as actix_test, web};
use serde_json::{Value, json};

use user_registry::inbound::http::health::HealthState;
use user_registry::inbound::http::state::HttpState;
use user_registry::server::{build_app, build_repository};

async fn test_app() -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    let repository = build_repository(None).await.expect("repository");
    actix_test::init_service(build_app(
        web::Data::new(HttpState::new(repository)),
        web::Data::new(HealthState::new()),
    ))
    .await
}

async fn body_json(res: actix_web::dev::ServiceResponse) -> Value {
    let body = actix_test::read_body(res).await;
    serde_json::from_slice(&body).expect("JSON body")
}

#[actix_web::test]
async fn user_lifecycle_end_to_end() {
    let app = test_app().await;

    // Create Alice.
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Alice", "mail": "a@x.com" }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(
        res.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("/users/1")
    );
    let created = body_json(res).await;
    assert_eq!(created, json!({ "id": 1, "name": "Alice", "mail": "a@x.com" }));

    // She is immediately readable by id.
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/users/1").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        body_json(res).await,
        json!({ "id": 1, "name": "Alice", "mail": "a@x.com" })
    );

    // And by name and mail.
    for uri in ["/users/name/Alice", "/users/mail/a@x.com"] {
        let res =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        assert_eq!(res.status(), StatusCode::OK, "lookup via {uri}");
    }

    // Rename to Alicia; mail must survive whatever the body claims.
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/users/1")
            .set_json(json!({ "name": "Alicia", "mail": "changed@x.com" }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        body_json(res).await,
        json!({ "id": 1, "name": "Alicia", "mail": "a@x.com" })
    );

    // Count reflects the single live record.
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/users/count")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await, json!(1));

    // Delete her; removal is observable.
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri("/users/1").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/users/1").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/users/count")
            .to_request(),
    )
    .await;
    assert_eq!(body_json(res).await, json!(0));
}

#[actix_web::test]
async fn count_equals_records_not_yet_deleted() {
    let app = test_app().await;

    for (name, mail) in [("Alice", "a@x.com"), ("Bea", "b@x.com"), ("Cal", "c@x.com")] {
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/users")
                .set_json(json!({ "name": name, "mail": mail }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri("/users/2").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/users/count")
            .to_request(),
    )
    .await;
    assert_eq!(body_json(res).await, json!(2));

    // The list projection skips the deleted record and the mail field.
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/users").to_request(),
    )
    .await;
    assert_eq!(
        body_json(res).await,
        json!([{ "id": 1, "name": "Alice" }, { "id": 3, "name": "Cal" }])
    );
}

#[actix_web::test]
async fn error_responses_carry_envelope_and_trace_header() {
    let app = test_app().await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/users/42").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(res.headers().contains_key("trace-id"));

    let value = body_json(res).await;
    assert_eq!(value.get("code").and_then(Value::as_str), Some("not_found"));
    assert!(value.get("message").and_then(Value::as_str).is_some());
}

#[actix_web::test]
async fn post_without_body_is_unprocessable_and_creates_nothing() {
    let app = test_app().await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post().uri("/users").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/users/count")
            .to_request(),
    )
    .await;
    assert_eq!(body_json(res).await, json!(0));
}

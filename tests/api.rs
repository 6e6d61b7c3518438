use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use studydesk::{AppState, Identity, Role, TokenConfig};

const TTL: u64 = 3_600;

fn state() -> AppState {
    AppState::in_memory(
        TokenConfig {
            secret: "test-secret".into(),
            ttl: Duration::from_secs(TTL),
        },
        4,
    )
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

/// Registers a student and opens a session, returning its id and token.
async fn sign_up(app: &Router, name: &str, email: &str) -> (String, String) {
    let (status, user) = send(
        app,
        Method::POST,
        "/users",
        None,
        Some(json!({ "name": name, "email": email, "password": "secret1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{user}");

    let (status, session) = send(
        app,
        Method::POST,
        "/sessions",
        None,
        Some(json!({ "email": email, "password": "secret1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{session}");

    (
        user["id"].as_str().unwrap().to_owned(),
        session["token"].as_str().unwrap().to_owned(),
    )
}

fn admin_token(state: &AppState) -> String {
    let admin = Identity {
        id: Uuid::new_v4(),
        name: "Admin".into(),
        email: "admin@example.com".into(),
        role: Role::Admin,
    };

    state.tokens().issue(&admin).unwrap()
}

fn flashcard() -> Value {
    json!({ "question": "2 + 2?", "answer": "4" })
}

#[tokio::test]
async fn registered_users_can_read_themselves() {
    let app = studydesk::app(state());
    let (id, token) = sign_up(&app, "A", "A@X.com").await;

    let (status, body) = send(&app, Method::GET, "/users/me", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": id, "name": "A", "email": "a@x.com", "role": "student" })
    );
    assert!(body.get("passwordHash").is_none());

    let (status, by_id) = send(&app, Method::GET, &format!("/users/{id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_id, body);
}

#[tokio::test]
async fn sessions_reject_bad_credentials() {
    let app = studydesk::app(state());
    sign_up(&app, "A", "a@x.com").await;

    for credentials in [
        json!({ "email": "a@x.com", "password": "wrong-password" }),
        json!({ "email": "nobody@x.com", "password": "secret1" }),
    ] {
        let (status, body) = send(&app, Method::POST, "/sessions", None, Some(credentials)).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "error": "Credenciais inválidas." }));
    }
}

#[tokio::test]
async fn emails_are_unique_ignoring_case() {
    let app = studydesk::app(state());
    sign_up(&app, "A", "a@x.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        None,
        Some(json!({ "name": "B", "email": "A@X.COM", "password": "secret1" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({ "error": "E-mail já cadastrado." }));
}

#[tokio::test]
async fn email_changes_cannot_take_another_users_address() {
    let app = studydesk::app(state());
    sign_up(&app, "A", "a@x.com").await;
    let (_, token) = sign_up(&app, "B", "b@x.com").await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/users/me",
        Some(&token),
        Some(json!({ "email": "a@x.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/users/me",
        Some(&token),
        Some(json!({ "name": "Bee" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Bee");
    assert_eq!(body["email"], "b@x.com");
}

#[tokio::test]
async fn users_are_private_to_themselves_and_admins() {
    let state = state();
    let app = studydesk::app(state.clone());
    let (alice, _) = sign_up(&app, "A", "a@x.com").await;
    let (_, bob) = sign_up(&app, "B", "b@x.com").await;
    let uri = format!("/users/{alice}");

    let (status, body) = send(&app, Method::GET, &uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Usuário não encontrado." }));

    let (status, _) = send(
        &app,
        Method::PUT,
        &uri,
        Some(&bob),
        Some(json!({ "name": "Mallory" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::GET, &uri, Some(&admin_token(&state)), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "A");
}

#[tokio::test]
async fn password_changes_require_the_current_password() {
    let app = studydesk::app(state());
    let (id, token) = sign_up(&app, "A", "a@x.com").await;
    let uri = format!("/users/{id}/password");

    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(&token),
        Some(json!({ "currentPassword": "not-it", "newPassword": "another1" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Senha atual incorreta." }));

    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(&token),
        Some(json!({ "currentPassword": "secret1", "newPassword": "short" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "newPassword must be at least 6 characters long" })
    );

    let (status, _) = send(
        &app,
        Method::PUT,
        &uri,
        Some(&token),
        Some(json!({ "currentPassword": "secret1", "newPassword": "another1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        Method::POST,
        "/sessions",
        None,
        Some(json!({ "email": "a@x.com", "password": "another1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn private_routes_reject_missing_and_bad_credentials() {
    let state = state();
    let app = studydesk::app(state.clone());

    let student = Identity {
        id: Uuid::new_v4(),
        name: "A".into(),
        email: "a@x.com".into(),
        role: Role::Student,
    };
    let expired = state.tokens().issue_at(&student, 0).unwrap();

    let request = |authorization: Option<String>| {
        let mut request = Request::builder().uri("/flashcards");
        if let Some(value) = authorization {
            request = request.header(header::AUTHORIZATION, value);
        }
        request.body(Body::empty()).unwrap()
    };

    let cases = [
        (None, "Token não enviado."),
        (Some("Token abc".to_owned()), "Token mal formatado."),
        (Some("Bearer".to_owned()), "Token mal formatado."),
        (Some("Bearer not.a.token".to_owned()), "Token inválido."),
        (Some(format!("Bearer {expired}")), "Token expirado."),
    ];

    for (authorization, message) in cases {
        let response = app.clone().oneshot(request(authorization)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": message }));
    }
}

#[tokio::test]
async fn credentials_are_checked_before_the_payload() {
    let app = studydesk::app(state());

    let (status, body) = send(
        &app,
        Method::POST,
        "/flashcards",
        None,
        Some(json!({ "question": "no answer" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Token não enviado." }));
}

#[tokio::test]
async fn payloads_are_validated_against_their_schema() {
    let app = studydesk::app(state());
    let (_, token) = sign_up(&app, "A", "a@x.com").await;

    let cases = [
        (json!({ "question": "no answer" }), "answer is required"),
        (
            json!({ "question": "q", "answer": "a", "owner": "me" }),
            "field 'owner' is not allowed",
        ),
        (
            json!({ "question": "q", "answer": "a", "difficulty": "extreme" }),
            "difficulty must be one of: easy, medium, hard",
        ),
        (json!([]), "request body must be an object"),
    ];

    for (payload, message) in cases {
        let (status, body) = send(&app, Method::POST, "/flashcards", Some(&token), Some(payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": message }));
    }

    let request = Request::builder()
        .method(Method::POST)
        .uri("/flashcards")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn flashcards_round_trip_for_their_owner() {
    let app = studydesk::app(state());
    let (id, token) = sign_up(&app, "A", "a@x.com").await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/flashcards",
        Some(&token),
        Some(json!({ "question": "2 + 2?", "answer": "4", "tags": ["math"], "difficulty": "easy" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["userId"], id.as_str());
    assert_eq!(created["tags"], json!(["math"]));

    let uri = format!("/flashcards/{}", created["id"].as_str().unwrap());

    let (_, first) = send(&app, Method::GET, &uri, Some(&token), None).await;
    let (_, second) = send(&app, Method::GET, &uri, Some(&token), None).await;
    assert_eq!(first, created);
    assert_eq!(first, second);

    let (status, updated) = send(
        &app,
        Method::PUT,
        &uri,
        Some(&token),
        Some(json!({ "answer": "four" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["answer"], "four");
    assert_eq!(updated["question"], "2 + 2?");

    let (status, list) = send(&app, Method::GET, "/flashcards", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().map(Vec::len), Some(1));

    let (status, body) = send(&app, Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Flashcard removido com sucesso." }));

    let (status, body) = send(&app, Method::GET, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Flashcard não encontrado." }));
}

#[tokio::test]
async fn flashcard_deletion_is_forbidden_to_other_students_but_open_to_admins() {
    let state = state();
    let app = studydesk::app(state.clone());
    let (_, owner) = sign_up(&app, "A", "a@x.com").await;
    let (_, intruder) = sign_up(&app, "B", "b@x.com").await;

    let (_, created) = send(&app, Method::POST, "/flashcards", Some(&owner), Some(flashcard())).await;
    let uri = format!("/flashcards/{}", created["id"].as_str().unwrap());

    let (status, _) = send(&app, Method::GET, &uri, Some(&intruder), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::DELETE, &uri, Some(&intruder), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({ "error": "Acesso negado." }));

    let (status, _) = send(&app, Method::DELETE, &uri, Some(&admin_token(&state)), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::GET, &uri, Some(&owner), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn bulk_flashcards_report_every_problem() {
    let app = studydesk::app(state());
    let (_, token) = sign_up(&app, "A", "a@x.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/flashcards/bulk",
        Some(&token),
        Some(json!({ "flashcards": [
            { "question": "only a question" },
            { "answer": "only an answer", "color": "red" },
        ] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = body["error"].as_str().unwrap();
    for message in [
        "flashcards[0] field 'answer' is required",
        "flashcards[1] field 'color' is not allowed",
        "flashcards[1] field 'question' is required",
    ] {
        assert!(error.contains(message), "{error}");
    }

    let (_, list) = send(&app, Method::GET, "/flashcards", Some(&token), None).await;
    assert_eq!(list, json!([]));

    let (status, created) = send(
        &app,
        Method::POST,
        "/flashcards/bulk",
        Some(&token),
        Some(json!({ "flashcards": [flashcard(), { "question": "3 + 3?", "answer": "6" }] })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created[0]["question"], "2 + 2?");
    assert_eq!(created[1]["question"], "3 + 3?");
}

#[tokio::test]
async fn chronograms_are_invisible_to_other_users() {
    let app = studydesk::app(state());
    let (_, owner) = sign_up(&app, "A", "a@x.com").await;
    let (_, intruder) = sign_up(&app, "B", "b@x.com").await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/chronograms",
        Some(&owner),
        Some(json!({
            "title": "Finals",
            "startDate": "2024-05-01",
            "endDate": "2024-06-01",
            "activities": [{ "name": "Review", "date": "2024-05-02" }],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["activities"][0]["done"], false);

    let uri = format!("/chronograms/{}", created["id"].as_str().unwrap());

    let (status, body) = send(&app, Method::DELETE, &uri, Some(&intruder), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Cronograma não encontrado." }));

    let (_, list) = send(&app, Method::GET, "/chronograms", Some(&intruder), None).await;
    assert_eq!(list, json!([]));

    let (status, body) = send(
        &app,
        Method::POST,
        "/chronograms",
        Some(&owner),
        Some(json!({
            "title": "Finals",
            "startDate": "2024-05-01",
            "endDate": "2024-06-01",
            "activities": [{ "name": "Review", "date": "tomorrow" }],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "activities[0] field 'date' must be a valid ISO 8601 date" })
    );

    let (status, _) = send(&app, Method::DELETE, &uri, Some(&owner), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn study_modules_default_to_not_started() {
    let app = studydesk::app(state());
    let (_, token) = sign_up(&app, "A", "a@x.com").await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/studyModules",
        Some(&token),
        Some(json!({
            "title": "Cells",
            "resources": [{ "title": "Notes", "url": "https://example.com/cells" }],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "not_started");

    let uri = format!("/studyModules/{}", created["id"].as_str().unwrap());
    let (status, updated) = send(
        &app,
        Method::PUT,
        &uri,
        Some(&token),
        Some(json!({ "status": "in_progress" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "in_progress");
    assert_eq!(updated["resources"], created["resources"]);
}

#[tokio::test]
async fn only_admins_manage_notices() {
    let state = state();
    let app = studydesk::app(state.clone());
    let (_, student) = sign_up(&app, "A", "a@x.com").await;
    let admin = admin_token(&state);
    let notice = json!({ "title": "Closed", "content": "No classes on Friday" });

    let (status, body) = send(&app, Method::POST, "/notices", Some(&student), Some(notice.clone())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({ "error": "Acesso negado." }));

    let (status, created) = send(&app, Method::POST, "/notices", Some(&admin), Some(notice)).await;
    assert_eq!(status, StatusCode::CREATED);

    let uri = format!("/notices/{}", created["id"].as_str().unwrap());

    let (status, read) = send(&app, Method::GET, &uri, Some(&student), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(read, created);

    let (_, list) = send(&app, Method::GET, "/notices", Some(&student), None).await;
    assert_eq!(list, json!([created]));

    let (status, _) = send(&app, Method::DELETE, &uri, Some(&student), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        Method::PUT,
        &uri,
        Some(&admin),
        Some(json!({ "content": "Classes resume Monday" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::DELETE, &uri, Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn unknown_ids_and_routes_are_not_found() {
    let app = studydesk::app(state());
    let (_, token) = sign_up(&app, "A", "a@x.com").await;

    let (status, body) = send(&app, Method::GET, "/flashcards/not-an-id", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Flashcard não encontrado." }));

    let (status, body) = send(&app, Method::GET, "/nowhere", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Rota não encontrada." }));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_sign_ups_register_an_email_once() {
    let app = studydesk::app(state());

    let attempts: Vec<_> = (0..8)
        .map(|index| {
            let app = app.clone();
            tokio::spawn(async move {
                send(
                    &app,
                    Method::POST,
                    "/users",
                    None,
                    Some(json!({
                        "name": format!("User {index}"),
                        "email": "dup@x.com",
                        "password": "secret1",
                    })),
                )
                .await
                .0
            })
        })
        .collect();

    let mut statuses = Vec::new();
    for attempt in attempts {
        statuses.push(attempt.await.unwrap());
    }

    let created = statuses
        .iter()
        .filter(|status| **status == StatusCode::CREATED)
        .count();
    assert_eq!(created, 1, "{statuses:?}");
    assert!(
        statuses
            .iter()
            .all(|status| *status == StatusCode::CREATED || *status == StatusCode::CONFLICT),
        "{statuses:?}"
    );
}

#[tokio::test]
async fn owned_documents_cannot_be_changed_by_other_users() {
    let app = studydesk::app(state());
    let (_, owner) = sign_up(&app, "A", "a@x.com").await;
    let (_, intruder) = sign_up(&app, "B", "b@x.com").await;

    let cases = [
        ("/flashcards", flashcard(), json!({ "answer": "five" }), "Flashcard não encontrado."),
        (
            "/chronograms",
            json!({ "title": "Finals", "startDate": "2024-05-01", "endDate": "2024-06-01" }),
            json!({ "title": "Hijacked" }),
            "Cronograma não encontrado.",
        ),
        (
            "/studyModules",
            json!({ "title": "Cells" }),
            json!({ "status": "completed" }),
            "Módulo de estudo não encontrado.",
        ),
    ];

    for (collection, payload, changes, missing) in cases {
        let (status, created) = send(&app, Method::POST, collection, Some(&owner), Some(payload)).await;
        assert_eq!(status, StatusCode::CREATED, "{collection}");

        let uri = format!("{collection}/{}", created["id"].as_str().unwrap());

        let (status, body) = send(&app, Method::PUT, &uri, Some(&intruder), Some(changes)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, json!({ "error": missing }));

        let (_, unchanged) = send(&app, Method::GET, &uri, Some(&owner), None).await;
        assert_eq!(unchanged, created, "{uri}");
    }

    let (_, module) = send(
        &app,
        Method::POST,
        "/studyModules",
        Some(&owner),
        Some(json!({ "title": "Genetics" })),
    )
    .await;
    let uri = format!("/studyModules/{}", module["id"].as_str().unwrap());

    let (status, body) = send(&app, Method::DELETE, &uri, Some(&intruder), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Módulo de estudo não encontrado." }));

    let (status, _) = send(&app, Method::GET, &uri, Some(&owner), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn admins_only_edit_their_own_notices() {
    let state = state();
    let app = studydesk::app(state.clone());
    let author = admin_token(&state);
    let other_admin = admin_token(&state);

    let (_, created) = send(
        &app,
        Method::POST,
        "/notices",
        Some(&author),
        Some(json!({ "title": "Closed", "content": "No classes on Friday" })),
    )
    .await;
    let uri = format!("/notices/{}", created["id"].as_str().unwrap());

    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(&other_admin),
        Some(json!({ "title": "Open" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Aviso não encontrado." }));

    let (status, _) = send(&app, Method::DELETE, &uri, Some(&other_admin), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, unchanged) = send(&app, Method::GET, &uri, Some(&other_admin), None).await;
    assert_eq!(unchanged, created);
}

#[tokio::test]
async fn users_cannot_change_another_users_profile_or_password() {
    let app = studydesk::app(state());
    let (alice, _) = sign_up(&app, "A", "a@x.com").await;
    let (_, bob) = sign_up(&app, "B", "b@x.com").await;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/users/{alice}"),
        Some(&bob),
        Some(json!({ "email": "mallory@x.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Usuário não encontrado." }));

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/users/{alice}/password"),
        Some(&bob),
        Some(json!({ "currentPassword": "secret1", "newPassword": "taken-over" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Usuário não encontrado." }));

    let (status, _) = send(
        &app,
        Method::POST,
        "/sessions",
        None,
        Some(json!({ "email": "a@x.com", "password": "secret1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn bodies_without_a_json_content_type_are_named_as_such() {
    let app = studydesk::app(state());
    let (_, token) = sign_up(&app, "A", "a@x.com").await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/flashcards")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(flashcard().to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        body,
        json!({ "error": "request body must be sent as application/json" })
    );
}

#[tokio::test]
async fn the_bearer_scheme_is_case_insensitive() {
    let app = studydesk::app(state());
    let (_, token) = sign_up(&app, "A", "a@x.com").await;

    let request = Request::builder()
        .uri("/users/me")
        .header(header::AUTHORIZATION, format!("bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

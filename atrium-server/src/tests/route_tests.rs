//! End-to-end behavior of the public and admin route surface against the
//! seeded in-memory store.

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use serde_json::{json, Value};

use atrium_core::{DocumentStore as _, Query};

use crate::tests::test_utils::{login, spawn_app};

// A 1x1 transparent PNG is plenty for upload plumbing.
const PNG_BYTES: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D,
    0x49, 0x48, 0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01,
    0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4, 0x89, 0x00, 0x00, 0x00,
    0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00,
    0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

#[tokio::test]
async fn public_programs_list_is_active_only_with_page_shape() {
    let app = spawn_app().await;
    let token = login(&app).await;

    // Add an inactive program through the admin surface.
    app.server
        .post("/api/admin/programs")
        .authorization_bearer(&token)
        .json(&json!({
            "title": "Legacy Program - Retired University",
            "description": "No longer offered to students.",
            "partnerUniversity": "Retired University",
            "duration": "1 Semester",
            "eligibility": "N/A",
            "deadline": "N/A",
            "applicationLink": "https://example.com/apply",
            "status": "Inactive"
        }))
        .await
        .assert_status_ok();

    let public: Value = app.server.get("/api/programs").await.json();
    assert_eq!(public["total"], json!(3));
    assert_eq!(public["page"], json!(1));
    assert_eq!(public["pageSize"], json!(50));
    assert_eq!(public["totalPages"], json!(1));
    assert_eq!(public["items"].as_array().unwrap().len(), 3);

    let admin: Value = app
        .server
        .get("/api/admin/programs")
        .authorization_bearer(&token)
        .await
        .json();
    assert_eq!(admin["total"], json!(4));
}

#[tokio::test]
async fn pagination_windows_add_up() {
    let app = spawn_app().await;
    let token = login(&app).await;
    for i in 0..12 {
        app.server
            .post("/api/admin/news")
            .authorization_bearer(&token)
            .json(&json!({
                "title": format!("Bulletin {i}"),
                "content": "A bulletin body long enough to validate.",
                "category": "Announcement",
                "date": format!("2025-02-{:02}T00:00:00Z", i + 1)
            }))
            .await
            .assert_status_ok();
    }
    // 3 seeded news + 12 created.
    let page: Value = app
        .server
        .get("/api/news")
        .add_query_param("page", "2")
        .add_query_param("page_size", "5")
        .await
        .json();
    assert_eq!(page["total"], json!(15));
    assert_eq!(page["totalPages"], json!(3));
    assert_eq!(page["items"].as_array().unwrap().len(), 5);

    let last: Value = app
        .server
        .get("/api/news")
        .add_query_param("page", "3")
        .add_query_param("page_size", "7")
        .await
        .json();
    assert_eq!(last["totalPages"], json!(3));
    assert_eq!(last["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn create_then_read_round_trips() {
    let app = spawn_app().await;
    let token = login(&app).await;
    let created: Value = app
        .server
        .post("/api/admin/events")
        .authorization_bearer(&token)
        .json(&json!({
            "title": "Delegation from Kyoto University",
            "type": "Delegation",
            "description": "Two-day academic delegation visit.",
            "startDate": "2026-09-10T09:00:00Z",
            "venue": "Main Campus"
        }))
        .await
        .json();
    let id = created["id"].as_str().unwrap();
    assert!(created["createdAt"].is_string());
    assert!(created["updatedAt"].is_string());
    assert!(created["_id"].is_string());

    let fetched: Value =
        app.server.get(&format!("/api/events/{id}")).await.json();
    assert_eq!(fetched["title"], created["title"]);
    assert_eq!(fetched["venue"], json!("Main Campus"));

    app.server
        .get("/api/events/no-such-event")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn news_update_drops_empty_strings_but_applies_false() {
    let app = spawn_app().await;
    let token = login(&app).await;
    let created: Value = app
        .server
        .post("/api/admin/news")
        .authorization_bearer(&token)
        .json(&json!({
            "title": "Faculty Exchange with Tokyo University",
            "content": "A three-month research fellowship completed.",
            "category": "Achievement",
            "author": "OIA Team",
            "featured": true
        }))
        .await
        .json();
    let id = created["id"].as_str().unwrap();

    let updated: Value = app
        .server
        .put(&format!("/api/admin/news/{id}"))
        .authorization_bearer(&token)
        .json(&json!({"author": "", "featured": false}))
        .await
        .json();
    // Empty string dropped by the refined policy; false still applied.
    assert_eq!(updated["author"], json!("OIA Team"));
    assert_eq!(updated["featured"], json!(false));
}

#[tokio::test]
async fn program_update_keeps_empty_strings_under_default_policy() {
    let app = spawn_app().await;
    let token = login(&app).await;
    let programs: Value = app.server.get("/api/programs").await.json();
    let id = programs["items"][0]["id"].as_str().unwrap();

    let updated: Value = app
        .server
        .put(&format!("/api/admin/programs/{id}"))
        .authorization_bearer(&token)
        .json(&json!({"image": ""}))
        .await
        .json();
    assert_eq!(updated["image"], json!(""));

    app.server
        .put("/api/admin/programs/no-such-program")
        .authorization_bearer(&token)
        .json(&json!({"deadline": "June 2026"}))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_reports_not_found_after_first_success() {
    let app = spawn_app().await;
    let token = login(&app).await;
    let programs: Value = app.server.get("/api/programs").await.json();
    let id = programs["items"][0]["id"].as_str().unwrap().to_string();

    app.server
        .delete(&format!("/api/admin/programs/{id}"))
        .authorization_bearer(&token)
        .await
        .assert_status_ok();
    app.server
        .delete(&format!("/api/admin/programs/{id}"))
        .authorization_bearer(&token)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_finds_seeded_program_and_validates_query() {
    let app = spawn_app().await;

    let found: Value = app
        .server
        .get("/api/search")
        .add_query_param("q", "zurich")
        .await
        .json();
    assert_eq!(found["total"], json!(1));
    let hit = &found["results"][0];
    assert_eq!(hit["type"], json!("program"));
    let url = hit["url"].as_str().unwrap();
    let id = hit["id"].as_str().unwrap();
    assert!(url.ends_with(id));

    let none: Value = app
        .server
        .get("/api/search")
        .add_query_param("q", "xyzzynomatch")
        .await
        .json();
    assert_eq!(none["results"], json!([]));
    assert_eq!(none["total"], json!(0));

    app.server
        .get("/api/search")
        .add_query_param("q", "z")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn contact_statuses_normalize_on_read_without_rewriting_storage() {
    let app = spawn_app().await;
    let token = login(&app).await;

    // Legacy documents written before status canonicalization.
    for status in [Some("read"), Some("replied"), None] {
        let mut doc = json!({
            "id": format!("legacy-{}", status.unwrap_or("missing")),
            "firstName": "Asha",
            "lastName": "Patel",
            "email": "asha@example.edu",
            "subject": "Exchange question",
            "message": "How do I apply for the spring cohort?",
            "formType": "Enquiry",
            "createdAt": "2024-05-01T00:00:00Z"
        });
        if let Some(status) = status {
            doc["status"] = json!(status);
        }
        app.state
            .store
            .insert("contacts", doc.as_object().unwrap().clone())
            .await
            .unwrap();
    }

    let contacts: Value = app
        .server
        .get("/api/admin/contacts")
        .authorization_bearer(&token)
        .await
        .json();
    let statuses: Vec<&str> = contacts
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["status"].as_str().unwrap())
        .collect();
    assert!(statuses.contains(&"Read"));
    assert!(statuses.contains(&"Replied"));
    assert!(statuses.contains(&"New"));

    // The stored value stays legacy-cased; normalization is a read view.
    let stored = app
        .state
        .store
        .find_one("contacts", &Query::new().eq("id", "legacy-read"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.get("status"), Some(&json!("read")));
}

#[tokio::test]
async fn contact_intake_and_triage() {
    let app = spawn_app().await;
    let token = login(&app).await;

    app.server
        .post("/api/contact")
        .json(&json!({
            "firstName": "Ben",
            "lastName": "Okafor",
            "email": "ben.okafor@example.org",
            "subject": "Partnership enquiry",
            "message": "We would like to discuss a dual-degree program."
        }))
        .await
        .assert_status_ok();

    let response: Value = app
        .server
        .post("/api/forms/Proposal")
        .json(&json!({
            "firstName": "Lena",
            "lastName": "Maier",
            "email": "lena.maier@example.org",
            "subject": "Joint research proposal",
            "message": "Proposal for a joint robotics research center."
        }))
        .await
        .json();
    assert!(response["message"]
        .as_str()
        .unwrap()
        .starts_with("Your proposal has been submitted"));

    let proposals: Value = app
        .server
        .get("/api/admin/contacts")
        .authorization_bearer(&token)
        .add_query_param("form_type", "Proposal")
        .await
        .json();
    let proposals = proposals.as_array().unwrap();
    assert_eq!(proposals.len(), 1);
    assert_eq!(proposals[0]["status"], json!("New"));
    let id = proposals[0]["id"].as_str().unwrap();

    app.server
        .put(&format!("/api/admin/contacts/{id}/read"))
        .authorization_bearer(&token)
        .await
        .assert_status_ok();
    // Marking an already-Read contact modifies nothing and reports 404,
    // matching the modified-count contract.
    app.server
        .put(&format!("/api/admin/contacts/{id}/read"))
        .authorization_bearer(&token)
        .await
        .assert_status(StatusCode::NOT_FOUND);

    app.server
        .delete(&format!("/api/admin/contacts/{id}"))
        .authorization_bearer(&token)
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn gallery_upload_update_and_type_rejection() {
    let app = spawn_app().await;
    let token = login(&app).await;

    let rejected = app
        .server
        .post("/api/admin/gallery")
        .authorization_bearer(&token)
        .multipart(
            MultipartForm::new()
                .add_text("title", "Not an image")
                .add_text("category", "Campus")
                .add_part(
                    "file",
                    Part::bytes(b"%PDF-1.4".to_vec())
                        .file_name("doc.pdf")
                        .mime_type("application/pdf"),
                ),
        )
        .await;
    rejected.assert_status(StatusCode::BAD_REQUEST);

    let created: Value = app
        .server
        .post("/api/admin/gallery")
        .authorization_bearer(&token)
        .multipart(
            MultipartForm::new()
                .add_text("title", "Convocation 2025")
                .add_text("category", "Events")
                .add_part(
                    "file",
                    Part::bytes(PNG_BYTES.to_vec())
                        .file_name("convocation.png")
                        .mime_type("image/png"),
                ),
        )
        .await
        .json();
    let id = created["id"].as_str().unwrap();
    let image = created["image"].as_str().unwrap();
    assert!(image.starts_with("/gallery/"));
    assert!(created["uploadDate"].is_string());
    assert!(created.get("updatedAt").is_none());
    assert!(app
        .uploads_dir
        .path()
        .join(image.trim_start_matches('/'))
        .exists());

    // An update that changes nothing still returns the record.
    let unchanged: Value = app
        .server
        .put(&format!("/api/admin/gallery/{id}"))
        .authorization_bearer(&token)
        .multipart(MultipartForm::new().add_text("title", "Convocation 2025"))
        .await
        .json();
    assert_eq!(unchanged["id"], json!(id));
    assert_eq!(unchanged["title"], json!("Convocation 2025"));
}

#[tokio::test]
async fn team_photo_clear_removes_file_and_persists_empty_string() {
    let app = spawn_app().await;
    let token = login(&app).await;

    let created: Value = app
        .server
        .post("/api/admin/team")
        .authorization_bearer(&token)
        .multipart(
            MultipartForm::new()
                .add_text("name", "Dr. Meera Nair")
                .add_text("role", "Coordinator, Faculty Mobility")
                .add_text(
                    "bio",
                    "Coordinates faculty exchange and research visits.",
                )
                .add_text("order", "7")
                .add_part(
                    "file",
                    Part::bytes(PNG_BYTES.to_vec())
                        .file_name("meera.png")
                        .mime_type("image/png"),
                ),
        )
        .await
        .json();
    let id = created["id"].as_str().unwrap();
    let image = created["image"].as_str().unwrap().to_string();
    let stored_file = app
        .uploads_dir
        .path()
        .join(image.trim_start_matches('/'));
    assert!(stored_file.exists());

    // Empty image_url on the form transport means "remove the photo".
    let updated: Value = app
        .server
        .put(&format!("/api/admin/team/{id}"))
        .authorization_bearer(&token)
        .multipart(MultipartForm::new().add_text("image_url", ""))
        .await
        .json();
    assert_eq!(updated["image"], json!(""));
    assert!(!stored_file.exists());
}

#[tokio::test]
async fn static_content_addressed_by_key() {
    let app = spawn_app().await;
    let token = login(&app).await;

    let content: Value = app
        .server
        .get("/api/static-content/vision_mission")
        .await
        .json();
    assert_eq!(content["section"], json!("about"));

    let updated: Value = app
        .server
        .put("/api/admin/static-content/vision_mission")
        .authorization_bearer(&token)
        .json(&json!({"section": "admissions"}))
        .await
        .json();
    assert_eq!(updated["section"], json!("admissions"));

    app.server
        .get("/api/static-content/no_such_key")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stats_reflect_seeded_collections() {
    let app = spawn_app().await;
    let token = login(&app).await;

    let stats: Value = app.server.get("/api/stats").await.json();
    assert_eq!(stats["totalPrograms"], json!(3));
    assert_eq!(stats["partnerUniversities"], json!(3));
    assert_eq!(stats["studentsExchanged"], json!(150));
    assert_eq!(stats["countries"], json!(12));

    let extended: Value =
        app.server.get("/api/stats/extended").await.json();
    assert_eq!(extended["totalEvents"], json!(3));
    assert_eq!(extended["activePartnerships"], json!(3));
    assert_eq!(extended["newsArticles"], json!(3));
    assert_eq!(extended["teamMembers"], json!(3));
    assert_eq!(extended["internationalStudents"], json!(250));

    let config: Value = app
        .server
        .put("/api/admin/stats-config")
        .authorization_bearer(&token)
        .json(&json!({"studentsExchanged": 420}))
        .await
        .json();
    assert_eq!(config["studentsExchanged"], json!(420));

    let stats: Value = app.server.get("/api/stats").await.json();
    assert_eq!(stats["studentsExchanged"], json!(420));
}

#[tokio::test]
async fn faqs_listed_in_curated_order() {
    let app = spawn_app().await;
    let faqs: Value = app.server.get("/api/faqs").await.json();
    let orders: Vec<i64> = faqs
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["order"].as_i64().unwrap())
        .collect();
    let mut sorted = orders.clone();
    sorted.sort_unstable();
    assert_eq!(orders, sorted);

    let filtered: Value = app
        .server
        .get("/api/faqs")
        .add_query_param("category", "Admissions")
        .await
        .json();
    assert!(filtered
        .as_array()
        .unwrap()
        .iter()
        .all(|f| f["category"] == json!("Admissions")));
}

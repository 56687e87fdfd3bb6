//! Use-case and router tests for the admin crate

#[cfg(test)]
mod support {
    use axum::{Router, middleware, routing::get};
    use board::domain::repository::{DemandRepository, TutorRepository};
    use board::models::{DemandDraft, TutorDraft};
    use board::store::MemoryBoardStore;
    use kernel::id::{DemandPostId, TutorPostId};
    use platform::storage::{BlobStore, StorageError, StorageResult};
    use std::time::Duration;

    use crate::application::config::AdminConfig;
    use crate::domain::session::session_token;
    use crate::presentation::{AdminGateState, admin_gate, admin_router_generic};

    pub const SECRET: &str = "test-secret";

    /// Signs every path except those containing "missing"
    #[derive(Default)]
    pub struct FakeStore;

    impl BlobStore for FakeStore {
        async fn upload(
            &self,
            _bucket: &str,
            _path: &str,
            _bytes: Vec<u8>,
            _content_type: &str,
            _upsert: bool,
        ) -> StorageResult<()> {
            Ok(())
        }

        async fn signed_url(
            &self,
            bucket: &str,
            path: &str,
            expires_in: Duration,
        ) -> StorageResult<String> {
            if path.contains("missing") {
                return Err(StorageError::Rejected {
                    status: http::StatusCode::NOT_FOUND,
                    message: "Object not found".to_string(),
                });
            }
            Ok(format!(
                "https://storage.test/{bucket}/{path}?expires={}",
                expires_in.as_secs()
            ))
        }
    }

    pub fn config() -> AdminConfig {
        AdminConfig {
            account: Some("13800000000".to_string()),
            password: Some("correctpass".to_string()),
            cookie_secure: false,
            ..AdminConfig::default().with_secret_text(Some(SECRET))
        }
    }

    pub fn valid_cookie() -> String {
        format!("admin_session={}", session_token(SECRET.as_bytes(), "admin"))
    }

    /// Admin API nested like the binary does, plus two stand-in pages
    pub fn app(config: AdminConfig, repo: Option<MemoryBoardStore>) -> Router {
        Router::new()
            .nest(
                "/api/admin",
                admin_router_generic(repo, Some(FakeStore), config.clone()),
            )
            .route("/admin", get(|| async { "dashboard" }))
            .route("/admin/login", get(|| async { "login" }))
            .route("/api/board/tutors", get(|| async { "board" }))
            .layer(middleware::from_fn_with_state(
                AdminGateState::new(config),
                admin_gate,
            ))
    }

    pub fn tutor_draft() -> TutorDraft {
        TutorDraft {
            real_name: Some("王五".to_string()),
            university: "中国科学技术大学".to_string(),
            identity: "研究生".to_string(),
            teach_mode: "合肥线下".to_string(),
            regions: vec!["蜀山区".to_string()],
            grades: vec!["初三".to_string()],
            subjects: vec!["物理".to_string(), "初中全科".to_string()],
            min_salary: Some(120),
            max_salary: Some(180),
            auth_files: vec![
                "u7/xinxue_1.png".to_string(),
                "u7/missing_1.png".to_string(),
                "u7/student_id_1.jpg".to_string(),
            ],
            ..TutorDraft::default()
        }
    }

    pub async fn insert_tutor(repo: &MemoryBoardStore) -> TutorPostId {
        let submission = tutor_draft().validate().unwrap();
        TutorRepository::insert(repo, &submission).await.unwrap()
    }

    pub async fn insert_demand(repo: &MemoryBoardStore) -> DemandPostId {
        let submission = DemandDraft {
            teach_mode: "合肥线下".to_string(),
            region: Some("包河区".to_string()),
            detail_address: Some("万达广场".to_string()),
            gender: Some("女".to_string()),
            grades: vec!["小五".to_string()],
            subjects: vec!["英语".to_string()],
            ..DemandDraft::default()
        }
        .validate()
        .unwrap();
        DemandRepository::insert(repo, &submission).await.unwrap()
    }
}

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use board::domain::repository::{DemandRepository, TutorRepository};
    use board::models::{DemandPatch, ListingStatus, TutorPatch};
    use board::store::MemoryBoardStore;
    use kernel::id::TutorPostId;

    use super::support::*;
    use crate::application::{
        AdminConfig, ManageDemandsUseCase, ManageTutorsUseCase, ModerateTutorUseCase,
        PendingReviewUseCase,
    };
    use crate::domain::moderation::ModerationAction;
    use crate::error::AdminError;

    #[tokio::test]
    async fn test_concurrent_approvals_exactly_one_wins() {
        let repo = Arc::new(MemoryBoardStore::new());
        let id = insert_tutor(&repo).await;

        let first = ModerateTutorUseCase::new(repo.clone());
        let second = ModerateTutorUseCase::new(repo.clone());
        let (a, b) = tokio::join!(
            first.execute(id, ModerationAction::Approve),
            second.execute(id, ModerationAction::Approve)
        );

        let outcomes = [a, b];
        assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(
            outcomes
                .iter()
                .any(|r| matches!(r, Err(AdminError::AlreadyProcessed)))
        );

        let stored = TutorRepository::find_by_id(repo.as_ref(), id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, ListingStatus::Verified);
    }

    #[tokio::test]
    async fn test_reject_then_approve_is_already_processed() {
        let repo = Arc::new(MemoryBoardStore::new());
        let id = insert_tutor(&repo).await;
        let use_case = ModerateTutorUseCase::new(repo.clone());

        use_case.execute(id, ModerationAction::Reject).await.unwrap();
        let err = use_case
            .execute(id, ModerationAction::Approve)
            .await
            .unwrap_err();
        assert!(matches!(err, AdminError::AlreadyProcessed));

        let err = use_case
            .execute(TutorPostId::new(), ModerationAction::Approve)
            .await
            .unwrap_err();
        assert!(matches!(err, AdminError::AlreadyProcessed));
    }

    #[tokio::test]
    async fn test_pending_review_skips_unsignable_files() {
        let repo = Arc::new(MemoryBoardStore::new());
        let pending = insert_tutor(&repo).await;
        let moderated = insert_tutor(&repo).await;
        repo.transition_status(moderated, ListingStatus::Pending, ListingStatus::Verified)
            .await
            .unwrap();

        let use_case = PendingReviewUseCase::new(
            repo,
            Arc::new(FakeStore),
            Arc::new(AdminConfig::default()),
        );
        let list = use_case.execute().await.unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(list[0].listing.id, pending);
        assert_eq!(
            list[0].cert_urls,
            vec![
                "https://storage.test/verification/u7/xinxue_1.png?expires=3600",
                "https://storage.test/verification/u7/student_id_1.jpg?expires=3600",
            ]
        );
    }

    #[tokio::test]
    async fn test_tutor_patch_revalidates() {
        let repo = Arc::new(MemoryBoardStore::new());
        let id = insert_tutor(&repo).await;
        let use_case = ManageTutorsUseCase::new(repo.clone());

        let online_with_region: TutorPatch =
            serde_json::from_value(serde_json::json!({"teach_mode": "线上"})).unwrap();
        let err = use_case.update(id, online_with_region).await.unwrap_err();
        assert!(matches!(err, AdminError::Board(_)));

        let online: TutorPatch =
            serde_json::from_value(serde_json::json!({"teach_mode": "线上", "regions": []}))
                .unwrap();
        use_case.update(id, online).await.unwrap();

        let stored = TutorRepository::find_by_id(repo.as_ref(), id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.teach_mode, "线上");
        assert!(stored.regions.is_empty());
        assert_eq!(stored.status, ListingStatus::Pending);
    }

    #[tokio::test]
    async fn test_patch_dropping_phase_grade_is_rejected() {
        let repo = Arc::new(MemoryBoardStore::new());
        let id = insert_tutor(&repo).await;

        let patch: TutorPatch =
            serde_json::from_value(serde_json::json!({"grades": ["高一"]})).unwrap();
        let err = ManageTutorsUseCase::new(repo)
            .update(id, patch)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "科目「初中全科」与所选年级不匹配");
    }

    #[tokio::test]
    async fn test_demand_management() {
        let repo = Arc::new(MemoryBoardStore::new());
        let id = insert_demand(&repo).await;
        let use_case = ManageDemandsUseCase::new(repo.clone());

        let patch: DemandPatch = serde_json::from_value(serde_json::json!({
            "student_grade": "小五、小六",
            "subject": null
        }))
        .unwrap();
        use_case.update(id, patch).await.unwrap();

        let stored = DemandRepository::find_by_id(repo.as_ref(), id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.student_grade.as_deref(), Some("小五、小六"));
        assert_eq!(stored.subject, None);

        use_case.delete(id).await.unwrap();
        assert!(matches!(
            use_case.delete(id).await.unwrap_err(),
            AdminError::NotFound
        ));
        assert!(use_case.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_patch_rejected() {
        let repo = Arc::new(MemoryBoardStore::new());
        let id = insert_demand(&repo).await;
        let err = ManageDemandsUseCase::new(repo)
            .update(id, DemandPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AdminError::Invalid(_)));
    }
}

#[cfg(test)]
mod router_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
        response::Response,
    };
    use board::models::ListingStatus;
    use board::store::MemoryBoardStore;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::support::*;
    use crate::application::config::AdminConfig;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    fn request(method: &str, uri: &str, cookie: Option<&str>, body: Option<serde_json::Value>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    fn login(phone: &str, password: &str) -> Request<Body> {
        request(
            "POST",
            "/api/admin/login",
            None,
            Some(serde_json::json!({"phone": phone, "password": password})),
        )
    }

    #[tokio::test]
    async fn test_wrong_password_gets_401_without_cookie() {
        let app = app(config(), Some(MemoryBoardStore::new()));

        let response = app
            .oneshot(login("13800000000", "wrongpass"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        assert_eq!(body_json(response).await["error"], "账号或密码错误");
    }

    #[tokio::test]
    async fn test_login_cookie_opens_the_gate() {
        let app = app(config(), Some(MemoryBoardStore::new()));

        let response = app
            .clone()
            .oneshot(login("13800000000", "correctpass"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(set_cookie.contains("HttpOnly"));
        assert!(set_cookie.contains("SameSite=Lax"));
        assert!(set_cookie.contains("Max-Age=604800"));
        assert_eq!(body_json(response).await["ok"], true);

        let cookie = set_cookie.split(';').next().unwrap().to_string();
        assert_eq!(cookie, valid_cookie());

        let response = app
            .oneshot(request("GET", "/api/admin/tutor-posts", Some(&cookie), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_gate_rejects_identically() {
        let app = app(config(), Some(MemoryBoardStore::new()));
        let foreign = format!(
            "admin_session={}",
            crate::domain::session::session_token(b"another-secret", "admin")
        );

        for cookie in [None, Some("admin_session="), Some(foreign.as_str())] {
            let response = app
                .clone()
                .oneshot(request("GET", "/api/admin/demand-posts", cookie, None))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
            assert_eq!(body_json(response).await["error"], "请先登录管理员后台");

            let response = app
                .clone()
                .oneshot(request("GET", "/admin", cookie, None))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
            assert_eq!(response.headers()[header::LOCATION], "/admin/login");
        }
    }

    #[tokio::test]
    async fn test_gate_exemptions() {
        let app = app(config(), None);

        let response = app
            .clone()
            .oneshot(request("GET", "/admin/login", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(request("GET", "/api/board/tutors", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(request("GET", "/admin", Some(&valid_cookie()), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_secret() {
        let no_secret = AdminConfig {
            session_secret: None,
            ..config()
        };
        let app = app(no_secret, Some(MemoryBoardStore::new()));

        let response = app
            .clone()
            .oneshot(request("GET", "/api/admin/tutor-verify", Some(&valid_cookie()), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = app
            .clone()
            .oneshot(request("GET", "/admin", Some(&valid_cookie()), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let response = app
            .oneshot(login("13800000000", "correctpass"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_login_unconfigured_and_malformed() {
        let unconfigured = app(
            AdminConfig {
                account: None,
                ..config()
            },
            None,
        );
        let response = unconfigured
            .oneshot(login("13800000000", "correctpass"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = app(config(), None)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/admin/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("phone=1"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "请提供账号和密码");
    }

    #[tokio::test]
    async fn test_logout_clears_cookie() {
        let app = app(config(), None);

        let response = app
            .oneshot(request("POST", "/api/admin/logout", Some(&valid_cookie()), None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(set_cookie.starts_with("admin_session=;"));
        assert!(set_cookie.contains("Max-Age=0"));
    }

    #[tokio::test]
    async fn test_moderation_endpoint() {
        let repo = MemoryBoardStore::new();
        let id = insert_tutor(&repo).await;
        let app = app(config(), Some(repo));
        let cookie = valid_cookie();

        let response = app
            .clone()
            .oneshot(request(
                "PATCH",
                "/api/admin/tutor-verify",
                Some(&cookie),
                Some(serde_json::json!({"id": id.to_string(), "action": "publish"})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"],
            "需要 id 和 action: approve | reject"
        );

        let response = app
            .clone()
            .oneshot(request("GET", "/api/admin/tutor-verify", Some(&cookie), None))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["list"].as_array().unwrap().len(), 1);
        assert_eq!(json["list"][0]["cert_urls"].as_array().unwrap().len(), 2);
        assert_eq!(json["list"][0]["status"], "pending");

        let approve = serde_json::json!({"id": id.to_string(), "action": "approve"});
        let response = app
            .clone()
            .oneshot(request("PATCH", "/api/admin/tutor-verify", Some(&cookie), Some(approve.clone())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(request("PATCH", "/api/admin/tutor-verify", Some(&cookie), Some(approve)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "记录不存在或已处理");

        let response = app
            .oneshot(request("GET", "/api/admin/tutor-posts", Some(&cookie), None))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["list"][0]["status"], ListingStatus::Verified.code());
    }

    #[tokio::test]
    async fn test_listing_edit_endpoints() {
        let repo = MemoryBoardStore::new();
        let id = insert_tutor(&repo).await;
        let app = app(config(), Some(repo));
        let cookie = valid_cookie();

        let response = app
            .clone()
            .oneshot(request(
                "PATCH",
                "/api/admin/tutor-posts",
                Some(&cookie),
                Some(serde_json::json!({"id": id.to_string(), "update": {"status": "verified"}})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .clone()
            .oneshot(request(
                "PATCH",
                "/api/admin/tutor-posts",
                Some(&cookie),
                Some(serde_json::json!({"id": id.to_string()})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "需要 id 和 update 字段");

        let response = app
            .clone()
            .oneshot(request(
                "PATCH",
                "/api/admin/tutor-posts",
                Some(&cookie),
                Some(serde_json::json!({"id": id.to_string(), "update": {"note": "周末可约"}})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(request(
                "DELETE",
                "/api/admin/tutor-posts",
                Some(&cookie),
                Some(serde_json::json!({"id": id.to_string()})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(request(
                "DELETE",
                "/api/admin/tutor-posts",
                Some(&cookie),
                Some(serde_json::json!({"id": id.to_string()})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(request(
                "DELETE",
                "/api/admin/demand-posts",
                Some(&cookie),
                Some(serde_json::json!({})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "需要 id");
    }

    #[tokio::test]
    async fn test_database_unconfigured() {
        let app = app(config(), None);
        let response = app
            .oneshot(request("GET", "/api/admin/tutor-posts", Some(&valid_cookie()), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}

//! HTTP handlers for post endpoints.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::{AppState, AuthenticatedUser};
use crate::application::handlers::post::{
    CreatePostCommand, CreatePostHandler, DeletePostCommand, DeletePostHandler, GetPostHandler,
    GetPostQuery, LatestPostsQuery, ListPostsHandler, ListPostsQuery, UpdatePostCommand,
    UpdatePostHandler,
};
use crate::domain::foundation::PostId;
use crate::domain::post::PostError;

use super::dto::{ErrorResponse, PostListResponse, PostRequest, PostView};

impl AppState {
    fn create_post_handler(&self) -> CreatePostHandler {
        CreatePostHandler::new(self.post_repository.clone())
    }

    fn update_post_handler(&self) -> UpdatePostHandler {
        UpdatePostHandler::new(self.post_repository.clone())
    }

    fn delete_post_handler(&self) -> DeletePostHandler {
        DeletePostHandler::new(self.post_repository.clone())
    }

    fn get_post_handler(&self) -> GetPostHandler {
        GetPostHandler::new(self.post_repository.clone())
    }

    fn list_posts_handler(&self) -> ListPostsHandler {
        ListPostsHandler::new(self.post_repository.clone())
    }
}

/// GET / - Index view showing the newest posts.
pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse, PostApiError> {
    let handler = state.list_posts_handler();
    let result = handler.latest(LatestPostsQuery).await?;
    Ok(Json(PostListResponse::from_posts(&result.posts)))
}

/// GET /posts - Full catalog, free posts first.
pub async fn list_posts(State(state): State<AppState>) -> Result<impl IntoResponse, PostApiError> {
    let handler = state.list_posts_handler();
    let result = handler.list(ListPostsQuery).await?;
    Ok(Json(PostListResponse::from_posts(&result.posts)))
}

/// GET /posts/{id} - Fetch a single post.
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<PostId>,
) -> Result<impl IntoResponse, PostApiError> {
    let handler = state.get_post_handler();
    let result = handler.handle(GetPostQuery { post_id: id }).await?;
    Ok(Json(PostView::from(&result.post)))
}

/// POST /posts - Create a post owned by the authenticated user.
pub async fn create_post(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<PostRequest>,
) -> Result<impl IntoResponse, PostApiError> {
    let handler = state.create_post_handler();
    let cmd = CreatePostCommand {
        author_id: user.user_id,
        title: request.title,
        description: request.description,
        preview: request.preview,
        is_free: request.is_free,
    };

    let result = handler.handle(cmd).await?;

    Ok((StatusCode::CREATED, Json(PostView::from(&result.post))))
}

/// PUT /posts/{id} - Edit a post; owner only.
pub async fn update_post(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<PostId>,
    Json(request): Json<PostRequest>,
) -> Result<impl IntoResponse, PostApiError> {
    let handler = state.update_post_handler();
    let cmd = UpdatePostCommand {
        post_id: id,
        requesting_user: user.user_id,
        title: request.title,
        description: request.description,
        preview: request.preview,
        is_free: request.is_free,
    };

    let result = handler.handle(cmd).await?;

    Ok(Json(PostView::from(&result.post)))
}

/// DELETE /posts/{id} - Remove a post; owner only.
pub async fn delete_post(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<PostId>,
) -> Result<impl IntoResponse, PostApiError> {
    let handler = state.delete_post_handler();
    handler
        .handle(DeletePostCommand {
            post_id: id,
            requesting_user: user.user_id,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// API error type that converts post errors to HTTP responses.
#[derive(Debug)]
pub struct PostApiError(PostError);

impl From<PostError> for PostApiError {
    fn from(err: PostError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PostApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code) = match &self.0 {
            PostError::NotFound(_) => (StatusCode::NOT_FOUND, "POST_NOT_FOUND"),
            PostError::Forbidden(_) => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            PostError::ValidationFailed { .. } => (StatusCode::BAD_REQUEST, "VALIDATION_FAILED"),
            PostError::Infrastructure(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse::new(error_code, self.0.message());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::stripe::MockPaymentProvider;
    use crate::domain::foundation::{DomainError, SubscriptionId, UserId};
    use crate::domain::post::Post;
    use crate::domain::subscription::Subscription;
    use crate::domain::user::{ConfirmationToken, PhoneNumber, User};
    use crate::ports::{
        DeliveryReceipt, PostRepository, SmsError, SmsSender, SubscriptionRepository,
        UserRepository,
    };
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    struct MockPostRepository {
        posts: Mutex<Vec<Post>>,
    }

    impl MockPostRepository {
        fn empty() -> Self {
            Self {
                posts: Mutex::new(Vec::new()),
            }
        }

        fn with(posts: Vec<Post>) -> Self {
            Self {
                posts: Mutex::new(posts),
            }
        }

        fn rows(&self) -> Vec<Post> {
            self.posts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PostRepository for MockPostRepository {
        async fn save(&self, post: &Post) -> Result<(), DomainError> {
            self.posts.lock().unwrap().push(post.clone());
            Ok(())
        }

        async fn update(&self, post: &Post) -> Result<(), DomainError> {
            let mut rows = self.posts.lock().unwrap();
            if let Some(row) = rows.iter_mut().find(|p| p.id == post.id) {
                *row = post.clone();
            }
            Ok(())
        }

        async fn delete(&self, id: &PostId) -> Result<(), DomainError> {
            self.posts.lock().unwrap().retain(|p| &p.id != id);
            Ok(())
        }

        async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, DomainError> {
            Ok(self
                .posts
                .lock()
                .unwrap()
                .iter()
                .find(|p| &p.id == id)
                .cloned())
        }

        async fn list(&self) -> Result<Vec<Post>, DomainError> {
            Ok(self.posts.lock().unwrap().clone())
        }

        async fn latest(&self, limit: u32) -> Result<Vec<Post>, DomainError> {
            let rows = self.posts.lock().unwrap();
            Ok(rows.iter().rev().take(limit as usize).cloned().collect())
        }
    }

    struct NoopUserRepository;

    #[async_trait]
    impl UserRepository for NoopUserRepository {
        async fn save(&self, _user: &User) -> Result<(), DomainError> {
            Ok(())
        }

        async fn update(&self, _user: &User) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(&self, _id: &UserId) -> Result<Option<User>, DomainError> {
            Ok(None)
        }

        async fn find_by_phone(&self, _phone: &PhoneNumber) -> Result<Option<User>, DomainError> {
            Ok(None)
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, DomainError> {
            Ok(None)
        }

        async fn find_by_confirmation_token(
            &self,
            _token: &ConfirmationToken,
        ) -> Result<Option<User>, DomainError> {
            Ok(None)
        }

        async fn token_in_use(&self, _token: &ConfirmationToken) -> Result<bool, DomainError> {
            Ok(false)
        }

        async fn list_authors(&self) -> Result<Vec<User>, DomainError> {
            Ok(vec![])
        }
    }

    struct NoopSubscriptionRepository;

    #[async_trait]
    impl SubscriptionRepository for NoopSubscriptionRepository {
        async fn save(&self, _subscription: &Subscription) -> Result<(), DomainError> {
            Ok(())
        }

        async fn update(&self, _subscription: &Subscription) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(
            &self,
            _id: &SubscriptionId,
        ) -> Result<Option<Subscription>, DomainError> {
            Ok(None)
        }

        async fn find_unpaid_for_user(
            &self,
            _user_id: &UserId,
        ) -> Result<Option<Subscription>, DomainError> {
            Ok(None)
        }

        async fn has_active_paid(&self, _user_id: &UserId) -> Result<bool, DomainError> {
            Ok(false)
        }

        async fn list_for_user(
            &self,
            _user_id: &UserId,
        ) -> Result<Vec<Subscription>, DomainError> {
            Ok(vec![])
        }
    }

    struct NoopSmsSender;

    #[async_trait]
    impl SmsSender for NoopSmsSender {
        async fn send_confirmation_code(
            &self,
            _token: &ConfirmationToken,
            _phone: &PhoneNumber,
        ) -> Result<DeliveryReceipt, SmsError> {
            Ok(DeliveryReceipt {
                message_id: "noop".to_string(),
            })
        }
    }

    fn state_with(repo: Arc<MockPostRepository>) -> AppState {
        AppState {
            user_repository: Arc::new(NoopUserRepository),
            post_repository: repo,
            subscription_repository: Arc::new(NoopSubscriptionRepository),
            payment_provider: Arc::new(MockPaymentProvider::new()),
            sms_sender: Arc::new(NoopSmsSender),
        }
    }

    fn user(user_id: UserId) -> AuthenticatedUser {
        AuthenticatedUser { user_id }
    }

    fn sample_post(author: UserId, title: &str) -> Post {
        Post::create(PostId::new(), author, title, None, None, false).unwrap()
    }

    fn request(title: &str) -> PostRequest {
        PostRequest {
            title: title.to_string(),
            description: None,
            preview: None,
            is_free: false,
        }
    }

    #[tokio::test]
    async fn create_post_responds_created() {
        let repo = Arc::new(MockPostRepository::empty());
        let state = state_with(repo.clone());

        let response = create_post(State(state), user(UserId::new()), Json(request("First post")))
            .await
            .unwrap()
            .into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(repo.rows().len(), 1);
    }

    #[tokio::test]
    async fn create_post_with_empty_title_is_bad_request() {
        let repo = Arc::new(MockPostRepository::empty());
        let state = state_with(repo.clone());

        let result = create_post(State(state), user(UserId::new()), Json(request("   "))).await;

        let response = result.err().unwrap().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(repo.rows().is_empty());
    }

    #[tokio::test]
    async fn update_by_non_owner_is_forbidden() {
        let author = UserId::new();
        let post = sample_post(author, "Original");
        let post_id = post.id;
        let repo = Arc::new(MockPostRepository::with(vec![post]));
        let state = state_with(repo.clone());

        let result = update_post(
            State(state),
            user(UserId::new()),
            Path(post_id),
            Json(request("Hijacked")),
        )
        .await;

        let response = result.err().unwrap().into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(repo.rows()[0].title, "Original");
    }

    #[tokio::test]
    async fn delete_by_owner_responds_no_content() {
        let author = UserId::new();
        let post = sample_post(author, "Going away");
        let post_id = post.id;
        let repo = Arc::new(MockPostRepository::with(vec![post]));
        let state = state_with(repo.clone());

        let response = delete_post(State(state), user(author), Path(post_id))
            .await
            .unwrap()
            .into_response();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(repo.rows().is_empty());
    }

    #[tokio::test]
    async fn get_unknown_post_is_not_found() {
        let state = state_with(Arc::new(MockPostRepository::empty()));

        let result = get_post(State(state), Path(PostId::new())).await;

        let response = result.err().unwrap().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn index_and_catalog_respond_ok() {
        let repo = Arc::new(MockPostRepository::with(vec![
            sample_post(UserId::new(), "One"),
            sample_post(UserId::new(), "Two"),
        ]));
        let state = state_with(repo);

        let index_response = index(State(state.clone())).await.unwrap().into_response();
        let list_response = list_posts(State(state)).await.unwrap().into_response();

        assert_eq!(index_response.status(), StatusCode::OK);
        assert_eq!(list_response.status(), StatusCode::OK);
    }
}

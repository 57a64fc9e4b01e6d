//! Post handlers.

use actix_web::{HttpResponse, web};

use folio_core::domain::Post;
use folio_shared::dto::{PostRequest, PostResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        user_id: post.user_id,
        title: post.title,
        content: post.content,
        created_at: post.created_at.to_rfc3339(),
        updated_at: post.updated_at.to_rfc3339(),
    }
}

fn to_responses(posts: Vec<Post>) -> Vec<PostResponse> {
    posts.into_iter().map(to_response).collect()
}

fn post_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Post not found with ID: {}", id))
}

/// POST /api/posts/users/{user_id}
pub async fn create_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();
    let req = body.into_inner();
    let post = state.posts.create(user_id, &req.title, &req.content).await?;

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.get_all().await?;

    Ok(HttpResponse::Ok().json(to_responses(posts)))
}

/// GET /api/posts/{id}
pub async fn get_post(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .posts
        .get_by_id(id)
        .await?
        .ok_or_else(|| post_not_found(id))?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// GET /api/posts/users/{user_id}
pub async fn list_posts_by_user(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let posts = state.posts.get_by_owner(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(to_responses(posts)))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();
    let post = state
        .posts
        .update(id, &req.title, &req.content)
        .await?
        .ok_or_else(|| post_not_found(id))?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    if state.posts.delete(id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(post_not_found(id))
    }
}

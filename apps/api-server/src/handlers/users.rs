//! User handlers.

use actix_web::{HttpResponse, web};

use folio_core::domain::User;
use folio_shared::dto::{UserRequest, UserResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(user: User) -> UserResponse {
    UserResponse {
        id: user.id,
        name: user.name,
        email: user.email,
        created_at: user.created_at.to_rfc3339(),
        updated_at: user.updated_at.to_rfc3339(),
    }
}

fn user_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("User not found with ID: {}", id))
}

/// POST /api/users
pub async fn create_user(
    state: web::Data<AppState>,
    body: web::Json<UserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let user = state.users.create(&req.name, &req.email).await?;

    Ok(HttpResponse::Created().json(to_response(user)))
}

/// GET /api/users
pub async fn list_users(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users: Vec<UserResponse> = state
        .users
        .get_all()
        .await?
        .into_iter()
        .map(to_response)
        .collect();

    Ok(HttpResponse::Ok().json(users))
}

/// GET /api/users/{id}
pub async fn get_user(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let user = state
        .users
        .get_by_id(id)
        .await?
        .ok_or_else(|| user_not_found(id))?;

    Ok(HttpResponse::Ok().json(to_response(user)))
}

/// PUT /api/users/{id}
pub async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UserRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();
    let user = state
        .users
        .update(id, &req.name, &req.email)
        .await?
        .ok_or_else(|| user_not_found(id))?;

    Ok(HttpResponse::Ok().json(to_response(user)))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    if state.users.delete(id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(user_not_found(id))
    }
}

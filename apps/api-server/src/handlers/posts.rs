//! Post handlers - the CRUD surface over the post service.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use talos_core::domain::{Post, PostData};
use talos_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Optional owner filter for the list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub user_id: Option<i64>,
}

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        body: post.body,
        user_id: post.user_id,
    }
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let data = PostData {
        id: None,
        title: req.title,
        body: req.body,
        user_id: req.user_id,
    };

    let post = state.posts.create_post(&data).await?;
    Ok(HttpResponse::Created().json(to_response(post)))
}

/// GET /api/posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    // Absence is a non-error for the service; the HTTP edge turns it
    // into a 404.
    match state.posts.find_post(id).await? {
        Some(post) => Ok(HttpResponse::Ok().json(to_response(post))),
        None => Err(AppError::NotFound(format!("post with id {} not found", id))),
    }
}

/// GET /api/posts?user_id=N
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    let posts = match query.user_id {
        Some(user_id) => state.posts.list_user_posts(user_id).await?,
        None => state.posts.list_posts().await?,
    };

    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// PUT /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let data = PostData {
        id: Some(path.into_inner()),
        title: req.title,
        body: req.body,
        user_id: None,
    };

    let post = state.posts.update_post(&data).await?;
    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// DELETE /api/posts/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    state.posts.delete_post(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

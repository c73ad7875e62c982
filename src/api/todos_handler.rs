use actix_web::{web, HttpResponse};
use serde_json::json;

use super::errors::TodoApiError;
use crate::api::dtos::todo::{CreateTodoDTO, UpdateTodoDTO};
use crate::models::todo_model::{Todo, TodoChangeset};
use crate::models::Pool;

use diesel::prelude::*;

/// Api handler for listing all todos, newest first
pub async fn get_todos(pool: web::Data<Pool>) -> Result<HttpResponse, actix_web::Error> {
    let list = web::block(move || get_all_todos(pool)).await??;

    Ok(HttpResponse::Ok().json(&list))
}

/// Create a new todo
pub async fn create_todo(
    request_data: web::Json<CreateTodoDTO>,
    pool: web::Data<Pool>,
) -> Result<HttpResponse, actix_web::Error> {
    let inserted = web::block(move || insert_new_todo(pool, request_data.into_inner())).await??;

    Ok(HttpResponse::Created().json(&inserted))
}

/// Fetch a single todo by id
pub async fn get_todo(
    todo_id: web::Path<String>,
    pool: web::Data<Pool>,
) -> Result<HttpResponse, actix_web::Error> {
    let todo =
        web::block(move || find_todo_by_id(pool, todo_id.into_inner().as_str())).await??;

    Ok(HttpResponse::Ok().json(&todo))
}

/// Apply a partial update to a todo. Only whitelisted fields are
/// accepted; a payload without any of them is rejected outright.
pub async fn update_todo(
    todo_id: web::Path<String>,
    request_data: web::Json<UpdateTodoDTO>,
    pool: web::Data<Pool>,
) -> Result<HttpResponse, actix_web::Error> {
    let updates = request_data.into_inner();

    if updates.is_empty() {
        return Err(TodoApiError::BadRequest(String::from("No valid fields to update")).into());
    }

    let updated =
        web::block(move || apply_todo_update(pool, todo_id.into_inner().as_str(), updates))
            .await??;

    Ok(HttpResponse::Ok().json(&updated))
}

/// Api to delete a todo
pub async fn delete_todo(
    todo_id: web::Path<String>,
    pool: web::Data<Pool>,
) -> Result<HttpResponse, actix_web::Error> {
    web::block(move || remove_todo(pool, todo_id.into_inner().as_str())).await??;

    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}

/// Mark a todo as complete
pub async fn mark_todo_as_complete(
    todo_id: web::Path<String>,
    pool: web::Data<Pool>,
) -> Result<HttpResponse, actix_web::Error> {
    let updated =
        web::block(move || update_todo_completeness(pool, todo_id.into_inner().as_str(), true))
            .await??;

    Ok(HttpResponse::Ok().json(&updated))
}

/// Mark a todo as incomplete
pub async fn mark_todo_as_incomplete(
    todo_id: web::Path<String>,
    pool: web::Data<Pool>,
) -> Result<HttpResponse, actix_web::Error> {
    let updated =
        web::block(move || update_todo_completeness(pool, todo_id.into_inner().as_str(), false))
            .await??;

    Ok(HttpResponse::Ok().json(&updated))
}

/// Load every todo ordered by creation time, newest first
fn get_all_todos(pool: web::Data<Pool>) -> Result<Vec<Todo>, TodoApiError> {
    use crate::schema::todos::dsl::*;

    let conn = &mut pool.get()?;

    let list = todos.order(created_at.desc()).load::<Todo>(conn)?;

    Ok(list)
}

fn find_todo_by_id(pool: web::Data<Pool>, todo_id: &str) -> Result<Todo, TodoApiError> {
    use crate::schema::todos::dsl::*;

    let conn = &mut pool.get()?;

    let uid = uuid::Uuid::parse_str(todo_id)?;

    let todo = todos.filter(id.eq(uid)).first::<Todo>(conn)?;

    Ok(todo)
}

fn insert_new_todo(pool: web::Data<Pool>, request: CreateTodoDTO) -> Result<Todo, TodoApiError> {
    use crate::schema::todos::dsl::*;

    let title_text = request.title.trim();

    if title_text.is_empty() {
        return Err(TodoApiError::BadRequest(String::from("Title is required")));
    }

    let description_text = request
        .description
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty());

    let conn = &mut pool.get()?;

    let new_todo = Todo::new(title_text.to_string(), description_text);

    let inserted = diesel::insert_into(todos)
        .values(&new_todo)
        .get_result::<Todo>(conn)?;

    Ok(inserted)
}

/// Apply the whitelisted fields and refresh `updated_at`. The update
/// returns the row, so a missing id surfaces as `NotFound`.
fn apply_todo_update(
    pool: web::Data<Pool>,
    todo_id: &str,
    updates: UpdateTodoDTO,
) -> Result<Todo, TodoApiError> {
    use crate::schema::todos::dsl::*;

    let conn = &mut pool.get()?;

    let uid = uuid::Uuid::parse_str(todo_id)?;

    let changeset = TodoChangeset {
        title: updates.title,
        description: updates.description,
        completed: updates.completed,
        updated_at: chrono::Utc::now().naive_utc(),
    };

    let updated = diesel::update(todos.filter(id.eq(uid)))
        .set(&changeset)
        .get_result::<Todo>(conn)?;

    Ok(updated)
}

/// Complete or uncomplete a todo
fn update_todo_completeness(
    pool: web::Data<Pool>,
    todo_id: &str,
    is_complete: bool,
) -> Result<Todo, TodoApiError> {
    apply_todo_update(
        pool,
        todo_id,
        UpdateTodoDTO {
            completed: Some(is_complete),
            ..Default::default()
        },
    )
}

/// Remove a todo. Deleting an id that matches nothing still counts as
/// success, so the operation stays idempotent for callers.
fn remove_todo(pool: web::Data<Pool>, todo_id: &str) -> Result<(), TodoApiError> {
    use crate::schema::todos::dsl::*;

    // nothing can match a malformed id, so the delete is already done
    let uid = match uuid::Uuid::parse_str(todo_id) {
        Ok(uid) => uid,
        Err(_) => return Ok(()),
    };

    let conn = &mut pool.get()?;

    let _: usize = diesel::delete(todos.filter(id.eq(uid))).execute(conn)?;

    Ok(())
}

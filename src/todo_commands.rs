use std::str::FromStr;

use inquire::Text;
use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;

use crate::{
    errors::TodoError, models::todo_model::Todo, ui::todo_list_renderer::render_todo_list,
    utils::make_api_url,
};

/// Blocking http client for the todo api. Built once at command entry
/// and passed down to whatever needs to talk to the server.
pub struct ApiClient {
    http: Client,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    pub fn list(&self) -> Result<Vec<Todo>, TodoError> {
        let response = self
            .http
            .get(make_api_url("todos"))
            .header(CONTENT_TYPE, "application/json")
            .send()?;

        let body = handle_response(response)?;

        serde_json::from_str(&body).map_err(|_| TodoError::UnexpectedResponse)
    }

    pub fn get(&self, todo_id: &str) -> Result<Todo, TodoError> {
        let response = self
            .http
            .get(make_api_url(&format!("todos/{}", todo_id)))
            .header(CONTENT_TYPE, "application/json")
            .send()?;

        let body = handle_response(response)?;

        serde_json::from_str(&body).map_err(|_| TodoError::UnexpectedResponse)
    }

    pub fn create(&self, title: &str, description: Option<&str>) -> Result<Todo, TodoError> {
        let mut body = serde_json::json!({ "title": title });

        if let Some(text) = description {
            body["description"] = serde_json::Value::from(text);
        }

        let response = self.http.post(make_api_url("todos")).json(&body).send()?;

        let body = handle_response(response)?;

        serde_json::from_str(&body).map_err(|_| TodoError::UnexpectedResponse)
    }

    pub fn set_completed(&self, todo_id: &str, completed: bool) -> Result<Todo, TodoError> {
        let response = self
            .http
            .put(make_api_url(&format!("todos/{}", todo_id)))
            .json(&serde_json::json!({ "completed": completed }))
            .send()?;

        let body = handle_response(response)?;

        serde_json::from_str(&body).map_err(|_| TodoError::UnexpectedResponse)
    }

    pub fn delete(&self, todo_id: &str) -> Result<(), TodoError> {
        let response = self
            .http
            .delete(make_api_url(&format!("todos/{}", todo_id)))
            .send()?;

        handle_response(response)?;

        Ok(())
    }
}

/// Read the body on success, otherwise surface whatever error message
/// the server put in the `error` field
fn handle_response(response: Response) -> Result<String, TodoError> {
    let status = response.status();
    let body = response.text()?;

    if status.is_success() {
        return Ok(body);
    }

    Err(TodoError::Api(error_message_from_body(status, &body)))
}

fn error_message_from_body(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::Value::from_str(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|e| e.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| format!("Unexpected response status {}", status))
}

/// Prompt user to create a new todo
pub fn create_new_todo() -> anyhow::Result<()> {
    let title = Text::new("Title")
        .with_help_message("Title for your new todo")
        .prompt()?;

    let description = Text::new("Description")
        .with_help_message("Optional, leave empty to skip")
        .prompt()?;

    let description = description.trim();
    let description = (!description.is_empty()).then(|| description);

    let client = ApiClient::new();

    let todo = client.create(title.as_str(), description)?;

    println!("Created \"{}\" ({})", todo.title, todo.id);

    Ok(())
}

/// List all the todos in the interactive view
pub fn list_todos() -> anyhow::Result<()> {
    let client = ApiClient::new();

    let list = client.list()?;

    render_todo_list(list, client)?;

    Ok(())
}

/// Print a single todo
pub fn show_todo(todo_id: &str) -> anyhow::Result<()> {
    let client = ApiClient::new();

    let todo = client.get(todo_id)?;

    let state = if todo.completed { "done" } else { "pending" };

    println!("{} [{}]", todo.title, state);

    if let Some(description) = &todo.description {
        println!("  {}", description);
    }

    println!("  id: {}", todo.id);
    println!("  created: {}", todo.created_at);
    println!("  updated: {}", todo.updated_at);

    Ok(())
}

/// Mark a todo as complete
pub fn complete_todo(todo_id: &str) -> anyhow::Result<()> {
    let client = ApiClient::new();

    let todo = client.set_completed(todo_id, true)?;

    println!("Completed \"{}\"", todo.title);

    Ok(())
}

/// Mark a todo as pending again
pub fn reopen_todo(todo_id: &str) -> anyhow::Result<()> {
    let client = ApiClient::new();

    let todo = client.set_completed(todo_id, false)?;

    println!("Reopened \"{}\"", todo.title);

    Ok(())
}

/// Delete a todo
pub fn delete_todo(todo_id: &str) -> anyhow::Result<()> {
    let client = ApiClient::new();

    client.delete(todo_id)?;

    println!("Deleted {}", todo_id);

    Ok(())
}

#[cfg(test)]
mod commands_test {
    use super::error_message_from_body;
    use reqwest::StatusCode;

    #[test]
    fn test_error_message_from_json_body() {
        let message = error_message_from_body(StatusCode::NOT_FOUND, r#"{"error": "Todo not found"}"#);

        assert_eq!(message, "Todo not found");
    }

    #[test]
    fn test_error_message_falls_back_to_status() {
        let message = error_message_from_body(StatusCode::BAD_GATEWAY, "<html>nope</html>");

        assert_eq!(message, "Unexpected response status 502 Bad Gateway");
    }
}

use serde::{Deserialize, Serialize};

/// Body of `POST /api/todos`. A missing title deserializes to an empty
/// string so the handler can answer 400 instead of a parse failure.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateTodoDTO {
    pub title: String,
    pub description: Option<String>,
}

/// Body of `PUT /api/todos/{id}`. Only these three fields are ever
/// applied; anything else in the payload is dropped during
/// deserialization, so a body holding just `id` or `created_at`
/// comes out empty.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct UpdateTodoDTO {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl UpdateTodoDTO {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}

#[cfg(test)]
mod dto_test {
    use super::{CreateTodoDTO, UpdateTodoDTO};

    #[test]
    fn test_disallowed_keys_deserialize_to_empty_update() {
        let update: UpdateTodoDTO =
            serde_json::from_str(r#"{"id": "x", "created_at": "y"}"#).unwrap();

        assert_eq!(update.is_empty(), true);
    }

    #[test]
    fn test_empty_object_is_empty_update() {
        let update: UpdateTodoDTO = serde_json::from_str("{}").unwrap();

        assert_eq!(update.is_empty(), true);
    }

    #[test]
    fn test_allowed_keys_survive() {
        let update: UpdateTodoDTO =
            serde_json::from_str(r#"{"title": "t", "description": "d", "completed": true}"#)
                .unwrap();

        assert_eq!(update.is_empty(), false);
        assert_eq!(update.title.as_deref(), Some("t"));
        assert_eq!(update.description.as_deref(), Some("d"));
        assert_eq!(update.completed, Some(true));
    }

    #[test]
    fn test_completed_alone_is_a_valid_update() {
        let update: UpdateTodoDTO = serde_json::from_str(r#"{"completed": true}"#).unwrap();

        assert_eq!(update.is_empty(), false);
        assert_eq!(update.completed, Some(true));
    }

    #[test]
    fn test_create_description_is_optional() {
        let create: CreateTodoDTO = serde_json::from_str(r#"{"title": "Buy milk"}"#).unwrap();

        assert_eq!(create.title, "Buy milk");
        assert_eq!(create.description, None);
    }

    #[test]
    fn test_create_without_title_parses_to_empty_string() {
        let create: CreateTodoDTO =
            serde_json::from_str(r#"{"description": "no title here"}"#).unwrap();

        assert_eq!(create.title, "");
    }
}

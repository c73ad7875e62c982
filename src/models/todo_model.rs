use crate::schema::todos;
use diesel::{AsChangeset, Insertable, Queryable};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Insertable, Queryable)]
#[diesel(table_name = todos)]
pub struct Todo {
    pub id: uuid::Uuid,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

impl Todo {
    /// Build a fresh row ready to insert. A new todo always starts
    /// uncompleted with `created_at == updated_at`.
    pub fn new(title: String, description: Option<String>) -> Self {
        let now = chrono::Utc::now().naive_utc();

        Self {
            id: uuid::Uuid::new_v4(),
            title,
            description,
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// The whitelisted mutable columns. `None` leaves a column untouched;
/// `updated_at` is written on every update.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = todos)]
pub struct TodoChangeset {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub updated_at: chrono::NaiveDateTime,
}

#[cfg(test)]
mod todo_model_test {
    use super::Todo;

    #[test]
    fn test_new_todo_starts_uncompleted() {
        let todo = Todo::new(String::from("Buy milk"), None);

        assert_eq!(todo.completed, false);
        assert_eq!(todo.created_at, todo.updated_at);
        assert_eq!(todo.description, None);
    }

    #[test]
    fn test_new_todo_keeps_description() {
        let todo = Todo::new(
            String::from("Buy milk"),
            Some(String::from("Two liters, whole")),
        );

        assert_eq!(todo.title, "Buy milk");
        assert_eq!(todo.description.as_deref(), Some("Two liters, whole"));
    }

    #[test]
    fn test_new_todos_get_distinct_ids() {
        let first = Todo::new(String::from("a"), None);
        let second = Todo::new(String::from("b"), None);

        assert_ne!(first.id, second.id);
    }
}

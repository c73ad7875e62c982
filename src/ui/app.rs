use tui::widgets::ListState;

use crate::errors::TodoError;
use crate::models::todo_model::Todo;

pub struct StatefulList<T> {
    pub state: ListState,
    pub items: Vec<T>,
}

impl<T> StatefulList<T> {
    pub fn with_items(items: Vec<T>) -> StatefulList<T> {
        StatefulList {
            state: ListState::default(),
            items,
        }
    }

    pub fn next(&mut self) {
        if self.items.is_empty() {
            return;
        }

        let i = match self.state.selected() {
            Some(i) => {
                if i >= self.items.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.items.is_empty() {
            return;
        }

        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    self.items.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn unselect(&mut self) {
        self.state.select(None);
    }
}

pub enum InputMode {
    None,
    Editing,
}

/// The whole view state in one place. Key events mutate this struct
/// and nothing else; the `ui` function renders from it on every tick.
pub struct App {
    pub pending: StatefulList<Todo>,
    pub done: StatefulList<Todo>,
    pub error_message: String,
    pub input_text: String,
    pub message: String,
    pub input_mode: InputMode,
    navigation_stack: Vec<Route>,
}

#[derive(Debug)]
pub struct Route {
    pub id: RouteId,
    pub active_block: ActiveBlock,
}

#[derive(Clone, PartialEq, Debug)]
pub enum RouteId {
    Home,
    Error,
    Message,
    NewTodo,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ActiveBlock {
    Home,
    Error,
    Message,
    NewTodo,
}

pub const DEFAULT_ROUTE: Route = Route {
    id: RouteId::Home,
    active_block: ActiveBlock::Home,
};

impl App {
    pub fn new(todos: Vec<Todo>) -> App {
        let (pending, done): (Vec<Todo>, Vec<Todo>) =
            todos.into_iter().partition(|todo| !todo.completed);

        App {
            pending: StatefulList::with_items(pending),
            done: StatefulList::with_items(done),
            error_message: String::new(),
            input_mode: InputMode::None,
            input_text: String::new(),
            message: String::new(),
            navigation_stack: vec![DEFAULT_ROUTE],
        }
    }

    /// Gets the current active route
    pub fn get_current_route(&self) -> &Route {
        self.navigation_stack.last().unwrap_or(&DEFAULT_ROUTE)
    }

    /// Push a route to the navigation stack
    /// so that it is rendered
    pub fn push_navigation_stack(&mut self, route_id: RouteId, active_block: ActiveBlock) {
        self.navigation_stack.push(Route {
            id: route_id,
            active_block,
        });
    }

    pub fn pop_navigation_stack(&mut self) -> Option<Route> {
        if self.navigation_stack.len() == 1 {
            None
        } else {
            self.navigation_stack.pop()
        }
    }

    pub fn handle_error(&mut self, e: &TodoError) {
        self.push_navigation_stack(RouteId::Error, ActiveBlock::Error);
        self.error_message = e.to_string();
    }

    pub fn handle_new_message(&mut self, m: String) {
        let active_block = self.get_current_route().active_block;
        if active_block == ActiveBlock::Message || active_block == ActiveBlock::Error {
            self.pop_navigation_stack();
        }

        self.push_navigation_stack(RouteId::Message, ActiveBlock::Message);
        self.message = m;
    }

    pub fn selected_pending(&self) -> Option<&Todo> {
        self.pending
            .state
            .selected()
            .and_then(|i| self.pending.items.get(i))
    }

    /// Move the selected pending todo into the done column
    pub fn finish_selected(&mut self) {
        if let Some(i) = self.pending.state.selected() {
            if i < self.pending.items.len() {
                let todo = self.pending.items.remove(i);
                self.done.items.push(todo);

                if self.pending.items.is_empty() {
                    self.pending.unselect();
                }
            }
        }
    }

    /// Drop the selected pending todo entirely
    pub fn remove_selected(&mut self) {
        if let Some(i) = self.pending.state.selected() {
            if i < self.pending.items.len() {
                self.pending.items.remove(i);

                if self.pending.items.is_empty() {
                    self.pending.unselect();
                }
            }
        }
    }

    /// A freshly created todo lands on top of the pending column
    pub fn add_pending(&mut self, todo: Todo) {
        self.pending.items.insert(0, todo);
    }
}

#[cfg(test)]
mod app_test {
    use super::{ActiveBlock, App, RouteId, StatefulList};
    use crate::models::todo_model::Todo;

    fn sample_todos() -> Vec<Todo> {
        let mut done = Todo::new(String::from("done one"), None);
        done.completed = true;

        vec![
            Todo::new(String::from("pending one"), None),
            done,
            Todo::new(String::from("pending two"), None),
        ]
    }

    #[test]
    fn test_stateful_list_wraps_around() {
        let mut list = StatefulList::with_items(vec![1, 2, 3]);

        list.next();
        list.next();
        list.next();
        assert_eq!(list.state.selected(), Some(2));

        list.next();
        assert_eq!(list.state.selected(), Some(0));

        list.previous();
        assert_eq!(list.state.selected(), Some(2));
    }

    #[test]
    fn test_stateful_list_tolerates_empty() {
        let mut list: StatefulList<i32> = StatefulList::with_items(vec![]);

        list.next();
        list.previous();

        assert_eq!(list.state.selected(), None);
    }

    #[test]
    fn test_new_partitions_by_completeness() {
        let app = App::new(sample_todos());

        assert_eq!(app.pending.items.len(), 2);
        assert_eq!(app.done.items.len(), 1);
        assert_eq!(app.done.items[0].title, "done one");
    }

    #[test]
    fn test_finish_selected_moves_between_columns() {
        let mut app = App::new(sample_todos());

        app.pending.next();
        app.finish_selected();

        assert_eq!(app.pending.items.len(), 1);
        assert_eq!(app.done.items.len(), 2);
        assert_eq!(app.done.items[1].title, "pending one");
    }

    #[test]
    fn test_remove_selected_without_selection_is_noop() {
        let mut app = App::new(sample_todos());

        app.remove_selected();

        assert_eq!(app.pending.items.len(), 2);
    }

    #[test]
    fn test_navigation_stack_keeps_last_route() {
        let mut app = App::new(vec![]);

        assert!(app.pop_navigation_stack().is_none());

        app.push_navigation_stack(RouteId::NewTodo, ActiveBlock::NewTodo);
        assert_eq!(app.get_current_route().id, RouteId::NewTodo);

        app.pop_navigation_stack();
        assert_eq!(app.get_current_route().id, RouteId::Home);
    }
}

use crate::model::list::{Board, List};
use crate::model::task::Task;

fn task(id: &str, text: &str) -> Task {
    Task {
        id: id.into(),
        text: text.into(),
        children: Vec::new(),
    }
}

/// The seed board tests and demos start from: two lists, one nested subtree,
/// one completed task — the smallest board that exercises every structural
/// case.
pub fn board() -> Board {
    vec![
        List {
            id: "list-1".into(),
            name: "Day off in Kyoto".into(),
            uncompleted_tasks: vec![
                task("task-1", "Philosopher’s Path"),
                task("task-2", "Visit the temple"),
            ],
            completed_tasks: vec![task("task-3", "Drink matcha")],
        },
        List {
            id: "list-2".into(),
            name: "Day off in Tokyo".into(),
            uncompleted_tasks: vec![
                task("task-4", "Explore Shibuya Crossing"),
                Task {
                    id: "task-5".into(),
                    text: "Visit Nezu Museum".into(),
                    children: vec![
                        task("task-8", "Visit the museum"),
                        task("task-9", "Visit the garden"),
                        task("task-10", "Visit the café"),
                    ],
                },
                task("task-6", "Climb Tokyo Skytree"),
                task("task-7", "Visit Akihabara"),
            ],
            completed_tasks: Vec::new(),
        },
    ]
}

//! Text rendering for responses and tables.

use tabled::{settings::Style, Table, Tabled};

use crate::domain::{PodcastRow, Task};
use crate::recommend::MoodEntry;
use crate::service::Response;

/// Catalog listing row
#[derive(Tabled)]
struct PodcastTableRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Mood")]
    mood: String,
    #[tabled(rename = "Seats Available")]
    seats: String,
}

#[derive(Tabled)]
struct TaskTableRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Task")]
    name: String,
    #[tabled(rename = "Assigned To")]
    assigned_to: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

#[derive(Tabled)]
struct MoodTableRow {
    #[tabled(rename = "Mood")]
    name: String,
    #[tabled(rename = "Recommendations")]
    recommended: String,
}

/// Catalog listing with the publisher's column headers
pub fn podcast_table(rows: &[PodcastRow]) -> String {
    let table_rows: Vec<PodcastTableRow> = rows
        .iter()
        .map(|r| PodcastTableRow {
            id: r.id,
            title: r.title.clone(),
            mood: r.mood.clone(),
            seats: format!("{} seats", r.seats),
        })
        .collect();

    Table::new(&table_rows).with(Style::blank()).to_string()
}

pub fn task_table(tasks: &[Task]) -> String {
    let table_rows: Vec<TaskTableRow> = tasks
        .iter()
        .enumerate()
        .map(|(i, t)| TaskTableRow {
            position: i + 1,
            name: t.name.clone(),
            assigned_to: t.assigned_to.clone(),
            status: if t.completed { "done" } else { "open" },
        })
        .collect();

    Table::new(&table_rows).with(Style::blank()).to_string()
}

pub fn mood_table(entries: &[MoodEntry]) -> String {
    let table_rows: Vec<MoodTableRow> = entries
        .iter()
        .map(|e| MoodTableRow {
            name: e.name.clone(),
            recommended: e.recommended.join(", "),
        })
        .collect();

    Table::new(&table_rows).with(Style::blank()).to_string()
}

/// Text shown to the operator for a response
pub fn response_text(response: &Response) -> String {
    match response {
        Response::Created { message } => message.clone(),
        Response::Podcasts { rows } => podcast_table(rows),
        Response::Updated { title } => format!("Podcast Updated: {}", title),
        Response::Deleted { .. } => "Podcast Deleted".to_string(),
        Response::NotFound { .. } => "Podcast not found.".to_string(),
        Response::Recommendations { mood, titles } => {
            let mut out = format!("Recommended Podcasts based on your mood ({}):", mood);
            for title in titles {
                out.push_str("\n- ");
                out.push_str(title);
            }
            out
        }
        Response::NoRecommendation { .. } => {
            "Sorry, no recommendations available for that mood.".to_string()
        }
        Response::TaskAdded { position } => format!("Task Added: #{}", position),
        Response::Tasks { tasks } if tasks.is_empty() => "No tasks yet.".to_string(),
        Response::Tasks { tasks } => task_table(tasks),
        Response::TaskCompleted { position, name } => {
            format!("Task Completed: #{} {}", position, name)
        }
        Response::TaskMissing { position } => format!("Task #{} not found.", position),
    }
}

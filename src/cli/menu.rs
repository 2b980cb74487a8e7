//! Interactive menu using `dialoguer`.
//!
//! Each menu branch collects its fields, builds a [`Request`] and prints the
//! rendered [`Response`]. Nothing here touches the catalog directly.

use anyhow::Result;
use dialoguer::{Input, Select};

use crate::recommend::MoodIndex;
use crate::service::{PodTrack, Request};

use super::render::response_text;

const BANNER_RULE: &str = "--------------------------";

/// Main menu loop. Blocks until the operator chooses "Exit".
pub fn main_menu(app: &mut PodTrack) -> Result<()> {
    let items = vec!["Publisher Mode", "Customer Mode", "Exit"];

    loop {
        println!("\n{}", BANNER_RULE);
        println!("Welcome to PodTrack System!");
        println!("{}", BANNER_RULE);

        let selection = Select::new()
            .with_prompt("Select an option")
            .items(&items)
            .default(0)
            .interact()?;

        match selection {
            0 => publisher_menu(app)?,
            1 => customer_menu(app)?,
            _ => {
                println!("Exiting PodTrack System...");
                break;
            }
        }
    }
    Ok(())
}

fn publisher_menu(app: &mut PodTrack) -> Result<()> {
    let items = vec![
        "Create Podcast",
        "Read Podcasts",
        "Update Podcast",
        "Delete Podcast",
        "Manage Tasks",
        "Exit Publisher Mode",
    ];

    println!("\nPublisher Mode - Manage Podcasts");
    let selection = Select::new()
        .with_prompt("Select an option")
        .items(&items)
        .default(0)
        .interact()?;

    let request = match selection {
        0 => {
            let id: i64 = Input::new().with_prompt("Enter podcast ID").interact_text()?;
            let title = prompt_text("Enter podcast title")?;
            let mood = prompt_text("Enter podcast mood")?;
            let tags = parse_tags(&prompt_text("Enter tags (comma-separated)")?);
            let seats: i64 = Input::new()
                .with_prompt("Enter number of seats")
                .interact_text()?;
            Request::CreatePodcast {
                id,
                title,
                mood,
                tags,
                seats,
            }
        }
        1 => Request::ListPodcasts,
        2 => {
            let id: i64 = Input::new()
                .with_prompt("Enter podcast ID to update")
                .interact_text()?;
            let title = prompt_text("Enter new title")?;
            let mood = prompt_text("Enter new mood")?;
            Request::UpdatePodcast { id, title, mood }
        }
        3 => {
            let id: i64 = Input::new()
                .with_prompt("Enter podcast ID to delete")
                .interact_text()?;
            Request::DeletePodcast { id }
        }
        4 => return task_menu(app),
        _ => return Ok(()),
    };

    println!("{}", response_text(&app.handle(request)));
    Ok(())
}

fn task_menu(app: &mut PodTrack) -> Result<()> {
    let items = vec!["Add Task", "List Tasks", "Complete Task", "Back"];
    let selection = Select::new()
        .with_prompt("Tasks")
        .items(&items)
        .default(0)
        .interact()?;

    let request = match selection {
        0 => Request::AddTask {
            name: prompt_text("Task name")?,
            assigned_to: prompt_text("Assigned to")?,
        },
        1 => Request::ListTasks,
        2 => Request::CompleteTask {
            position: Input::new().with_prompt("Task #").interact_text()?,
        },
        _ => return Ok(()),
    };

    println!("{}", response_text(&app.handle(request)));
    Ok(())
}

fn customer_menu(app: &mut PodTrack) -> Result<()> {
    println!("\nCustomer Mode - Recommend Podcast based on Mood");
    println!("How do you feel today?");
    let letters: Vec<char> = choice_letters(app.moods()).collect();
    for (letter, name) in letters.iter().zip(app.moods().mood_names()) {
        println!("{}. {}", letter, name);
    }

    let options: Vec<String> = letters.iter().map(char::to_string).collect();
    let choice = prompt_text(&format!("Enter your mood ({})", options.join("/")))?;

    match mood_for_choice(app.moods(), &choice) {
        Some(mood) => {
            let request = Request::Recommend {
                mood: mood.to_string(),
            };
            println!("{}", response_text(&app.handle(request)));
        }
        None => println!("Invalid mood input!"),
    }
    Ok(())
}

fn prompt_text(prompt: &str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?)
}

/// Letters offered for the configured moods: A, B, C, ...
fn choice_letters(moods: &MoodIndex) -> impl Iterator<Item = char> + '_ {
    ('A'..='Z').zip(moods.mood_names()).map(|(letter, _)| letter)
}

/// Mood name selected by a lettered choice
pub fn mood_for_choice<'a>(moods: &'a MoodIndex, choice: &str) -> Option<&'a str> {
    let mut chars = choice.trim().chars();
    let letter = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() {
        return None;
    }
    ('A'..='Z')
        .zip(moods.mood_names())
        .find(|(l, _)| *l == letter)
        .map(|(_, name)| name)
}

/// Split comma-separated tags, trimming and dropping empty entries
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags("relaxing, calm,meditation"), vec!["relaxing", "calm", "meditation"]);
        assert_eq!(parse_tags("late,,"), vec!["late"]);
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn test_mood_for_choice() {
        let moods = MoodIndex::default();

        assert_eq!(mood_for_choice(&moods, "A"), Some("Tired"));
        assert_eq!(mood_for_choice(&moods, "b"), Some("Melancholic"));
        assert_eq!(mood_for_choice(&moods, " C "), Some("Happy"));
        assert_eq!(mood_for_choice(&moods, "D"), Some("Grounded"));
        assert_eq!(mood_for_choice(&moods, "E"), None);
        assert_eq!(mood_for_choice(&moods, "AB"), None);
        assert_eq!(mood_for_choice(&moods, ""), None);
    }

    #[test]
    fn test_choice_letters_follow_table_size() {
        let moods = MoodIndex::default();
        let letters: String = choice_letters(&moods).collect();

        assert_eq!(letters, "ABCD");
    }
}

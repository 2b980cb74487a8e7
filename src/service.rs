//! Request dispatch over the catalog, mood index and task board.
//!
//! Front ends translate their input into a [`Request`] and render the
//! [`Response`]; no parsing or printing happens here.

use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::CatalogStore;
use crate::config::ResolvedConfig;
use crate::domain::{PodcastRow, Task};
use crate::recommend::MoodIndex;
use crate::tasks::{TaskBoard, TaskError};

/// One operation a front end can ask for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    CreatePodcast {
        id: i64,
        title: String,
        mood: String,
        tags: Vec<String>,
        seats: i64,
    },
    ListPodcasts,
    UpdatePodcast {
        id: i64,
        title: String,
        mood: String,
    },
    DeletePodcast {
        id: i64,
    },
    Recommend {
        mood: String,
    },
    AddTask {
        name: String,
        assigned_to: String,
    },
    ListTasks,
    CompleteTask {
        position: usize,
    },
}

/// Outcome of a [`Request`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Response {
    Created { message: String },
    Podcasts { rows: Vec<PodcastRow> },
    Updated { title: String },
    Deleted { id: i64 },
    NotFound { id: i64 },
    Recommendations { mood: String, titles: Vec<String> },
    NoRecommendation { mood: String },
    TaskAdded { position: usize },
    Tasks { tasks: Vec<Task> },
    TaskCompleted { position: usize, name: String },
    TaskMissing { position: usize },
}

/// Application state for one process run
#[derive(Debug, Clone, Default)]
pub struct PodTrack {
    catalog: CatalogStore,
    moods: MoodIndex,
    tasks: TaskBoard,
}

impl PodTrack {
    pub fn new(catalog: CatalogStore, moods: MoodIndex) -> Self {
        Self {
            catalog,
            moods,
            tasks: TaskBoard::new(),
        }
    }

    /// Build startup state from resolved configuration
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let catalog = if config.seed {
            CatalogStore::seeded()
        } else {
            CatalogStore::new()
        };
        info!(
            podcasts = catalog.len(),
            moods = config.moods.len(),
            "PodTrack initialized"
        );
        Self::new(catalog, MoodIndex::new(config.moods.clone()))
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn moods(&self) -> &MoodIndex {
        &self.moods
    }

    pub fn tasks(&self) -> &TaskBoard {
        &self.tasks
    }

    /// Execute a request
    pub fn handle(&mut self, request: Request) -> Response {
        debug!(?request, "Handling request");
        match request {
            Request::CreatePodcast {
                id,
                title,
                mood,
                tags,
                seats,
            } => Response::Created {
                message: self.catalog.create(id, title, mood, tags, seats),
            },
            Request::ListPodcasts => Response::Podcasts {
                rows: self.catalog.list(),
            },
            Request::UpdatePodcast { id, title, mood } => {
                if self.catalog.update(id, title.clone(), mood).found {
                    Response::Updated { title }
                } else {
                    Response::NotFound { id }
                }
            }
            Request::DeletePodcast { id } => {
                if self.catalog.delete(id).found {
                    Response::Deleted { id }
                } else {
                    Response::NotFound { id }
                }
            }
            Request::Recommend { mood } => {
                let rec = self.moods.recommend(&mood);
                if rec.found {
                    Response::Recommendations {
                        mood,
                        titles: rec.titles,
                    }
                } else {
                    Response::NoRecommendation { mood }
                }
            }
            Request::AddTask { name, assigned_to } => Response::TaskAdded {
                position: self.tasks.add(name, assigned_to),
            },
            Request::ListTasks => Response::Tasks {
                tasks: self.tasks.list().to_vec(),
            },
            Request::CompleteTask { position } => match self.tasks.complete(position) {
                Ok(task) => Response::TaskCompleted {
                    position,
                    name: task.name.clone(),
                },
                Err(TaskError::NotFound(position)) => Response::TaskMissing { position },
            },
        }
    }
}

//! Placeholder video search.
//!
//! There is no upstream search integration: every query yields the same five
//! template results with the query interpolated into titles and descriptions.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppError;

/// A single search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub channel_title: String,
    pub published_at: DateTime<Utc>,
}

const QUERY_SLOT: &str = "{query}";

struct VideoTemplate {
    id: &'static str,
    channel_title: &'static str,
    title: &'static str,
    description: &'static str,
    age_days: i64,
}

impl VideoTemplate {
    fn render(&self, query: &str, now: DateTime<Utc>) -> Video {
        Video {
            id: self.id.to_string(),
            title: self.title.replace(QUERY_SLOT, query),
            description: self.description.replace(QUERY_SLOT, query),
            thumbnail: thumbnail_url(self.id),
            channel_title: self.channel_title.to_string(),
            published_at: now - Duration::days(self.age_days),
        }
    }
}

const TEMPLATES: &[VideoTemplate] = &[
    VideoTemplate {
        id: "dQw4w9WgXcQ",
        channel_title: "Tech Learning Channel",
        title: "{query} - Introduction and Overview",
        description: "A comprehensive introduction to {query}. Learn the basics and fundamentals in this detailed video tutorial.",
        age_days: 2,
    },
    VideoTemplate {
        id: "jNQXAC9IVRw",
        channel_title: "Expert Academy",
        title: "Advanced {query} Techniques",
        description: "Master advanced concepts and techniques related to {query}. Perfect for intermediate learners.",
        age_days: 5,
    },
    VideoTemplate {
        id: "L_jWHffIx5E",
        channel_title: "Modern Developer",
        title: "{query} Best Practices 2024",
        description: "Learn the best practices and industry standards for {query} in 2024. Stay up to date with the latest trends.",
        age_days: 10,
    },
    VideoTemplate {
        id: "9bZkp7q19f0",
        channel_title: "Coding Bootcamp",
        title: "{query} Tutorial for Beginners",
        description: "Complete beginner-friendly tutorial on {query}. Start from scratch and build your knowledge step by step.",
        age_days: 15,
    },
    VideoTemplate {
        id: "kJQP7kiw5Fk",
        channel_title: "Code Review Pro",
        title: "Common {query} Mistakes to Avoid",
        description: "Avoid these common mistakes when working with {query}. Learn from others' experiences and save time.",
        age_days: 20,
    },
];

fn thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{}/mqdefault.jpg", video_id)
}

/// Returns the five placeholder results for `query`, dated relative to now.
pub fn search(query: &str) -> Result<Vec<Video>, AppError> {
    search_at(query, Utc::now())
}

/// Same as [`search`] with an explicit clock. Results are ordered most recent
/// first, which is simply template order.
pub fn search_at(query: &str, now: DateTime<Utc>) -> Result<Vec<Video>, AppError> {
    if query.is_empty() {
        return Err(AppError::InvalidArgument("Query is required".to_string()));
    }

    Ok(TEMPLATES.iter().map(|t| t.render(query, now)).collect())
}

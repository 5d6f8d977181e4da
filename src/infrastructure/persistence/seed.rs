//! Sample records loaded into the store at startup.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::entities::{Comment, Post, PostStatus};

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .unwrap_or_default()
}

pub fn posts() -> Vec<Post> {
    vec![
        Post {
            id: "1".to_string(),
            title: "Getting Started with Express.js".to_string(),
            content: "Express.js is a minimal and flexible Node.js web application framework that provides a robust set of features for web and mobile applications. In this post, we will explore the basics of setting up an Express server.".to_string(),
            author_name: "Jane Developer".to_string(),
            status: PostStatus::Published,
            created_at: at(2024, 1, 15, 10, 0),
            updated_at: at(2024, 1, 15, 10, 0),
        },
        Post {
            id: "2".to_string(),
            title: "Building RESTful APIs".to_string(),
            content: "REST (Representational State Transfer) is an architectural style for designing networked applications. This guide covers best practices for building RESTful APIs with proper HTTP methods and status codes.".to_string(),
            author_name: "John Coder".to_string(),
            status: PostStatus::Published,
            created_at: at(2024, 1, 20, 14, 30),
            updated_at: at(2024, 1, 21, 9, 15),
        },
        Post {
            id: "3".to_string(),
            title: "Draft: Upcoming Features".to_string(),
            content: "This is a draft post about upcoming features we are planning to add to the blog platform.".to_string(),
            author_name: "Jane Developer".to_string(),
            status: PostStatus::Draft,
            created_at: at(2024, 1, 25, 16, 0),
            updated_at: at(2024, 1, 25, 16, 0),
        },
    ]
}

pub fn comments() -> Vec<Comment> {
    vec![
        Comment {
            id: "1".to_string(),
            post_id: "1".to_string(),
            author_name: "Reader One".to_string(),
            content: "Great introduction! Very helpful for beginners.".to_string(),
            created_at: at(2024, 1, 16, 8, 0),
        },
        Comment {
            id: "2".to_string(),
            post_id: "1".to_string(),
            author_name: "Developer Joe".to_string(),
            content: "Could you also cover middleware in a future post?".to_string(),
            created_at: at(2024, 1, 17, 12, 30),
        },
        Comment {
            id: "3".to_string(),
            post_id: "2".to_string(),
            author_name: "API Enthusiast".to_string(),
            content: "This is exactly what I needed for my project!".to_string(),
            created_at: at(2024, 1, 22, 11, 0),
        },
    ]
}

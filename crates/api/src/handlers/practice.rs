//! Handler for the `/practice/{level}` lesson catalog.
//!
//! The catalog is static content served to authenticated users; the actual
//! videos live with the front end. Levels: 1 alphabets, 2 words,
//! 3 sentences.

use axum::extract::Path;
use axum::Json;
use serde::Serialize;
use signbridge_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;

/// One sign to practice.
#[derive(Debug, Serialize)]
pub struct PracticeItem {
    pub sign: &'static str,
    pub video: &'static str,
    pub description: &'static str,
}

/// Catalog for one level.
#[derive(Debug, Serialize)]
pub struct PracticeLevel {
    pub title: &'static str,
    pub items: Vec<PracticeItem>,
}

/// GET /practice/{level}
pub async fn get_level(_user: AuthUser, Path(level): Path<i32>) -> AppResult<Json<PracticeLevel>> {
    let catalog = match level {
        1 => PracticeLevel {
            title: "Alphabets",
            items: vec![
                item("A", "A.mp4", "Make a fist with your thumb sticking out"),
                item("B", "B.mp4", "Hold your hand flat with fingers together"),
                item("C", "C.mp4", "Form a C shape with your hand"),
                item("D", "D.mp4", "Point your index finger up"),
                item("E", "E.mp4", "Make a fist with your thumb across fingers"),
            ],
        },
        2 => PracticeLevel {
            title: "Words",
            items: vec![
                item("Hello", "Hello.mp4", "Wave your hand"),
                item("Thank You", "ThankYou.mp4", "Touch your chin and move forward"),
                item("Please", "Please.mp4", "Rub your chest in a circular motion"),
                item("Sorry", "Sorry.mp4", "Make a fist and rub your chest"),
                item("Goodbye", "Goodbye.mp4", "Wave your hand"),
            ],
        },
        3 => PracticeLevel {
            title: "Sentences",
            items: vec![
                item("How are you?", "HowAreYou.mp4", "Combination of signs"),
                item("My name is...", "MyNameIs.mp4", "Combination of signs"),
                item("Nice to meet you", "NiceToMeetYou.mp4", "Combination of signs"),
                item("I love you", "ILoveYou.mp4", "Combination of signs"),
                item("What is your name?", "WhatIsYourName.mp4", "Combination of signs"),
            ],
        },
        _ => {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Practice level",
            }))
        }
    };

    Ok(Json(catalog))
}

fn item(sign: &'static str, video: &'static str, description: &'static str) -> PracticeItem {
    PracticeItem {
        sign,
        video,
        description,
    }
}

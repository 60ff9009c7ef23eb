//! Student result model
//!
//! A student's exam result and the letter grade derived from the score.

use super::traits::EntityModel;
use std::fmt;

/// Letter grade for a score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl From<i32> for Grade {
    fn from(score: i32) -> Self {
        match score {
            80..=100 => Grade::A,
            70..=79 => Grade::B,
            60..=69 => Grade::C,
            50..=59 => Grade::D,
            _ => Grade::F,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

/// A student and their score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i32,
    pub full_name: String,
    pub score: i32,
}

impl Student {
    #[must_use]
    pub fn new(id: i32, full_name: &str, score: i32) -> Self {
        Self {
            id,
            full_name: full_name.to_string(),
            score,
        }
    }

    #[must_use]
    pub fn grade(&self) -> Grade {
        Grade::from(self.score)
    }
}

impl EntityModel for Student {
    type Id = i32;

    fn id(&self) -> &i32 {
        &self.id
    }
}

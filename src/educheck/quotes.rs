//! Daily motivational quote rotation: a fixed table walked by day-of-year,
//! so everyone sees the same quote on the same day and it costs nothing to
//! recompute.

use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

pub const DAILY_QUOTES: [Quote; 15] = [
    Quote {
        text: "The future belongs to those who believe in the beauty of their dreams.",
        author: "Eleanor Roosevelt",
    },
    Quote {
        text: "Success is not final, failure is not fatal: it is the courage to continue that counts.",
        author: "Winston Churchill",
    },
    Quote {
        text: "The only way to do great work is to love what you do.",
        author: "Steve Jobs",
    },
    Quote {
        text: "Education is the most powerful weapon which you can use to change the world.",
        author: "Nelson Mandela",
    },
    Quote {
        text: "The beautiful thing about learning is that no one can take it away from you.",
        author: "B.B. King",
    },
    Quote {
        text: "Believe you can and you're halfway there.",
        author: "Theodore Roosevelt",
    },
    Quote {
        text: "It does not matter how slowly you go as long as you do not stop.",
        author: "Confucius",
    },
    Quote {
        text: "The expert in anything was once a beginner.",
        author: "Helen Hayes",
    },
    Quote {
        text: "Don't watch the clock; do what it does. Keep going.",
        author: "Sam Levenson",
    },
    Quote {
        text: "The only impossible journey is the one you never begin.",
        author: "Tony Robbins",
    },
    Quote {
        text: "Success is the sum of small efforts repeated day in and day out.",
        author: "Robert Collier",
    },
    Quote {
        text: "Learning never exhausts the mind.",
        author: "Leonardo da Vinci",
    },
    Quote {
        text: "The way to get started is to quit talking and begin doing.",
        author: "Walt Disney",
    },
    Quote {
        text: "Your limitation—it's only your imagination.",
        author: "Unknown",
    },
    Quote {
        text: "Push yourself, because no one else is going to do it for you.",
        author: "Unknown",
    },
];

/// The quote for a given calendar date.
pub fn daily_quote(date: NaiveDate) -> &'static Quote {
    let index = date.ordinal() as usize % DAILY_QUOTES.len();
    &DAILY_QUOTES[index]
}

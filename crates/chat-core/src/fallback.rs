//! Canned replies used when no completion provider answers.
//!
//! Matching is first-hit-wins over a declared keyword table, then a short
//! list of heuristics. The table order is authoritative: a longer or more
//! specific keyword later in the table never beats an earlier one.

use chrono::{DateTime, Local};

pub type KeywordTable = &'static [(&'static str, &'static str)];

pub const KEYWORD_REPLIES: KeywordTable = &[
    ("hello", "Hello! I'm Palaver, your AI assistant. How can I help you today?"),
    ("hi", "Hi there! I'm Palaver, ready to assist you with any questions or tasks."),
    ("help", "I can help you with various tasks like answering questions, writing content, explaining concepts, coding help, and much more. What would you like to know?"),
    ("weather", "I don't have real-time weather data, but you can ask me about weather concepts or how to check the weather in your area!"),
    ("joke", "Why don't scientists trust atoms? Because they make up everything!"),
    ("name", "I'm Palaver, your intelligent AI assistant!"),
    ("who are you", "I'm Palaver, an AI assistant built to help you with various tasks and answer your questions."),
    ("what can you do", "I can help with answering questions, writing content, explaining concepts, programming help, creative writing, and much more!"),
    ("thank", "You're welcome! Is there anything else I can help you with?"),
    ("bye", "Goodbye! Feel free to come back if you have more questions!"),
    ("how are you", "I'm just a bunch of code, but I'm functioning perfectly! How can I assist you today?"),
    ("wasm", "I'm running as a Rust app compiled to WebAssembly, right in your browser."),
    ("backend", "The chat backend is not answering right now, so I'm replying in simulation mode from a local table."),
];

pub const QUESTION_REPLY: &str = "That's an interesting question! With a live backend I'd give you a detailed answer. For now, I can tell you that I'm an AI assistant designed to help with various tasks.";

pub const MATH_REPLY: &str = "I can help with mathematical concepts and explanations! In simulation mode I can't run calculations, but I can explain how to solve various math problems.";

#[derive(Debug, Clone, Copy)]
pub struct FallbackResponder {
    table: KeywordTable,
}

impl FallbackResponder {
    pub fn new() -> Self {
        Self::with_table(KEYWORD_REPLIES)
    }

    pub fn with_table(table: KeywordTable) -> Self {
        Self { table }
    }

    /// Reply to `message` using the current local time for time questions.
    pub fn reply(&self, message: &str) -> String {
        self.reply_at(message, Local::now())
    }

    pub fn reply_at(&self, message: &str, now: DateTime<Local>) -> String {
        let lower = message.to_lowercase();

        if let Some((_, reply)) = self.table.iter().find(|(kw, _)| lower.contains(*kw)) {
            return reply.to_string();
        }

        // "time" is checked before "?" so "what time is it?" gets the clock.
        if lower.contains("time") {
            return format!(
                "The current time is {}. In simulation mode I can't access other real-time data, but I'm here to help with other questions!",
                now.format("%H:%M")
            );
        }

        if lower.contains('?') {
            return QUESTION_REPLY.to_string();
        }

        if lower.contains("calculate") || lower.contains("math") {
            return MATH_REPLY.to_string();
        }

        default_reply(message)
    }
}

impl Default for FallbackResponder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn default_reply(message: &str) -> String {
    format!(
        "I understand you're asking about \"{}\". I'm running in simulation mode since the chat backend is not available. How can I help you with this topic?",
        message
    )
}

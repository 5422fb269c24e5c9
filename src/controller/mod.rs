pub mod chatbot;

pub use chatbot::{ask, routes as chatbot_routes, summarize, welcome};

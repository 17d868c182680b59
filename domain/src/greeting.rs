/// Keywords that route a query to the small-talk branch. Matching is a
/// case-insensitive substring check, not a word-boundary check, so
/// "this" triggers on "hi".
pub const GREETING_KEYWORDS: [&str; 8] = [
    "hi",
    "hello",
    "hey",
    "greetings",
    "hola",
    "howdy",
    "good morning",
    "morning",
];

/// Canned replies for the small-talk branch.
pub const GREETINGS: [&str; 7] = [
    "Hi, how are you?",
    "Hello! How's it going?",
    "Hey there! What's up?",
    "Greetings! How can I help you today?",
    "Hola! How's your day going?",
    "Howdy! What's on your mind?",
    "Good morning! Happy to see you",
];

pub fn is_greeting(query: &str) -> bool {
    let lowered = query.to_lowercase();
    GREETING_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

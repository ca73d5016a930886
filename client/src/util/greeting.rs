//! Friendly greetings for the empty dashboard.

#[cfg(test)]
#[path = "greeting_test.rs"]
mod greeting_test;

pub const GREETINGS: &[&str] = &["Hello", "Hi there", "Hey", "Welcome", "Good to see you", "Howdy"];

/// Greeting at `index`, wrapping around the list.
pub fn greeting_at(index: usize) -> &'static str {
    GREETINGS[index % GREETINGS.len()]
}

/// Pick a random greeting. Outside the browser this is always the first one.
pub fn random_greeting() -> &'static str {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let index = (js_sys::Math::random() * GREETINGS.len() as f64) as usize;
        greeting_at(index)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        greeting_at(0)
    }
}

/// Full empty-state greeting line for `name`.
pub fn greet(greeting: &str, name: &str) -> String {
    format!("{greeting} {name}!")
}

//! A service for greeting someone.

use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

/// The name to greet when the caller does not provide one.
const DEFAULT_NAME: &str = "World";

/// A user known to the service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// The user's name.
    #[schema(example = "Jim")]
    pub name: String,
}

/// Returns the classic greeting.
#[instrument(ret)]
pub fn static_greeting() -> String {
    "Hello World".to_string()
}

/// Greets someone by name.
///
/// Absent, empty, and all-whitespace names are greeted as "World".
/// Other names are trimmed before use, with interior whitespace kept.
#[instrument(ret)]
pub fn greet(name: Option<&str>) -> String {
    let name = name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_NAME);
    format!("Hello {}", name)
}

/// Returns the built-in user.
#[instrument(ret)]
pub fn fixed_user() -> User {
    User {
        name: "Jim".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_greeting_is_hello_world() {
        assert_eq!("Hello World", static_greeting());
    }

    #[test]
    fn greet_uses_the_given_name() {
        assert_eq!("Hello Jim", greet(Some("Jim")));
    }

    #[test]
    fn greet_without_name_defaults_to_world() {
        assert_eq!("Hello World", greet(None));
    }

    #[test]
    fn greet_with_blank_name_defaults_to_world() {
        assert_eq!("Hello World", greet(Some("")));
        assert_eq!("Hello World", greet(Some("   ")));
        assert_eq!("Hello World", greet(Some("\t\r\n")));
    }

    #[test]
    fn greet_trims_surrounding_whitespace() {
        assert_eq!("Hello Jim", greet(Some(" Jim ")));
    }

    #[test]
    fn greet_keeps_interior_whitespace() {
        assert_eq!("Hello Mary Jane", greet(Some("  Mary Jane ")));
    }

    #[test]
    fn fixed_user_is_jim() {
        assert_eq!(
            User {
                name: "Jim".to_string()
            },
            fixed_user()
        );
    }

    #[test]
    fn repeated_calls_give_identical_results() {
        assert_eq!(static_greeting(), static_greeting());
        assert_eq!(greet(Some("Foo")), greet(Some("Foo")));
        assert_eq!(fixed_user(), fixed_user());
    }
}

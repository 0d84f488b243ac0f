//! Test factory for creating Discord user payloads.

use serenity::all::User;

/// Builds the JSON body Discord returns from `GET /users/{user_id}`.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Unique username
/// - `global_name` - Optional display name
pub fn test_user_json(
    user_id: u64,
    username: &str,
    global_name: Option<&str>,
) -> serde_json::Value {
    serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "global_name": global_name,
        "discriminator": "0",
        "avatar": null,
        "bot": false,
        "public_flags": 0,
    })
}

/// Creates a test Serenity User from the same payload as `test_user_json`.
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
pub fn create_test_user(user_id: u64, username: &str, global_name: Option<&str>) -> User {
    serde_json::from_value(test_user_json(user_id, username, global_name))
        .expect("Failed to create test user - invalid JSON structure")
}

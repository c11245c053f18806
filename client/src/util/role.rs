//! Role labels and avatar colors.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

/// Display label for a numeric role.
pub fn role_name(role: i32) -> &'static str {
    match role {
        0 => "Admin",
        1 => "Agent",
        2 => "Customer",
        _ => "User",
    }
}

/// CSS modifier class used to color a participant avatar by role.
pub fn role_class(role: i32) -> &'static str {
    match role {
        0 => "avatar--admin",
        1 => "avatar--agent",
        2 => "avatar--customer",
        _ => "avatar--user",
    }
}

/// Uppercased first character of `name`, or `?` for an empty name.
pub fn initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

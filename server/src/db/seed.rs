//! Demo data for local runs.
//!
//! Inserts the users advertised on the login page plus two rooms. Every
//! statement is `ON CONFLICT DO NOTHING`, so reseeding an existing database is
//! a no-op.

use sqlx::PgPool;
use tracing::info;

/// `(id, name, role)` for each demo user.
pub const DEMO_USERS: [(&str, &str, i32); 3] = [
    ("admin@mail.com", "Admin", 0),
    ("agent@mail.com", "Agent", 1),
    ("customer@mail.com", "Customer", 2),
];

/// `(id, name, image_url, participant ids)` for each demo room.
const DEMO_ROOMS: [(i64, &str, &str, &[&str]); 2] = [
    (
        1,
        "Customer Support",
        "https://picsum.photos/seed/support/96",
        &["admin@mail.com", "agent@mail.com", "customer@mail.com"],
    ),
    (2, "Staff Lounge", "https://picsum.photos/seed/staff/96", &["admin@mail.com", "agent@mail.com"]),
];

/// Seed demo users, rooms, and memberships.
///
/// # Errors
///
/// Returns a database error if any insert fails.
pub async fn seed_demo_data(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for (id, name, role) in DEMO_USERS {
        sqlx::query("INSERT INTO users (id, name, role) VALUES ($1, $2, $3) ON CONFLICT (id) DO NOTHING")
            .bind(id)
            .bind(name)
            .bind(role)
            .execute(&mut *tx)
            .await?;
    }

    for (room_id, name, image_url, members) in DEMO_ROOMS {
        sqlx::query("INSERT INTO rooms (id, name, image_url) VALUES ($1, $2, $3) ON CONFLICT (id) DO NOTHING")
            .bind(room_id)
            .bind(name)
            .bind(image_url)
            .execute(&mut *tx)
            .await?;

        for user_id in members {
            sqlx::query(
                "INSERT INTO room_participants (room_id, user_id) VALUES ($1, $2)
                 ON CONFLICT (room_id, user_id) DO NOTHING",
            )
            .bind(room_id)
            .bind(*user_id)
            .execute(&mut *tx)
            .await?;
        }
    }

    // Explicit ids above do not advance the BIGSERIAL sequence.
    sqlx::query("SELECT setval(pg_get_serial_sequence('rooms', 'id'), GREATEST((SELECT MAX(id) FROM rooms), 1))")
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    info!(users = DEMO_USERS.len(), rooms = DEMO_ROOMS.len(), "demo data seeded");
    Ok(())
}

// Pattern 1: Creational Patterns - Builder, Factory, Singleton
// Each pattern runs twice: without it, then with it.
//
// Usage: p1_creational [config.toml]

use colored::Colorize;
use std::path::PathBuf;

use pattern_catalog::creational::builder::{UserBuilder, UserWithoutBuilder};
use pattern_catalog::creational::factory::{
    create_user_manually, Account, UserData, UserFactory, UserKind,
};
use pattern_catalog::creational::singleton::{create_connection, Database};
use pattern_catalog::{telemetry, CatalogConfig};

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn describe(account: &dyn Account) -> String {
    let permissions: Vec<String> = account
        .permissions()
        .iter()
        .map(ToString::to_string)
        .collect();
    format!(
        "{} ({}): [{}]",
        account.name(),
        account.id(),
        permissions.join(", ")
    )
}

// ============================================================================
// Builder
// ============================================================================

fn builder_without_pattern() -> anyhow::Result<()> {
    let user4 = UserWithoutBuilder::new(
        "1",
        "John",
        Some("john@example.com"),
        Some(30),
        Some("123 Street"),
        Some("123456789"),
    );
    let user5 = UserWithoutBuilder::new("2", "Alice", Some("alice@example.com"), None, None, None);
    let user6 = UserWithoutBuilder::new("3", "Bob", None, Some(25), Some("456 Avenue"), None);

    for user in [&user4, &user5, &user6] {
        print_json(user)?;
    }
    Ok(())
}

fn builder_with_pattern() -> anyhow::Result<()> {
    let user1 = UserBuilder::new("1", "John")
        .email("john@example.com")
        .age(30)
        .address("123 Street")
        .phone("123456789")
        .build();
    let user2 = UserBuilder::new("2", "Alice")
        .email("alice@example.com")
        .build();
    let user3 = UserBuilder::new("3", "Bob")
        .age(25)
        .address("456 Avenue")
        .build();

    for user in [&user1, &user2, &user3] {
        print_json(user)?;
    }
    Ok(())
}

// ============================================================================
// Factory
// ============================================================================

fn factory_without_pattern() -> anyhow::Result<()> {
    let user = create_user_manually("admin", UserData::new("1", "John"))?;
    println!("{}", describe(user.as_ref()));

    if let Err(err) = create_user_manually("guest", UserData::new("9", "Eve")) {
        println!("{}", err);
    }
    Ok(())
}

fn factory_with_pattern() {
    let admin = UserFactory::create(UserKind::Admin, UserData::new("1", "John"));
    let moderator = UserFactory::create(UserKind::Moderator, UserData::new("2", "Alice"));
    println!("{}", describe(admin.as_ref()));
    println!("{}", describe(moderator.as_ref()));
}

// ============================================================================
// Singleton
// ============================================================================

fn singleton_without_pattern() {
    let db1 = create_connection();
    let db2 = create_connection();
    println!("db1 === db2: {}", db1.id() == db2.id());
}

fn singleton_with_pattern() -> anyhow::Result<()> {
    let db1 = Database::instance();
    let db2 = Database::instance();
    println!("db1 === db2: {}", std::ptr::eq(db1, db2));
    print_json(db1.config())
}

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = CatalogConfig::load_or_default(config_path.as_deref())?;
    telemetry::init(&config.telemetry);

    println!("{}", "Pattern 1: Creational Patterns".bold());
    println!("===============================\n");

    println!("{}", "=== Builder (without) ===".yellow());
    builder_without_pattern()?;
    println!();

    println!("{}", "=== Builder (with) ===".green());
    builder_with_pattern()?;
    println!();

    println!("{}", "=== Factory (without) ===".yellow());
    factory_without_pattern()?;
    println!();

    println!("{}", "=== Factory (with) ===".green());
    factory_with_pattern();
    println!();

    println!("{}", "=== Singleton (without) ===".yellow());
    singleton_without_pattern();
    println!();

    println!("{}", "=== Singleton (with) ===".green());
    singleton_with_pattern()?;

    Ok(())
}

// Pattern: Builder
// Fluent by-value builder vs. a constructor with every optional field spelled out.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

// ============================================================================
// With the pattern
// ============================================================================

#[derive(Debug, Clone)]
pub struct UserBuilder {
    id: String,
    name: String,
    email: Option<String>,
    age: Option<u32>,
    address: Option<String>,
    phone: Option<String>,
}

impl UserBuilder {
    /// `id` and `name` are required; everything else is optional.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: None,
            age: None,
            address: None,
            phone: None,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn build(self) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            age: self.age,
            address: self.address,
            phone: self.phone,
        }
    }
}

// ============================================================================
// Without the pattern: positional arguments, `None` placeholders
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserWithoutBuilder {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl UserWithoutBuilder {
    pub fn new(
        id: &str,
        name: &str,
        email: Option<&str>,
        age: Option<u32>,
        address: Option<&str>,
        phone: Option<&str>,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            email: email.map(str::to_string),
            age,
            address: address.map(str::to_string),
            phone: phone.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_all_fields() {
        let user = UserBuilder::new("1", "John")
            .email("john@example.com")
            .age(30)
            .address("123 Street")
            .phone("123456789")
            .build();

        assert_eq!(user.email.as_deref(), Some("john@example.com"));
        assert_eq!(user.age, Some(30));
        assert_eq!(user.phone.as_deref(), Some("123456789"));
    }

    #[test]
    fn test_builder_defaults_are_none() {
        let user = UserBuilder::new("2", "Alice").email("alice@example.com").build();
        assert_eq!(user.age, None);
        assert_eq!(user.address, None);
        assert_eq!(user.phone, None);
    }

    #[test]
    fn test_both_styles_agree() {
        let built = UserBuilder::new("3", "Bob")
            .age(25)
            .address("456 Avenue")
            .build();
        let positional = UserWithoutBuilder::new("3", "Bob", None, Some(25), Some("456 Avenue"), None);

        assert_eq!(
            serde_json::to_value(&built).unwrap(),
            serde_json::to_value(&positional).unwrap()
        );
    }

    #[test]
    fn test_json_skips_missing_fields() {
        let user = UserBuilder::new("2", "Alice").email("alice@example.com").build();
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(
            json,
            r#"{"id":"2","name":"Alice","email":"alice@example.com"}"#
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_derive::Deserialize, serde_derive::Serialize)]
pub enum UserType {
    Employee,
    Admin,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Deserialize, serde_derive::Serialize)]
pub struct User {
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub email: String,
    #[serde(default = "connected")]
    pub status: String,
}

/// The signed-in user, passed explicitly to the containers that need it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    user: Option<User>,
}

fn connected() -> String {
    "connected".to_string()
}

// --

impl User {
    pub fn employee(email: impl Into<String>) -> Self {
        Self {
            user_type: UserType::Employee,
            email: email.into(),
            status: connected(),
        }
    }
}

impl Session {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn connected(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }
}

//! User entity - a member of the skill-exchange platform

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// User entity with skill-exchange profile attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Id,
    pub username: String,
    pub email: String,
    pub bio: Option<String>,
    /// Free-text list of skills the user can teach
    pub skills_have: Option<String>,
    /// Free-text list of skills the user wants to learn
    pub skills_want: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Id, username: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            bio: None,
            skills_have: None,
            skills_want: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether the user offers a skill (case-insensitive substring match)
    pub fn offers_skill(&self, skill: &str) -> bool {
        contains_ignore_case(self.skills_have.as_deref(), skill)
    }

    /// Check whether the username contains a fragment (case-insensitive)
    pub fn username_matches(&self, fragment: &str) -> bool {
        contains_ignore_case(Some(&self.username), fragment)
    }

    /// Replace the editable profile fields
    pub fn update_profile(&mut self, update: ProfileUpdate) {
        self.username = update.username;
        self.email = update.email;
        if let Some(bio) = update.bio {
            self.bio = Some(bio);
        }
        if let Some(skills_have) = update.skills_have {
            self.skills_have = Some(skills_have);
        }
        if let Some(skills_want) = update.skills_want {
            self.skills_want = Some(skills_want);
        }
        self.updated_at = Utc::now();
    }
}

fn contains_ignore_case(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(&needle.to_lowercase()))
}

/// Data required to create a user; the id is assigned by the datastore
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub bio: Option<String>,
    pub skills_have: Option<String>,
    pub skills_want: Option<String>,
}

/// Editable profile fields. `username` and `email` are always replaced,
/// the optional fields only when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub username: String,
    pub email: String,
    pub bio: Option<String>,
    pub skills_have: Option<String>,
    pub skills_want: Option<String>,
}

/// Discovery filter for user search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserSearch {
    /// Match against `skills_have`
    Skill(String),
    /// Match against `username`
    Username(String),
    /// Match against either `skills_have` or `username`
    Any(String),
}

impl UserSearch {
    /// Build a search from optional query terms.
    ///
    /// Precedence is skill, then username, then the general term. Empty terms
    /// count as absent; whitespace is searched as given.
    pub fn from_terms(
        skill: Option<&str>,
        username: Option<&str>,
        query: Option<&str>,
    ) -> Option<Self> {
        let non_empty = |s: Option<&str>| s.filter(|s| !s.is_empty()).map(str::to_string);

        non_empty(skill)
            .map(Self::Skill)
            .or_else(|| non_empty(username).map(Self::Username))
            .or_else(|| non_empty(query).map(Self::Any))
    }

    /// The raw search term
    pub fn term(&self) -> &str {
        match self {
            Self::Skill(t) | Self::Username(t) | Self::Any(t) => t,
        }
    }

    /// Check whether a user satisfies this filter
    pub fn matches(&self, user: &User) -> bool {
        match self {
            Self::Skill(t) => user.offers_skill(t),
            Self::Username(t) => user.username_matches(t),
            Self::Any(t) => user.offers_skill(t) || user.username_matches(t),
        }
    }
}

//! User entity <-> model mapper

use skillx_core::entities::User;
use skillx_core::value_objects::Id;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Id::new(model.id),
            username: model.username,
            email: model.email,
            bio: model.bio,
            skills_have: model.skills_have,
            skills_want: model.skills_want,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Column values for a profile update
pub struct UserUpdate<'a> {
    pub id: i64,
    pub username: &'a str,
    pub email: &'a str,
    pub bio: Option<&'a str>,
    pub skills_have: Option<&'a str>,
    pub skills_want: Option<&'a str>,
}

impl<'a> UserUpdate<'a> {
    pub fn new(user: &'a User) -> Self {
        Self {
            id: user.id.into_inner(),
            username: &user.username,
            email: &user.email,
            bio: user.bio.as_deref(),
            skills_have: user.skills_have.as_deref(),
            skills_want: user.skills_want.as_deref(),
        }
    }
}

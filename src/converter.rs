use crate::models::{User, UserInput};

/// Maps a validated request onto the entity shape, field for field.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserConverter;

impl UserConverter {
    pub fn convert(&self, input: UserInput) -> User {
        User {
            id: input.id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            password: input.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_convert_copies_every_field() {
        let id = Uuid::new_v4();
        let input = UserInput {
            id: Some(id),
            first_name: "Slavko".to_string(),
            last_name: "Gutiy".to_string(),
            email: "slavko@gmail.com".to_string(),
            password: "Slavko1234$".to_string(),
        };

        let user = UserConverter.convert(input);

        assert_eq!(user.id, Some(id));
        assert_eq!(user.first_name, "Slavko");
        assert_eq!(user.last_name, "Gutiy");
        assert_eq!(user.email, "slavko@gmail.com");
        assert_eq!(user.password, "Slavko1234$");
    }

    #[test]
    fn test_convert_keeps_missing_id() {
        let input = UserInput {
            id: None,
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            email: "a@b.com".to_string(),
            password: "Abcdef1!".to_string(),
        };

        assert_eq!(UserConverter.convert(input).id, None);
    }
}

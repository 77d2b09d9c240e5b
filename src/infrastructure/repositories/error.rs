// src/infrastructure/repositories/error.rs
use crate::domain::catalog::messages::{self, Field, Violation};
use crate::domain::errors::DomainError;

const CNT_EMOJI_SLUG: &str = "emojis_slug_key";
const CNT_EMOJI_NAME: &str = "emojis_name_key";
const CNT_EMOJI_UUID: &str = "emojis_uuid_key";
const CNT_GLIZZY_SLUG: &str = "glizzys_slug_key";
const CNT_GLIZZY_NAME: &str = "glizzys_name_key";
const CNT_GLIZZY_UUID: &str = "glizzys_uuid_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_EMOJI_SLUG | CNT_GLIZZY_SLUG => {
                        DomainError::Conflict("The slug already exists.".into())
                    }
                    CNT_EMOJI_NAME | CNT_GLIZZY_NAME => DomainError::Conflict(
                        messages::message(Field::Name, Violation::Unique).into(),
                    ),
                    CNT_EMOJI_UUID | CNT_GLIZZY_UUID => DomainError::Conflict(
                        messages::message(Field::Uuid, Violation::Unique).into(),
                    ),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

// src/domain/catalog/messages.rs
//
// Client-facing validation messages keyed by field and violation kind. The
// catalogue overrides generic framework wording so API consumers always see
// the same phrasing for the same mistake.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Uuid,
    Name,
    Slug,
    ShortInfo,
    LongInfo,
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Blank,
    DoesNotExist,
    Invalid,
    MaxLength,
    Null,
    Required,
    Unique,
}

pub fn message(field: Field, violation: Violation) -> &'static str {
    use Field as F;
    use Violation as V;

    match (field, violation) {
        (F::Uuid, V::Unique) => "The uuid is not unique.",

        (F::Name, V::Blank | V::Null) => "The name cannot be empty.",
        (F::Name, V::Invalid) => "Invalid value for the name.",
        (F::Name, V::MaxLength) => "The name should be no more than 100 characters.",
        (F::Name, V::Required) => "The name is required.",
        (F::Name, V::Unique) => "The name already exists.",

        (F::Slug, V::DoesNotExist) => "The slug does not exist.",
        (F::Slug, V::Invalid) => "Invalid value for the slug.",
        (F::Slug, V::MaxLength) => "The slug should be no more than 100 characters.",
        (F::Slug, V::Null | V::Blank) => "The slug cannot be empty.",

        (F::ShortInfo, V::Blank | V::Null) => "The short info cannot be empty.",
        (F::ShortInfo, V::Invalid) => "Invalid value for the short info.",
        (F::ShortInfo, V::MaxLength) => "The short info should be no more than 200 characters.",
        (F::ShortInfo, V::Required) => "The short info is required.",

        (F::LongInfo, V::Blank | V::Null) => "The long info cannot be empty.",
        (F::LongInfo, V::Invalid) => "Invalid value for the long info.",
        (F::LongInfo, V::Required) => "The long info is required.",

        (F::Image, V::Blank) => "The image cannot be empty.",
        (F::Image, V::Required) => "The image is required.",

        _ => "Invalid value.",
    }
}

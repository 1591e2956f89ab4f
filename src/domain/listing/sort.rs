//! Sort resolution
//!
//! A raw `"field,direction"` expression is resolved against a per-entity
//! allow-list. Unknown fields and directions fall back silently; callers
//! never see an error for a bad sort expression.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// `desc` (any case, surrounding whitespace ignored) is descending;
    /// every other token is ascending.
    pub fn from_token(token: &str) -> Self {
        if token.trim().eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Allow-listed sort field of one entity.
///
/// Implementors are plain enums; the store layer maps every variant to a
/// typed column, so no caller-supplied name ever reaches a query.
pub trait SortField: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Every sortable field, in documentation order.
    const ALLOWED: &'static [Self];
    /// Field used when the caller names nothing usable.
    const PRIMARY: Self;

    /// Public (camelCase) name of the field.
    fn as_str(self) -> &'static str;

    fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALLOWED
            .iter()
            .copied()
            .find(|field| field.as_str().eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: SortField> SortSpec<F> {
    pub fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Resolve `expr` split on its first comma. A missing or unknown field
    /// becomes `fallback`; a missing direction is ascending.
    pub fn resolve(expr: &str, fallback: F) -> Self {
        let (field_token, direction_token) = expr.split_once(',').unwrap_or((expr, ""));
        Self {
            field: F::from_name(field_token).unwrap_or(fallback),
            direction: SortDirection::from_token(direction_token),
        }
    }
}

impl<F: SortField> Default for SortSpec<F> {
    fn default() -> Self {
        Self::new(F::PRIMARY, SortDirection::Asc)
    }
}

impl<F: SortField> fmt::Display for SortSpec<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.field.as_str(), self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Field {
        Name,
        Code,
        CreatedAt,
    }

    impl SortField for Field {
        const ALLOWED: &'static [Self] = &[Self::Name, Self::Code, Self::CreatedAt];
        const PRIMARY: Self = Self::Name;

        fn as_str(self) -> &'static str {
            match self {
                Self::Name => "name",
                Self::Code => "code",
                Self::CreatedAt => "createdAt",
            }
        }
    }

    #[test]
    fn direction_is_desc_only_for_desc_token() {
        assert_eq!(SortDirection::from_token("desc"), SortDirection::Desc);
        assert_eq!(SortDirection::from_token("DESC"), SortDirection::Desc);
        assert_eq!(SortDirection::from_token(" Desc "), SortDirection::Desc);
        assert_eq!(SortDirection::from_token("asc"), SortDirection::Asc);
        assert_eq!(SortDirection::from_token(""), SortDirection::Asc);
        assert_eq!(SortDirection::from_token("descending"), SortDirection::Asc);
        assert_eq!(SortDirection::from_token("up"), SortDirection::Asc);
    }

    #[test]
    fn resolves_allowed_field_and_direction() {
        let spec = SortSpec::resolve("code,desc", Field::PRIMARY);
        assert_eq!(spec, SortSpec::new(Field::Code, SortDirection::Desc));
    }

    #[test]
    fn unknown_field_falls_back_without_error() {
        let spec = SortSpec::resolve("bogusField,asc", Field::PRIMARY);
        assert_eq!(spec.field, Field::Name);
        assert_eq!(spec.direction, SortDirection::Asc);
    }

    #[test]
    fn unknown_field_keeps_requested_direction() {
        let spec = SortSpec::resolve("password,desc", Field::PRIMARY);
        assert_eq!(spec, SortSpec::new(Field::Name, SortDirection::Desc));
    }

    #[test]
    fn field_match_ignores_case_and_whitespace() {
        let spec = SortSpec::resolve(" CREATEDAT , DESC", Field::PRIMARY);
        assert_eq!(spec, SortSpec::new(Field::CreatedAt, SortDirection::Desc));
        assert_eq!(spec.field.as_str(), "createdAt");
    }

    #[test]
    fn splits_on_first_comma_only() {
        let spec = SortSpec::resolve("name,desc,extra", Field::PRIMARY);
        assert_eq!(spec, SortSpec::new(Field::Name, SortDirection::Asc));
    }

    #[test]
    fn missing_direction_is_ascending() {
        assert_eq!(
            SortSpec::resolve("code", Field::PRIMARY),
            SortSpec::new(Field::Code, SortDirection::Asc)
        );
        assert_eq!(
            SortSpec::resolve("", Field::Code),
            SortSpec::new(Field::Code, SortDirection::Asc)
        );
    }

    #[test]
    fn display_round_trips_through_resolve() {
        let spec = SortSpec::new(Field::CreatedAt, SortDirection::Desc);
        assert_eq!(spec.to_string(), "createdAt,desc");
        assert_eq!(SortSpec::resolve(&spec.to_string(), Field::PRIMARY), spec);
    }
}

//! String constant groups
//!
//! A constant group is a fieldless enum deriving `strum::IntoStaticStr`,
//! `AsRefStr`, `Display`, `EnumString` and `EnumIter`, one variant per
//! documented literal. Model fields stay `String`, so `string_constants!`
//! lets a variant be passed to any `impl Into<String>` setter.

use strum::IntoEnumIterator;

/// Literals of a constant group in declaration order
pub fn literals<E>() -> Vec<&'static str>
where
    E: IntoEnumIterator + Into<&'static str>,
{
    E::iter().map(Into::into).collect()
}

/// Implement `From<Group> for String` for each listed constant group
#[macro_export]
macro_rules! string_constants {
    ($($group:ty),+ $(,)?) => {
        $(
            impl From<$group> for String {
                fn from(value: $group) -> Self {
                    <&'static str>::from(value).to_owned()
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
    #[strum(serialize_all = "snake_case")]
    enum Speed {
        Gentle,
        Normal,
        VeryAggressive,
    }

    string_constants!(Speed);

    #[test]
    fn lists_literals_in_order() {
        assert_eq!(literals::<Speed>(), ["gentle", "normal", "very_aggressive"]);
    }

    #[test]
    fn converts_to_owned_string() {
        let value: String = Speed::VeryAggressive.into();
        assert_eq!(value, "very_aggressive");
        assert_eq!(Speed::Normal.to_string(), "normal");
        assert_eq!("gentle".parse::<Speed>().unwrap(), Speed::Gentle);
    }
}

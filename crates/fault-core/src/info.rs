use std::fmt;

use serde::Serialize;

/// Named diagnostic value attached to a [`Fault`](crate::Fault)
///
/// Values may themselves be infos or lists of infos, so a single entry can
/// carry a small diagnostic tree. An info prints as `{name: value}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Info {
    pub name: String,
    pub value: InfoValue,
}

impl Info {
    pub fn new(name: impl Into<String>, value: impl Into<InfoValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Info {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}: {}}}", self.name, self.value)
    }
}

impl<N, V> From<(N, V)> for Info
where
    N: Into<String>,
    V: Into<InfoValue>,
{
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}

/// Payload of an [`Info`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InfoValue {
    Text(String),
    Json(serde_json::Value),
    Info(Box<Info>),
    List(Vec<Info>),
}

impl fmt::Display for InfoValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) | Self::Json(serde_json::Value::String(text)) => f.write_str(text),
            Self::Json(value) => write!(f, "{value}"),
            Self::Info(info) => write!(f, "{info}"),
            Self::List(infos) => {
                f.write_str("[")?;
                for (i, info) in infos.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{info}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<String> for InfoValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for InfoValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<serde_json::Value> for InfoValue {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

impl From<Info> for InfoValue {
    fn from(value: Info) -> Self {
        Self::Info(Box::new(value))
    }
}

impl From<Vec<Info>> for InfoValue {
    fn from(value: Vec<Info>) -> Self {
        Self::List(value)
    }
}

macro_rules! info_value_from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for InfoValue {
                fn from(value: $ty) -> Self {
                    Self::Text(value.to_string())
                }
            }
        )*
    };
}

info_value_from_display!(bool, i32, i64, u16, u32, u64, usize, f64);

/// Types that know how to describe themselves for a [`Fault`](crate::Fault)
///
/// Domain values such as request payloads implement this so failure sites
/// can attach them without spelling out the info by hand.
pub trait ProvideInfo {
    fn error_info(&self) -> Info;
}

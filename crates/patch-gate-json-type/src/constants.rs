//! Validation error codes.

/// Why a value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    Required,
    NoChange,
    Unknown,
    Bool,
    Num,
    Int,
    Gt,
    Gte,
    Lt,
    Lte,
    Str,
    StrLen,
    Ascii,
    Pattern,
    Arr,
    ArrLen,
    Obj,
}

impl ValidationError {
    pub fn name(self) -> &'static str {
        match self {
            Self::Required => "REQUIRED",
            Self::NoChange => "NO_CHANGE",
            Self::Unknown => "UNKNOWN",
            Self::Bool => "BOOL",
            Self::Num => "NUM",
            Self::Int => "INT",
            Self::Gt => "GT",
            Self::Gte => "GTE",
            Self::Lt => "LT",
            Self::Lte => "LTE",
            Self::Str => "STR",
            Self::StrLen => "STR_LEN",
            Self::Ascii => "ASCII",
            Self::Pattern => "PATTERN",
            Self::Arr => "ARR",
            Self::ArrLen => "ARR_LEN",
            Self::Obj => "OBJ",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

//! Element types that can cross the native boundary.

/// Data types for array elements.
///
/// The discriminants are the codes used in `CArrayDesc::dtype`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum DType {
    F32 = 0,
    F64 = 1,
    I32 = 2,
    I64 = 3,
}

impl DType {
    /// Look up a dtype from its C code.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(DType::F32),
            1 => Some(DType::F64),
            2 => Some(DType::I32),
            3 => Some(DType::I64),
            _ => None,
        }
    }

    /// C code of this dtype.
    #[inline]
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Size in bytes of a single element.
    pub fn size_bytes(&self) -> usize {
        match self {
            DType::F32 | DType::I32 => 4,
            DType::F64 | DType::I64 => 8,
        }
    }

    /// Required alignment of a buffer holding this dtype.
    pub fn align(&self) -> usize {
        match self {
            DType::F32 => std::mem::align_of::<f32>(),
            DType::F64 => std::mem::align_of::<f64>(),
            DType::I32 => std::mem::align_of::<i32>(),
            DType::I64 => std::mem::align_of::<i64>(),
        }
    }

    /// Returns true if this dtype is a floating-point type.
    pub fn is_float(&self) -> bool {
        matches!(self, DType::F32 | DType::F64)
    }
}

impl std::fmt::Display for DType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DType::F32 => write!(f, "f32"),
            DType::F64 => write!(f, "f64"),
            DType::I32 => write!(f, "i32"),
            DType::I64 => write!(f, "i64"),
        }
    }
}

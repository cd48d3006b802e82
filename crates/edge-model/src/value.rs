// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Versatile values: type-tagged scalar or array payloads.
//!
//! The type tag is not stored next to the payload. It is derived from the
//! payload arm, so releasing a value always runs the destructor of the
//! payload's real shape.
//!
//! ```
//! use edge_model::{ValueType, Variant, VariantArray, Versatility};
//!
//! let scalar = Versatility::from(Variant::Double(21.5));
//! assert_eq!(scalar.value_type(), ValueType::Double);
//!
//! let array = Versatility::from(VariantArray::String(vec!["a".into(), "b".into()]));
//! assert!(array.is_array());
//! assert_eq!(array.len(), 2);
//! ```

use uuid::Uuid;

use crate::clone::TryClone;
use crate::error::Result;
use crate::node::NodeId;

/// Name qualified by a namespace index.
#[derive(Debug, PartialEq, Eq, Hash, Default)]
pub struct QualifiedName {
    pub namespace_index: u16,
    pub name: String,
}

impl TryClone for QualifiedName {
    fn try_clone(&self) -> Result<Self> {
        Ok(Self {
            namespace_index: self.namespace_index,
            name: self.name.try_clone()?,
        })
    }
}

/// Human-readable text with its locale.
#[derive(Debug, PartialEq, Eq, Hash, Default)]
pub struct LocalizedText {
    pub locale: String,
    pub text: String,
}

impl TryClone for LocalizedText {
    fn try_clone(&self) -> Result<Self> {
        Ok(Self {
            locale: self.locale.try_clone()?,
            text: self.text.try_clone()?,
        })
    }
}

macro_rules! value_types {
    ($($(#[$meta:meta])* $name:ident($ty:ty) = $code:literal,)+) => {
        /// OPC UA built-in type id of a versatile value.
        #[repr(u8)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ValueType {
            $($(#[$meta])* $name = $code,)+
        }

        impl ValueType {
            /// OPC UA built-in type id.
            pub const fn code(self) -> u8 {
                self as u8
            }

            /// Creates from an OPC UA built-in type id.
            pub fn from_code(code: u8) -> Option<Self> {
                match code {
                    $($code => Some(Self::$name),)+
                    _ => None,
                }
            }
        }

        /// Single value of any built-in type.
        #[derive(Debug, PartialEq)]
        pub enum Variant {
            $($(#[$meta])* $name($ty),)+
        }

        impl Variant {
            /// Type tag of this value.
            pub const fn value_type(&self) -> ValueType {
                match self {
                    $(Self::$name(_) => ValueType::$name,)+
                }
            }
        }

        /// Homogeneous array of a built-in type.
        #[derive(Debug, PartialEq)]
        pub enum VariantArray {
            $($(#[$meta])* $name(Vec<$ty>),)+
        }

        impl VariantArray {
            /// Type tag shared by every element.
            pub const fn value_type(&self) -> ValueType {
                match self {
                    $(Self::$name(_) => ValueType::$name,)+
                }
            }

            pub fn len(&self) -> usize {
                match self {
                    $(Self::$name(v) => v.len(),)+
                }
            }

            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }
        }
    };
}

value_types! {
    Boolean(bool) = 1,
    SByte(i8) = 2,
    Byte(u8) = 3,
    Int16(i16) = 4,
    UInt16(u16) = 5,
    Int32(i32) = 6,
    UInt32(u32) = 7,
    Int64(i64) = 8,
    UInt64(u64) = 9,
    Float(f32) = 10,
    Double(f64) = 11,
    String(String) = 12,
    /// 100ns ticks since 1601-01-01 UTC
    DateTime(i64) = 13,
    Guid(Uuid) = 14,
    ByteString(Vec<u8>) = 15,
    XmlElement(String) = 16,
    NodeId(NodeId) = 17,
    StatusCode(u32) = 19,
    QualifiedName(QualifiedName) = 20,
    LocalizedText(LocalizedText) = 21,
}

/// Versatile value: a scalar or an array, tagged by its built-in type.
#[derive(Debug, PartialEq)]
pub enum Versatility {
    Scalar(Variant),
    Array(VariantArray),
}

impl Versatility {
    /// Declared type of the payload.
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Scalar(v) => v.value_type(),
            Self::Array(a) => a.value_type(),
        }
    }

    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Element count (1 for a scalar).
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Array(a) => a.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Variant> for Versatility {
    fn from(value: Variant) -> Self {
        Self::Scalar(value)
    }
}

impl From<VariantArray> for Versatility {
    fn from(value: VariantArray) -> Self {
        Self::Array(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_type_codes() {
        assert_eq!(ValueType::Boolean.code(), 1);
        assert_eq!(ValueType::NodeId.code(), 17);
        assert_eq!(ValueType::StatusCode.code(), 19);
        assert_eq!(ValueType::LocalizedText.code(), 21);
    }

    #[test]
    fn test_from_code() {
        for code in 0..=u8::MAX {
            if let Some(ty) = ValueType::from_code(code) {
                assert_eq!(ty.code(), code);
            }
        }
        assert_eq!(ValueType::from_code(0), None);
        // 18 (ExpandedNodeId) is not carried by this model
        assert_eq!(ValueType::from_code(18), None);
        assert_eq!(ValueType::from_code(12), Some(ValueType::String));
    }

    #[test]
    fn test_tag_follows_payload() {
        let value = Versatility::from(Variant::QualifiedName(QualifiedName {
            namespace_index: 1,
            name: "Pressure".into(),
        }));
        assert_eq!(value.value_type(), ValueType::QualifiedName);
        assert!(!value.is_array());
        assert_eq!(value.len(), 1);

        let value = Versatility::from(VariantArray::LocalizedText(vec![
            LocalizedText {
                locale: "en-US".into(),
                text: "Pressure".into(),
            },
            LocalizedText {
                locale: "de-DE".into(),
                text: "Druck".into(),
            },
        ]));
        assert_eq!(value.value_type(), ValueType::LocalizedText);
        assert!(value.is_array());
        assert_eq!(value.len(), 2);
    }

    #[test]
    fn test_empty_array() {
        let value = Versatility::from(VariantArray::Int32(Vec::new()));
        assert!(value.is_empty());
        assert_eq!(value.value_type(), ValueType::Int32);
    }

    #[test]
    fn test_localized_text_clone() {
        let src = LocalizedText {
            locale: "en-US".into(),
            text: "Temperature".into(),
        };
        let clone = src.try_clone().unwrap();
        assert_eq!(clone, src);
        assert_ne!(clone.text.as_ptr(), src.text.as_ptr());
    }
}

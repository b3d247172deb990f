//! Interned structural type store.
//!
//! Types are deduplicated on interning, so equal structures share a `TypeId`
//! and type equality is an O(1) id comparison. The intrinsic types every
//! scaffolding category needs are pre-registered with fixed ids, which keeps
//! placeholder dispatch a plain `match` over constants.

use bitflags::bitflags;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::cell::RefCell;

/// Interned type identifier. Compare with `==`; obtain via [`TypeInterner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TypeId(pub u32);

impl TypeId {
    pub const BOOLEAN: TypeId = TypeId(0);
    pub const I8: TypeId = TypeId(1);
    pub const U8: TypeId = TypeId(2);
    pub const I16: TypeId = TypeId(3);
    pub const U16: TypeId = TypeId(4);
    pub const I32: TypeId = TypeId(5);
    pub const U32: TypeId = TypeId(6);
    pub const I64: TypeId = TypeId(7);
    pub const U64: TypeId = TypeId(8);
    pub const F32: TypeId = TypeId(9);
    pub const F64: TypeId = TypeId(10);
    pub const CHAR: TypeId = TypeId(11);
    pub const STRING: TypeId = TypeId(12);
    pub const DECIMAL: TypeId = TypeId(13);
    /// The universal object type. Scaffolding has no safe placeholder for it.
    pub const OBJECT: TypeId = TypeId(14);

    pub(crate) const INTRINSIC_COUNT: u32 = 15;
}

/// Built-in type categories with fixed placeholder behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntrinsicKind {
    Boolean,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
    Char,
    String,
    Decimal,
    Object,
}

impl IntrinsicKind {
    /// All intrinsics in `TypeId` pre-registration order.
    pub(crate) const ALL: [IntrinsicKind; TypeId::INTRINSIC_COUNT as usize] = [
        IntrinsicKind::Boolean,
        IntrinsicKind::I8,
        IntrinsicKind::U8,
        IntrinsicKind::I16,
        IntrinsicKind::U16,
        IntrinsicKind::I32,
        IntrinsicKind::U32,
        IntrinsicKind::I64,
        IntrinsicKind::U64,
        IntrinsicKind::F32,
        IntrinsicKind::F64,
        IntrinsicKind::Char,
        IntrinsicKind::String,
        IntrinsicKind::Decimal,
        IntrinsicKind::Object,
    ];

    pub fn name(self) -> &'static str {
        match self {
            IntrinsicKind::Boolean => "bool",
            IntrinsicKind::I8 => "sbyte",
            IntrinsicKind::U8 => "byte",
            IntrinsicKind::I16 => "short",
            IntrinsicKind::U16 => "ushort",
            IntrinsicKind::I32 => "int",
            IntrinsicKind::U32 => "uint",
            IntrinsicKind::I64 => "long",
            IntrinsicKind::U64 => "ulong",
            IntrinsicKind::F32 => "float",
            IntrinsicKind::F64 => "double",
            IntrinsicKind::Char => "char",
            IntrinsicKind::String => "string",
            IntrinsicKind::Decimal => "decimal",
            IntrinsicKind::Object => "object",
        }
    }
}

bitflags! {
    /// Member classification flags. Only readable/writable instance members
    /// participate in mapping; static and indexer members are excluded.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PropertyFlags: u8 {
        const READABLE = 1 << 0;
        const WRITABLE = 1 << 1;
        const STATIC = 1 << 2;
        const INDEXER = 1 << 3;
    }
}

/// A named, typed member of an object type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyInfo {
    pub name: String,
    pub type_id: TypeId,
    pub flags: PropertyFlags,
}

impl PropertyInfo {
    /// A readable + writable instance member (settable property, public field).
    pub fn new(name: impl Into<String>, type_id: TypeId) -> Self {
        PropertyInfo {
            name: name.into(),
            type_id,
            flags: PropertyFlags::READABLE | PropertyFlags::WRITABLE,
        }
    }

    /// A get-only member.
    pub fn read_only(name: impl Into<String>, type_id: TypeId) -> Self {
        PropertyInfo {
            name: name.into(),
            type_id,
            flags: PropertyFlags::READABLE,
        }
    }

    pub fn with_flags(name: impl Into<String>, type_id: TypeId, flags: PropertyFlags) -> Self {
        PropertyInfo {
            name: name.into(),
            type_id,
            flags,
        }
    }

    /// Writable instance member, eligible as a mapping target.
    pub fn is_mapping_target(&self) -> bool {
        self.flags.contains(PropertyFlags::WRITABLE)
            && !self
                .flags
                .intersects(PropertyFlags::STATIC | PropertyFlags::INDEXER)
    }

    /// Readable instance member, eligible as a mapping source.
    pub fn is_mapping_source(&self) -> bool {
        self.flags.contains(PropertyFlags::READABLE)
            && !self
                .flags
                .intersects(PropertyFlags::STATIC | PropertyFlags::INDEXER)
    }
}

/// Structural data behind a `TypeId`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeData {
    Intrinsic(IntrinsicKind),
    /// Enumeration with variant names in declaration order.
    Enum { name: String, variants: Vec<String> },
    /// Named object type with declaration-ordered members and an optional
    /// base type forming the inheritance chain.
    Named {
        name: String,
        props: Vec<PropertyInfo>,
        base: Option<TypeId>,
    },
}

impl TypeData {
    pub fn name(&self) -> &str {
        match self {
            TypeData::Intrinsic(kind) => kind.name(),
            TypeData::Enum { name, .. } => name,
            TypeData::Named { name, .. } => name,
        }
    }
}

/// Read port onto the type model. The engine only ever consumes this trait;
/// hosts supply an implementation (usually [`TypeInterner`]).
pub trait TypeDatabase {
    fn type_data(&self, id: TypeId) -> TypeData;

    fn type_name(&self, id: TypeId) -> String {
        self.type_data(id).name().to_string()
    }
}

/// Deduplicating type store.
///
/// Interior mutability keeps interning usable behind a shared reference, the
/// same way host sessions hand the model around read-only.
pub struct TypeInterner {
    entries: RefCell<Vec<TypeData>>,
    dedup: RefCell<FxHashMap<TypeData, TypeId>>,
}

impl TypeInterner {
    pub fn new() -> Self {
        let interner = TypeInterner {
            entries: RefCell::new(Vec::new()),
            dedup: RefCell::new(FxHashMap::default()),
        };
        for kind in IntrinsicKind::ALL {
            interner.intern(TypeData::Intrinsic(kind));
        }
        interner
    }

    /// Intern a type, returning the existing id for an equal structure.
    pub fn intern(&self, data: TypeData) -> TypeId {
        if let Some(id) = self.dedup.borrow().get(&data) {
            return *id;
        }
        let mut entries = self.entries.borrow_mut();
        let id = TypeId(entries.len() as u32);
        entries.push(data.clone());
        self.dedup.borrow_mut().insert(data, id);
        id
    }

    /// Intern an enumeration with declaration-ordered variants.
    pub fn enum_type(&self, name: impl Into<String>, variants: Vec<String>) -> TypeId {
        self.intern(TypeData::Enum {
            name: name.into(),
            variants,
        })
    }

    /// Intern a named object type with no base.
    pub fn object_type(&self, name: impl Into<String>, props: Vec<PropertyInfo>) -> TypeId {
        self.intern(TypeData::Named {
            name: name.into(),
            props,
            base: None,
        })
    }

    /// Intern a named object type deriving from `base`.
    pub fn object_type_with_base(
        &self,
        name: impl Into<String>,
        props: Vec<PropertyInfo>,
        base: TypeId,
    ) -> TypeId {
        self.intern(TypeData::Named {
            name: name.into(),
            props,
            base: Some(base),
        })
    }

    pub fn lookup(&self, id: TypeId) -> Option<TypeData> {
        self.entries.borrow().get(id.0 as usize).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl TypeDatabase for TypeInterner {
    fn type_data(&self, id: TypeId) -> TypeData {
        // An unknown id degrades to the universal object type, which no
        // resolver can supply a value for.
        self.lookup(id)
            .unwrap_or(TypeData::Intrinsic(IntrinsicKind::Object))
    }
}

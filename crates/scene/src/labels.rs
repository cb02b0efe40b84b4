//! String tables for enum-valued component fields.
//!
//! Dropdowns show labels and map the chosen label back through
//! `Labelled::from_label`, never through an ordinal. An unknown label is
//! logged and replaced by the type's `FALLBACK`.

use std::collections::BTreeSet;

/// A label did not match any variant of `kind`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported {kind} {label:?}")]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub label: String,
}

/// Two variants of `kind` share a label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} label {label:?} is used by more than one variant")]
pub struct DuplicateLabel {
    pub kind: &'static str,
    pub label: &'static str,
}

pub trait Labelled: Sized + Copy + PartialEq + 'static {
    /// Human name of the field, used in log messages.
    const KIND: &'static str;
    /// Every variant.
    const ALL: &'static [Self];
    /// Value used when a label cannot be mapped.
    const FALLBACK: Self;

    fn label(self) -> &'static str;

    /// Variants offered in a dropdown. Defaults to `ALL`.
    fn options() -> &'static [Self] {
        Self::ALL
    }

    fn try_from_label(label: &str) -> Result<Self, UnknownLabel> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.label() == label)
            .ok_or_else(|| UnknownLabel {
                kind: Self::KIND,
                label: label.to_string(),
            })
    }

    fn from_label(label: &str) -> Self {
        match Self::try_from_label(label) {
            Ok(value) => value,
            Err(err) => {
                tracing::error!("{}", err);
                Self::FALLBACK
            }
        }
    }
}

/// Fail on the first label shared by two variants of `T`.
pub fn check_unique<T: Labelled>() -> Result<(), DuplicateLabel> {
    let mut seen = BTreeSet::new();
    for value in T::ALL {
        let label = value.label();
        if !seen.insert(label) {
            return Err(DuplicateLabel { kind: T::KIND, label });
        }
    }
    Ok(())
}

/// Check every label table in this crate. Run once at startup.
pub fn verify_label_tables() -> Result<(), DuplicateLabel> {
    use crate::{
        Axes, CollisionShapeType, ControllerType, EnvironmentMode, LightType, PlayMode,
        PrimitiveType, Shape2D,
    };
    check_unique::<CollisionShapeType>()?;
    check_unique::<Shape2D>()?;
    check_unique::<PlayMode>()?;
    check_unique::<LightType>()?;
    check_unique::<PrimitiveType>()?;
    check_unique::<EnvironmentMode>()?;
    check_unique::<ControllerType>()?;
    check_unique::<Axes>()?;
    Ok(())
}

/// `(kind, labels offered)` for every table, for listings.
pub fn label_tables() -> Vec<(&'static str, Vec<&'static str>)> {
    use crate::{
        Axes, CollisionShapeType, ControllerType, EnvironmentMode, LightType, PlayMode,
        PrimitiveType, Shape2D,
    };
    fn row<T: Labelled>() -> (&'static str, Vec<&'static str>) {
        (T::KIND, T::options().iter().map(|v| v.label()).collect())
    }
    vec![
        row::<CollisionShapeType>(),
        row::<Shape2D>(),
        row::<PlayMode>(),
        row::<LightType>(),
        row::<PrimitiveType>(),
        row::<EnvironmentMode>(),
        row::<ControllerType>(),
        row::<Axes>(),
    ]
}

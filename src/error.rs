use std::any::Any;
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// The errors produced by container operations and the extension registry.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An unchecked extraction was performed on an empty or failed container.
    #[error("no such element: {0}")]
    NoSuchElement(&'static str),
    /// [`install`](crate::extensions::install) was called while the
    /// extensions were already installed.
    #[error("conversion extensions are already installed")]
    AlreadyInstalled,
    /// [`uninstall`](crate::extensions::uninstall) was called while the
    /// extensions were not installed.
    #[error("conversion extensions are not installed")]
    NotInstalled,
}

/// The error value produced when [`Outcome::capture`] catches a panic.
///
/// The panic payload is reduced to its message once, at the capture
/// boundary. Payloads that are not strings keep a placeholder message.
///
/// [`Outcome::capture`]: crate::outcome::Outcome::capture
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("captured panic: {message}")]
pub struct CapturedPanic {
    /// The message the panic was raised with.
    pub message: String,
}

impl CapturedPanic {
    pub(crate) fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(message) = payload.downcast_ref::<&'static str>() {
            (*message).to_string()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            String::from("non-string panic payload")
        };
        Self { message }
    }
}

/// The failures accumulated by [`Outcome::combine`].
///
/// A lone failure is held directly; two or more form a sequence in
/// combination order. [`merge`](Errors::merge) flattens one level, so
/// chained combines keep a flat list instead of nesting accumulations.
///
/// [`Outcome::combine`]: crate::outcome::Outcome::combine
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Errors<E> {
    /// Exactly one failure.
    One(E),
    /// Two or more failures.
    Many(Vec<E>),
}

impl<E> Errors<E> {
    /// The number of accumulated errors.
    pub fn len(&self) -> usize {
        match self {
            Errors::One(_) => 1,
            Errors::Many(errors) => errors.len(),
        }
    }

    /// Whether the accumulation holds no errors at all.
    ///
    /// Only constructible through [`Errors::from`] on an empty vector;
    /// `combine` always records at least one error per failure.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends another accumulation, flattening one level.
    pub fn merge(self, other: Errors<E>) -> Errors<E> {
        let mut errors = self.into_vec();
        errors.extend(other.into_vec());
        Errors::from(errors)
    }

    /// Appends a single error.
    pub fn push(self, error: E) -> Errors<E> {
        self.merge(Errors::One(error))
    }

    /// Consumes the accumulation into a plain vector.
    pub fn into_vec(self) -> Vec<E> {
        match self {
            Errors::One(error) => vec![error],
            Errors::Many(errors) => errors,
        }
    }

    /// Iterates over the accumulated errors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        match self {
            Errors::One(error) => std::slice::from_ref(error).iter(),
            Errors::Many(errors) => errors.iter(),
        }
    }
}

impl<E> From<E> for Errors<E> {
    fn from(error: E) -> Self {
        Errors::One(error)
    }
}

impl<E> From<Vec<E>> for Errors<E> {
    /// Normalizes a one-element vector to [`Errors::One`].
    fn from(errors: Vec<E>) -> Self {
        match <[E; 1]>::try_from(errors) {
            Ok([error]) => Errors::One(error),
            Err(errors) => Errors::Many(errors),
        }
    }
}

impl<E: Display> Display for Errors<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
            first = false;
        }
        Ok(())
    }
}

impl<E: fmt::Debug + Display> std::error::Error for Errors<E> {}

/// Conversion into an [`Errors`] accumulation.
///
/// Implemented for any error type (held as a lone error) and for [`Errors`]
/// itself (kept as-is), which is what lets chained
/// [`Outcome::combine`](crate::outcome::Outcome::combine) calls flatten one
/// level instead of nesting.
pub trait IntoErrors<E> {
    /// Converts `self` into an accumulation over `E`.
    fn into_errors(self) -> Errors<E>;
}

impl<E> IntoErrors<E> for E {
    fn into_errors(self) -> Errors<E> {
        Errors::One(self)
    }
}

impl<E> IntoErrors<E> for Errors<E> {
    fn into_errors(self) -> Errors<E> {
        self
    }
}

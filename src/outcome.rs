use crate::blank::Blank;
use crate::error::{CapturedPanic, Error, Errors, IntoErrors};
use crate::iter::{Iter, IterMut};
use crate::maybe::Maybe;
use std::fmt::{self, Display, Formatter};
use std::panic::{self, UnwindSafe};

use Outcome::{Failure, Success};

/// Wraps a value as a success.
pub fn success<T, E>(value: T) -> Outcome<T, E> {
    Success(value)
}

/// Wraps an error as a failure.
pub fn failure<T, E>(error: E) -> Outcome<T, E> {
    Failure(error)
}

/// A value of type `T`, or the error of type `E` it failed with.
///
/// The shape mirrors [`Maybe`] with a second channel carrying why the
/// value is absent: [`map`]/[`flat_map`]/[`apply`] transform the success
/// channel, [`map_error`]/[`rescue_with`] the failure channel, and
/// [`combine`] aggregates several outcomes while keeping every failure.
///
/// ```
/// use amphora::outcome::{success, Outcome};
///
/// let parsed: Outcome<i32, std::num::ParseIntError> = "7".parse::<i32>().into();
/// assert_eq!(parsed.map(|n| n * 6), success(42));
/// ```
///
/// [`map`]: Outcome::map
/// [`flat_map`]: Outcome::flat_map
/// [`apply`]: Outcome::apply
/// [`map_error`]: Outcome::map_error
/// [`rescue_with`]: Outcome::rescue_with
/// [`combine`]: Outcome::combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// A successfully produced value.
    Success(T),
    /// The error the computation failed with.
    Failure(E),
}

impl<T> Outcome<T, CapturedPanic> {
    /// Evaluates `f`, converting a panic into a [`Failure`].
    ///
    /// The panic payload is reduced to a [`CapturedPanic`] at this
    /// boundary only; panics raised anywhere else in the crate propagate
    /// untouched.
    ///
    /// ```
    /// use amphora::outcome::{success, Outcome};
    ///
    /// assert_eq!(Outcome::capture(|| 10 / 2), success(5));
    /// ```
    pub fn capture<F>(f: F) -> Outcome<T, CapturedPanic>
    where
        F: FnOnce() -> T + UnwindSafe,
    {
        match panic::catch_unwind(f) {
            Ok(value) => Success(value),
            Err(payload) => Failure(CapturedPanic::from_payload(payload)),
        }
    }
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if the computation succeeded.
    pub const fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    /// Returns `true` if the computation failed.
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Builds an outcome from a fallible standard result.
    pub fn from_result(result: Result<T, E>) -> Outcome<T, E> {
        match result {
            Ok(value) => Success(value),
            Err(error) => Failure(error),
        }
    }

    /// Converts into a standard result, surfacing the carried error.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Success(value) => Ok(value),
            Failure(error) => Err(error),
        }
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    /// Converts from `&mut Outcome<T, E>` to `Outcome<&mut T, &mut E>`.
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    /// Extracts the success value as a nullable, discarding any error.
    pub fn into_value(self) -> Option<T> {
        self.into_result().ok()
    }

    /// Extracts the carried error as a nullable.
    pub fn into_error(self) -> Option<E> {
        self.into_result().err()
    }

    /// Returns the carried error, or [`Error::NoSuchElement`] on `Success`.
    pub fn try_error(self) -> Result<E, Error> {
        match self {
            Success(_) => Err(Error::NoSuchElement("error on Success")),
            Failure(error) => Ok(error),
        }
    }

    /// Returns the success value or the given default.
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Success(value) => value,
            Failure(_) => default,
        }
    }

    /// Returns the success value or evaluates the default lazily.
    pub fn get_or_else_with<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Success(value) => value,
            Failure(_) => default(),
        }
    }

    /// Returns the carried error or the given default.
    pub fn error_or_else(self, default: E) -> E {
        match self {
            Success(_) => default,
            Failure(error) => error,
        }
    }

    /// Returns the carried error or evaluates the default lazily.
    pub fn error_or_else_with<F>(self, default: F) -> E
    where
        F: FnOnce() -> E,
    {
        match self {
            Success(_) => default(),
            Failure(error) => error,
        }
    }

    /// Transforms the success value; a `Failure` passes through unchanged.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Success(value) => Success(f(value)),
            Failure(error) => Failure(error),
        }
    }

    /// Chains an outcome-producing function without double-wrapping.
    pub fn flat_map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Success(value) => f(value),
            Failure(error) => Failure(error),
        }
    }

    /// Applies an arbitrary operation to the success value and re-wraps
    /// the result, the fluent-delegation counterpart of [`map`].
    ///
    /// The operation may return a plain value, a standard [`Result`] or
    /// another [`Outcome`]; on `Failure` it is never invoked and the
    /// failure passes through.
    ///
    /// [`map`]: Outcome::map
    pub fn apply<U, N, F>(self, f: F) -> Outcome<U, E>
    where
        N: Into<Outcome<U, E>>,
        F: FnOnce(T) -> N,
    {
        match self {
            Success(value) => f(value).into(),
            Failure(error) => Failure(error),
        }
    }

    /// Transforms the carried error; a `Success` passes through unchanged.
    pub fn map_error<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(f(error)),
        }
    }

    /// Collapses the outcome to a single value. Both branches are
    /// required callables.
    pub fn fold<U, FF, FS>(self, on_failure: FF, on_success: FS) -> U
    where
        FF: FnOnce(E) -> U,
        FS: FnOnce(T) -> U,
    {
        match self {
            Success(value) => on_success(value),
            Failure(error) => on_failure(error),
        }
    }

    /// Recovers from a failure with an outcome-producing function; a
    /// `Success` passes through unchanged.
    pub fn rescue_with<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> Outcome<T, E2>,
    {
        match self {
            Success(value) => Success(value),
            Failure(error) => f(error),
        }
    }

    /// Returns `self` if successful, otherwise `other`.
    pub fn or<E2>(self, other: Outcome<T, E2>) -> Outcome<T, E2> {
        match self {
            Success(value) => Success(value),
            Failure(_) => other,
        }
    }

    /// Returns `self` if successful, otherwise evaluates the alternative.
    ///
    /// The thunk is invoked at most once and never on `Success`.
    pub fn or_else<E2, F>(self, alternative: F) -> Outcome<T, E2>
    where
        F: FnOnce() -> Outcome<T, E2>,
    {
        match self {
            Success(value) => Success(value),
            Failure(_) => alternative(),
        }
    }

    /// Combines two successes with `f`, short-circuiting on the first
    /// failure encountered in argument order.
    ///
    /// Unlike [`combine`](Outcome::combine), a second failure is
    /// discarded.
    pub fn and<U, R, F>(self, other: Outcome<U, E>, f: F) -> Outcome<R, E>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Success(a), Success(b)) => Success(f(a, b)),
            (Failure(error), _) => Failure(error),
            (_, Failure(error)) => Failure(error),
        }
    }

    /// Applicative aggregation: combines two successes with `f`, otherwise
    /// accumulates **every** failure present.
    ///
    /// A lone failure is carried as [`Errors::One`], several as
    /// [`Errors::Many`]. Because both error channels convert through
    /// [`IntoErrors`], chained combines merge flat instead of nesting:
    ///
    /// ```
    /// use amphora::error::Errors;
    /// use amphora::outcome::{failure, Outcome};
    ///
    /// let a: Outcome<i32, &str> = failure("e1");
    /// let b: Outcome<i32, &str> = failure("e2");
    /// let c: Outcome<i32, &str> = failure("e3");
    ///
    /// let gathered = a.combine(b, |x, y| x + y).combine(c, |x, y| x + y);
    /// assert_eq!(gathered, failure(Errors::Many(vec!["e1", "e2", "e3"])));
    /// ```
    pub fn combine<T2, E2, EE, U, F>(self, other: Outcome<T2, E2>, f: F) -> Outcome<U, Errors<EE>>
    where
        E: IntoErrors<EE>,
        E2: IntoErrors<EE>,
        F: FnOnce(T, T2) -> U,
    {
        match (self, other) {
            (Success(a), Success(b)) => Success(f(a, b)),
            (Failure(error), Success(_)) => Failure(error.into_errors()),
            (Success(_), Failure(error)) => Failure(error.into_errors()),
            (Failure(first), Failure(second)) => {
                Failure(first.into_errors().merge(second.into_errors()))
            }
        }
    }

    /// As [`combine`](Outcome::combine), over a homogeneous collection:
    /// `f` receives every success value only when no outcome failed.
    pub fn combine_all<EE, U, I, F>(outcomes: I, f: F) -> Outcome<U, Errors<EE>>
    where
        I: IntoIterator<Item = Outcome<T, E>>,
        E: IntoErrors<EE>,
        F: FnOnce(Vec<T>) -> U,
    {
        let mut values = Vec::new();
        let mut failures: Option<Errors<EE>> = None;
        for outcome in outcomes {
            match outcome {
                Success(value) => values.push(value),
                Failure(error) => {
                    let error = error.into_errors();
                    failures = Some(match failures {
                        Some(accumulated) => accumulated.merge(error),
                        None => error,
                    });
                }
            }
        }
        match failures {
            Some(errors) => Failure(errors),
            None => Success(f(values)),
        }
    }

    /// Converts to a [`Maybe`], discarding any carried error.
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Success(value) => Maybe::Some(value),
            Failure(_) => Maybe::None,
        }
    }

    /// Keeps a success only when it satisfies the predicate; a rejected
    /// value fails with [`Error::NoSuchElement`].
    pub fn filter<F>(self, predicate: F) -> Outcome<T, E>
    where
        F: FnOnce(&T) -> bool,
        E: From<Error>,
    {
        match self {
            Success(value) => {
                if predicate(&value) {
                    Success(value)
                } else {
                    Failure(E::from(Error::NoSuchElement("value filtered out")))
                }
            }
            Failure(error) => Failure(error),
        }
    }

    /// Iterates over the success value by reference.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref().into_value())
    }

    /// Iterates over the success value by mutable reference.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.as_mut().into_value())
    }

    /// The length of the sequence view: 1 for `Success`, 0 for `Failure`.
    pub const fn len(&self) -> usize {
        if self.is_success() {
            1
        } else {
            0
        }
    }

    /// Whether the sequence view is empty, i.e. the outcome failed.
    pub const fn is_empty(&self) -> bool {
        self.is_failure()
    }
}

impl<T: Blank, E> Outcome<T, E> {
    /// Whether a success value is present in the [`Blank`] sense.
    pub fn is_present(&self) -> bool {
        match self {
            Success(value) => value.is_present(),
            Failure(_) => false,
        }
    }

    /// Whether the outcome failed or holds a blank value.
    pub fn is_blank(&self) -> bool {
        !self.is_present()
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting on the success channel.
    pub fn flatten(self) -> Outcome<T, E> {
        self.flat_map(|inner| inner)
    }
}

impl<T: Display, E: Display> Display for Outcome<T, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Success(value) => write!(f, "Success({})", value),
            Failure(error) => write!(f, "Failure({})", error),
        }
    }
}

impl<T, E> From<T> for Outcome<T, E> {
    fn from(value: T) -> Self {
        Success(value)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

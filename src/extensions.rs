//! Universal conversion methods and their opt-in installation registry.
//!
//! The [`Wrap`] trait is implemented for every sized type, so the
//! conversion methods are always in scope once the trait is imported. The
//! registry below tracks an explicit installed/uninstalled state for
//! applications that wire the conversions into a boot sequence and want
//! double-install and double-uninstall surfaced as errors, with a scoped
//! form for test setup. Install and uninstall mutate process-wide state:
//! callers serialize them or confine them to single-threaded phases.
//! [`is_installed`] is safe to read from any thread.

use crate::error::Error;
use crate::maybe::Maybe;
use crate::outcome::Outcome;
use parking_lot::Mutex;
use tracing::debug;

/// Conversion methods available on every sized value.
///
/// ```
/// use amphora::extensions::Wrap;
/// use amphora::maybe::some;
/// use amphora::outcome::{failure, success};
///
/// assert_eq!(5_i32.into_some(), some(5));
/// assert_eq!("ok".into_success::<()>(), success("ok"));
/// assert_eq!("nope".into_failure::<i32>(), failure("nope"));
/// ```
pub trait Wrap: Sized {
    /// Wraps the value as a present [`Maybe`].
    fn into_some(self) -> Maybe<Self> {
        Maybe::Some(self)
    }

    /// Wraps the value as a successful [`Outcome`].
    fn into_success<E>(self) -> Outcome<Self, E> {
        Outcome::Success(self)
    }

    /// Wraps the value as a failed [`Outcome`].
    fn into_failure<T>(self) -> Outcome<T, Self> {
        Outcome::Failure(self)
    }
}

impl<T> Wrap for T {}

static INSTALLED: Mutex<bool> = Mutex::new(false);

/// Marks the conversion extensions as installed.
///
/// Fails with [`Error::AlreadyInstalled`] when already installed.
pub fn install() -> Result<(), Error> {
    let mut installed = INSTALLED.lock();
    if *installed {
        return Err(Error::AlreadyInstalled);
    }
    *installed = true;
    debug!("conversion extensions installed");
    Ok(())
}

/// Marks the conversion extensions as uninstalled.
///
/// Fails with [`Error::NotInstalled`] when not installed.
pub fn uninstall() -> Result<(), Error> {
    let mut installed = INSTALLED.lock();
    if !*installed {
        return Err(Error::NotInstalled);
    }
    *installed = false;
    debug!("conversion extensions uninstalled");
    Ok(())
}

/// Whether the conversion extensions are currently installed.
pub fn is_installed() -> bool {
    *INSTALLED.lock()
}

/// Installs the extensions, runs `f` and uninstalls afterward, even when
/// `f` panics.
///
/// ```
/// use amphora::extensions;
///
/// let length = extensions::with_extensions(|| {
///     assert!(extensions::is_installed());
///     "hi".len()
/// }).unwrap();
/// assert_eq!(length, 2);
/// assert!(!extensions::is_installed());
/// ```
pub fn with_extensions<R, F>(f: F) -> Result<R, Error>
where
    F: FnOnce() -> R,
{
    install()?;
    let _guard = UninstallGuard;
    Ok(f())
}

struct UninstallGuard;

impl Drop for UninstallGuard {
    fn drop(&mut self) {
        if uninstall().is_err() {
            debug!("extensions were uninstalled inside the scoped block");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maybe::some;
    use crate::outcome::{failure, success};
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn test_wrap_conversions() {
        assert_eq!("test".into_some(), some("test"));
        assert_eq!("test".into_success::<()>(), success("test"));
        assert_eq!("err".into_failure::<()>(), failure("err"));
    }

    // The registry is process-global, so every lifecycle assertion lives in
    // this single test; separate tests would race under the parallel runner.
    #[test]
    fn test_install_lifecycle() {
        assert!(!is_installed());

        install().unwrap();
        assert!(is_installed());
        assert_eq!(install(), Err(Error::AlreadyInstalled));

        uninstall().unwrap();
        assert!(!is_installed());
        assert_eq!(uninstall(), Err(Error::NotInstalled));

        let result = with_extensions(|| {
            assert!(is_installed());
            "value"
        });
        assert_eq!(result, Ok("value"));
        assert!(!is_installed());

        // The scoped form uninstalls even when the block panics.
        let panicked = catch_unwind(AssertUnwindSafe(|| {
            let _ = with_extensions(|| panic!("boom"));
        }));
        assert!(panicked.is_err());
        assert!(!is_installed());

        // A nested install inside the scoped form is rejected.
        let nested = with_extensions(|| install());
        assert_eq!(nested, Ok(Err(Error::AlreadyInstalled)));
        assert!(!is_installed());
    }
}

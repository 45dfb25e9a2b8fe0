// SPDX-License-Identifier: MIT OR Apache-2.0

//! Map SDK initialization port.
//!
//! The SDK itself is a closed native library owned by the host application.
//! Bootstrap code only needs two calls from it, captured here.

/// The subset of a map SDK's static initializer used at startup.
///
/// Implementations forward to the platform SDK (for example through FFI).
/// Neither call is ever made with an empty string.
///
/// # Examples
///
/// ```rust
/// use bootcfg::ports::MapSdk;
///
/// #[derive(Default)]
/// struct Recorder(Vec<String>);
///
/// impl MapSdk for Recorder {
///     fn set_locale(&mut self, locale: &str) {
///         self.0.push(format!("locale={locale}"));
///     }
///
///     fn set_api_key(&mut self, api_key: &str) {
///         self.0.push(format!("key={api_key}"));
///     }
/// }
///
/// let mut sdk = Recorder::default();
/// sdk.set_locale("ru_RU");
/// assert_eq!(sdk.0, vec!["locale=ru_RU"]);
/// ```
pub trait MapSdk {
    /// Sets the SDK's locale, e.g. `ru_RU`.
    fn set_locale(&mut self, locale: &str);

    /// Registers the API key.
    fn set_api_key(&mut self, api_key: &str);
}

impl<T: MapSdk + ?Sized> MapSdk for &mut T {
    fn set_locale(&mut self, locale: &str) {
        (**self).set_locale(locale)
    }

    fn set_api_key(&mut self, api_key: &str) {
        (**self).set_api_key(api_key)
    }
}

/// Builds a parameter slice from values convertible into [`Value`].
///
/// ```
/// # use tug::params;
/// # fn takes(_: &[tug::Value]) {}
/// takes(params![87i64, "Cryptonomicon", None::<String>]);
/// ```
///
/// [`Value`]: crate::Value
#[macro_export]
macro_rules! params {
    () => {
        &[] as &[$crate::Value]
    };
    ($($value:expr),+ $(,)?) => {
        &[$($crate::Value::from($value)),+]
    };
}

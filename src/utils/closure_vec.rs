/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// Creates a [`Vec`] where each value is created calling the passed closure.
///
/// This is handy for vectors of atomics, which are not [`Clone`].
///
/// # Arguments
/// * `closure`: the closure called to initialize each value of the [`Vec`].
/// * `length`: the length of the created [`Vec`].
///
/// # Examples
/// ```
/// # use shortest_paths::utils::closure_vec;
/// use std::sync::atomic::{AtomicIsize, Ordering};
///
/// let v = closure_vec(|| AtomicIsize::new(-1), 3);
/// assert_eq!(v.len(), 3);
/// assert_eq!(v[2].load(Ordering::Relaxed), -1);
/// ```
#[inline(always)]
pub fn closure_vec<T>(mut closure: impl FnMut() -> T, length: usize) -> Vec<T> {
    (0..length).map(|_| closure()).collect()
}
